//! Request argument shapes: one OID or many.

/// OIDs (or `set` entries) for a single logical request.
///
/// Operations accept `impl Into<Oids>`, so both a single string and any
/// collection of strings can be passed directly:
///
/// ```rust
/// use snmp_shell::Oids;
///
/// let one: Oids = ".1.3.6.1.2.1.1.3.0".into();
/// let many: Oids = vec![".1.3.6.1.2.1.1.3.0", ".1.3.6.1.2.1.1.5.0"].into();
///
/// assert_eq!(one.len(), 1);
/// assert_eq!(many.len(), 2);
/// ```
///
/// OIDs are opaque strings here. Nothing checks that they are numeric or
/// start with `.1.`; that is the tool's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Oids {
    /// A single OID.
    Single(String),
    /// A list of OIDs, sent in order.
    Many(Vec<String>),
}

impl Oids {
    /// Number of entries.
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Many(v) => v.len(),
        }
    }

    /// True if there is nothing to request.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Borrow the entries as a slice.
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::Single(s) => std::slice::from_ref(s),
            Self::Many(v) => v,
        }
    }

    /// Normalize into a vector.
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::Single(s) => vec![s],
            Self::Many(v) => v,
        }
    }
}

impl From<String> for Oids {
    fn from(s: String) -> Self {
        Self::Single(s)
    }
}

impl From<&str> for Oids {
    fn from(s: &str) -> Self {
        Self::Single(s.to_owned())
    }
}

impl From<&String> for Oids {
    fn from(s: &String) -> Self {
        Self::Single(s.clone())
    }
}

impl From<Vec<String>> for Oids {
    fn from(v: Vec<String>) -> Self {
        Self::Many(v)
    }
}

impl From<Vec<&str>> for Oids {
    fn from(v: Vec<&str>) -> Self {
        Self::Many(v.into_iter().map(str::to_owned).collect())
    }
}

impl From<&[&str]> for Oids {
    fn from(v: &[&str]) -> Self {
        Self::Many(v.iter().map(|s| (*s).to_owned()).collect())
    }
}

impl From<&[String]> for Oids {
    fn from(v: &[String]) -> Self {
        Self::Many(v.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for Oids {
    fn from(v: [&str; N]) -> Self {
        Self::Many(v.iter().map(|s| (*s).to_owned()).collect())
    }
}
