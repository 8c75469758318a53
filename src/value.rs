//! Parsed results: values and the ordered OID → value map.

use std::collections::HashMap;
use std::fmt;

/// Value printed by a net-snmp tool for one OID.
///
/// With the default `-O 0efnqt` options the tools print values in "quick"
/// form, so everything arrives as text. The two agent exceptions are kept
/// apart from a genuinely empty string; [`Value::as_str`] renders them as
/// `""` for callers that only want the flat string view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Value text, quotes removed. Multi-line values are joined with `\n`.
    Text(String),
    /// `No Such Object available on this agent at this OID`
    NoSuchObject,
    /// `No Such Instance currently exists at this OID`
    NoSuchInstance,
}

pub(crate) const NO_SUCH_OBJECT: &str = "No Such Object available on this agent at this OID";
pub(crate) const NO_SUCH_INSTANCE: &str = "No Such Instance currently exists at this OID";

impl Value {
    /// Classify value text produced by the parser.
    pub(crate) fn from_text(text: String) -> Self {
        match text.as_str() {
            NO_SUCH_OBJECT => Self::NoSuchObject,
            NO_SUCH_INSTANCE => Self::NoSuchInstance,
            _ => Self::Text(text),
        }
    }

    /// String view; both exceptions render as the empty string.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) => s,
            Self::NoSuchObject | Self::NoSuchInstance => "",
        }
    }

    /// True for the two agent exceptions.
    pub fn is_exception(&self) -> bool {
        matches!(self, Self::NoSuchObject | Self::NoSuchInstance)
    }

    /// Append another line. An exception becomes text at this point.
    pub(crate) fn push_line(&mut self, line: &str) {
        let mut text = match std::mem::replace(self, Self::Text(String::new())) {
            Self::Text(s) => s,
            Self::NoSuchObject | Self::NoSuchInstance => String::new(),
        };
        text.push('\n');
        text.push_str(line);
        *self = Self::Text(text);
    }

    /// Append the value of a repeated OID line.
    pub(crate) fn append(&mut self, other: Value) {
        self.push_line(other.as_str());
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered mapping from OID to [`Value`].
///
/// Iteration follows the order in which OIDs first appeared in the tool
/// output, which is not necessarily the request order. Keys are unique;
/// a repeated OID appends to the existing value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VarMap {
    entries: Vec<(String, Value)>,
    index: HashMap<String, usize>,
}

impl VarMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of OIDs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no OID was returned.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a value by OID.
    pub fn get(&self, oid: &str) -> Option<&Value> {
        self.index.get(oid).map(|&i| &self.entries[i].1)
    }

    /// Look up the string view of a value by OID.
    pub fn get_str(&self, oid: &str) -> Option<&str> {
        self.get(oid).map(Value::as_str)
    }

    /// True if the OID is present.
    pub fn contains(&self, oid: &str) -> bool {
        self.index.contains_key(oid)
    }

    /// Iterate in output order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// OIDs in output order.
    pub fn oids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Insert a value, appending to an existing entry for the same OID.
    pub fn insert(&mut self, oid: impl Into<String>, value: Value) {
        let oid = oid.into();
        match self.index.get(&oid) {
            Some(&i) => self.entries[i].1.append(value),
            None => {
                self.index.insert(oid.clone(), self.entries.len());
                self.entries.push((oid, value));
            }
        }
    }

    /// Append a continuation line to an existing OID.
    ///
    /// Returns false if the OID is not present.
    pub(crate) fn push_line(&mut self, oid: &str, line: &str) -> bool {
        match self.index.get(oid) {
            Some(&i) => {
                self.entries[i].1.push_line(line);
                true
            }
            None => false,
        }
    }

    /// Merge another map into this one, in the other map's order.
    pub fn extend(&mut self, other: VarMap) {
        for (oid, value) in other.entries {
            self.insert(oid, value);
        }
    }

    /// Requested OIDs that are absent from this map, in request order.
    ///
    /// An absent OID usually means the agent never answered for it (timeout
    /// or packet error). OIDs the agent answered with an exception are
    /// present with [`Value::NoSuchObject`] / [`Value::NoSuchInstance`].
    pub fn missing<'a, I, S>(&self, requested: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a S>,
        S: AsRef<str> + ?Sized + 'a,
    {
        requested
            .into_iter()
            .map(AsRef::as_ref)
            .filter(|oid| !self.contains(oid))
            .collect()
    }

    /// Flatten into `(oid, string)` pairs, exceptions rendered as `""`.
    pub fn to_strings(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), v.as_str().to_owned()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a VarMap {
    type Item = (&'a str, &'a Value);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a Value)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl IntoIterator for VarMap {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
