//! SNMP protocol version passed to the net-snmp tools.

use std::fmt;

/// SNMP version for community-based access.
///
/// Only v1 and v2c are supported; the tools are always invoked with a
/// community string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "String"))]
pub enum Version {
    /// SNMPv1 (default)
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "1"))]
    V1,
    /// SNMPv2c
    #[cfg_attr(feature = "serde", serde(rename = "2c"))]
    V2c,
}

impl Version {
    /// Parse a version string, falling back to [`Version::V1`].
    ///
    /// Accepts exactly `"1"` and `"2c"`. Anything else (including `"3"` or
    /// `"2C"`) silently becomes v1.
    ///
    /// ```rust
    /// use snmp_shell::Version;
    ///
    /// assert_eq!(Version::parse_lenient("2c"), Version::V2c);
    /// assert_eq!(Version::parse_lenient("3"), Version::V1);
    /// ```
    pub fn parse_lenient(s: &str) -> Self {
        match s {
            "2c" => Self::V2c,
            "1" => Self::V1,
            other => {
                tracing::debug!(target: "snmp_shell::version", { requested = other }, "unsupported SNMP version, using v1");
                Self::V1
            }
        }
    }

    /// The value passed after `-v`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "1",
            Self::V2c => "2c",
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Version {
    fn from(s: &str) -> Self {
        Self::parse_lenient(s)
    }
}

impl From<String> for Version {
    fn from(s: String) -> Self {
        Self::parse_lenient(&s)
    }
}
