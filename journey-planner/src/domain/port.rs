//! Port identifiers.

use std::borrow::Borrow;
use std::fmt;

/// A named port in the route graph.
///
/// Port names are opaque and case-sensitive. No normalization is applied, so
/// two ports are the same only if their names are byte-for-byte equal.
///
/// # Examples
///
/// ```
/// use journey_planner::domain::Port;
///
/// let liverpool = Port::from("Liverpool");
/// assert_eq!(liverpool.as_str(), "Liverpool");
///
/// // Case matters
/// assert_ne!(liverpool, Port::from("liverpool"));
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Port(String);

impl Port {
    /// Create a port from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Port(name.into())
    }

    /// Returns the port name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Port {
    fn from(name: &str) -> Self {
        Port::new(name)
    }
}

impl From<String> for Port {
    fn from(name: String) -> Self {
        Port(name)
    }
}

impl Borrow<str> for Port {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Port({})", self.0)
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str_roundtrip() {
        let port = Port::new("Cape Town");
        assert_eq!(port.as_str(), "Cape Town");
    }

    #[test]
    fn display() {
        let port = Port::from("Casablanca");
        assert_eq!(format!("{}", port), "Casablanca");
    }

    #[test]
    fn debug() {
        let port = Port::from("New York");
        assert_eq!(format!("{:?}", port), "Port(New York)");
    }

    #[test]
    fn equality_is_exact() {
        assert_eq!(Port::from("Liverpool"), Port::from(String::from("Liverpool")));
        assert_ne!(Port::from("Liverpool"), Port::from("LIVERPOOL"));
        assert_ne!(Port::from("Liverpool"), Port::from("Liverpool "));
    }

    #[test]
    fn hash_lookup_by_str() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Port::from("Buenos Aires"));
        assert!(set.contains("Buenos Aires"));
        assert!(!set.contains("buenos aires"));
    }
}
