//! Bus stop identifiers and the static stop registry.

use std::collections::HashMap;
use std::fmt;

/// Error returned when parsing an invalid stop identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop id: {reason}")]
pub struct InvalidStopId {
    reason: &'static str,
}

/// An opaque provider-specific bus stop identifier, e.g. `000LM0001`.
///
/// Identifiers are embedded verbatim in query strings, so only ASCII
/// letters and digits are accepted. Anything else would need escaping and
/// no real stop id contains it.
///
/// # Examples
///
/// ```
/// use commute_links::domain::StopId;
///
/// let stop = StopId::parse("000LM0001").unwrap();
/// assert_eq!(stop.as_str(), "000LM0001");
///
/// assert!(StopId::parse("").is_err());
/// assert!(StopId::parse("000 LM").is_err());
/// assert!(StopId::parse("a&b").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct StopId(String);

impl StopId {
    /// Parse a stop identifier.
    pub fn parse(s: &str) -> Result<Self, InvalidStopId> {
        if s.is_empty() {
            return Err(InvalidStopId {
                reason: "must not be empty",
            });
        }

        if !s.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(InvalidStopId {
                reason: "must contain only ASCII letters and digits",
            });
        }

        Ok(StopId(s.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static mapping from a human-readable stop name to its provider id.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct StopRegistry {
    stops: HashMap<String, StopId>,
}

impl StopRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stop, replacing any previous entry with the same name.
    pub fn with_stop(mut self, name: impl Into<String>, id: StopId) -> Self {
        self.stops.insert(name.into(), id);
        self
    }

    /// Look up a stop id by name.
    pub fn get(&self, name: &str) -> Option<&StopId> {
        self.stops.get(name)
    }

    /// Number of registered stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Returns true if no stops are registered.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Registry for the Miyazaki commute.
    pub fn miyazaki() -> Self {
        [
            (MIYAZAKI_EKI, "000LM0001"),
            (DEPATO_MAE, "000LM3002"),
            (KARINO_MAE, "000G00129"),
        ]
        .into_iter()
        .fold(Self::new(), |registry, (name, id)| {
            registry.with_stop(name, StopId(id.to_string()))
        })
    }
}

/// Miyazaki station (宮崎駅).
pub const MIYAZAKI_EKI: &str = "miyazaki_eki";

/// In front of the department store (デパート前).
pub const DEPATO_MAE: &str = "depato_mae";

/// In front of Karino (カリーノ前).
pub const KARINO_MAE: &str = "karino_mae";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_ids() {
        assert!(StopId::parse("000LM0001").is_ok());
        assert!(StopId::parse("000G00129").is_ok());
        assert!(StopId::parse("x").is_ok());
    }

    #[test]
    fn reject_empty() {
        let err = StopId::parse("").unwrap_err();
        assert_eq!(err.to_string(), "invalid stop id: must not be empty");
    }

    #[test]
    fn reject_query_metacharacters() {
        assert!(StopId::parse("000LM0001&to=x").is_err());
        assert!(StopId::parse("a=b").is_err());
        assert!(StopId::parse("a/b").is_err());
        assert!(StopId::parse("宮崎").is_err());
    }

    #[test]
    fn debug_and_display() {
        let id = StopId::parse("000LM3002").unwrap();
        assert_eq!(format!("{id}"), "000LM3002");
        assert_eq!(format!("{id:?}"), "StopId(000LM3002)");
    }

    #[test]
    fn miyazaki_registry_contents() {
        let registry = StopRegistry::miyazaki();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.get(MIYAZAKI_EKI).unwrap().as_str(), "000LM0001");
        assert_eq!(registry.get(DEPATO_MAE).unwrap().as_str(), "000LM3002");
        assert_eq!(registry.get(KARINO_MAE).unwrap().as_str(), "000G00129");
        assert!(registry.get("nowhere").is_none());
    }

    #[test]
    fn with_stop_replaces() {
        let registry = StopRegistry::new()
            .with_stop("a", StopId::parse("1").unwrap())
            .with_stop("a", StopId::parse("2").unwrap());
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("a").unwrap().as_str(), "2");
    }
}
