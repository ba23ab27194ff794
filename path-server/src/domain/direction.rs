//! Travel directions and the timetable page each one lives on.

use std::collections::HashMap;

/// Error returned when a `NAME=PAGE` direction mapping cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction mapping {input:?}: {reason}")]
pub struct DirectionParseError {
    input: String,
    reason: &'static str,
}

/// Registry of configured directions.
///
/// Maps the short name a client uses (e.g. `jsq_33rd`) to the page name
/// the timetable is published under (e.g. `JSQ_33rd_Weekday`).
///
/// # Examples
///
/// ```
/// use path_server::domain::Directions;
///
/// let directions = Directions::default();
/// assert_eq!(directions.resolve("jsq_33rd"), Some("JSQ_33rd_Weekday"));
/// assert_eq!(directions.resolve("nowhere"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directions {
    pages: HashMap<String, String>,
}

impl Directions {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
        }
    }

    /// Add a direction, replacing any previous page for the same name.
    pub fn with(mut self, name: impl Into<String>, page: impl Into<String>) -> Self {
        self.pages.insert(name.into(), page.into());
        self
    }

    /// Build a registry from `NAME=PAGE` strings.
    pub fn from_mappings<I, S>(mappings: I) -> Result<Self, DirectionParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        mappings
            .into_iter()
            .try_fold(Self::new(), |directions, mapping| -> Result<Self, _> {
                let mapping = mapping.as_ref();
                let err = |reason| DirectionParseError {
                    input: mapping.to_string(),
                    reason,
                };

                let (name, page) = mapping.split_once('=').ok_or_else(|| err("missing '='"))?;
                let (name, page) = (name.trim(), page.trim());
                if name.is_empty() {
                    return Err(err("empty direction name"));
                }
                if page.is_empty() {
                    return Err(err("empty page name"));
                }

                Ok(directions.with(name, page))
            })
    }

    /// Page name for a direction, if configured.
    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.pages.get(name).map(String::as_str)
    }

    /// Configured direction names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.pages.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of configured directions.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether no directions are configured.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl Default for Directions {
    /// The two weekday PATH timetables between Journal Square and 33rd St.
    fn default() -> Self {
        Self::new()
            .with("jsq_33rd", "JSQ_33rd_Weekday")
            .with("33rd_jsq", "33rd_JSQ_Weekday")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directions() {
        let directions = Directions::default();
        assert_eq!(directions.len(), 2);
        assert_eq!(directions.resolve("33rd_jsq"), Some("33rd_JSQ_Weekday"));
        assert_eq!(directions.names(), vec!["33rd_jsq", "jsq_33rd"]);
    }

    #[test]
    fn parse_mappings() {
        let directions =
            Directions::from_mappings(["hob_wtc=HOB_WTC_Weekday", " nwk_wtc = NWK_WTC_Weekday "])
                .unwrap();
        assert_eq!(directions.resolve("hob_wtc"), Some("HOB_WTC_Weekday"));
        assert_eq!(directions.resolve("nwk_wtc"), Some("NWK_WTC_Weekday"));
        assert_eq!(directions.resolve("jsq_33rd"), None);
    }

    #[test]
    fn reject_bad_mappings() {
        assert!(Directions::from_mappings(["hob_wtc"]).is_err());
        assert!(Directions::from_mappings(["=HOB_WTC_Weekday"]).is_err());
        assert!(Directions::from_mappings(["hob_wtc="]).is_err());
    }

    #[test]
    fn parse_error_display() {
        let err = Directions::from_mappings(["oops"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid direction mapping \"oops\": missing '='"
        );
    }

    #[test]
    fn empty_registry() {
        let directions = Directions::from_mappings(Vec::<String>::new()).unwrap();
        assert!(directions.is_empty());
    }
}
