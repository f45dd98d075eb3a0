use std::collections::HashMap;

/// Translation strings of one locale, keyed by message key.
///
/// The contents are opaque to this crate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a flat TOML table of `key = "text"` pairs.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        let entries: HashMap<String, String> = toml::from_str(content)?;
        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Catalog
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flat_toml_table() {
        let catalog = Catalog::from_toml_str(
            r#"
validationRequired = "This field is required"
save = "Save"
"#,
        )
        .unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("save"), Some("Save"));
        assert_eq!(catalog.get("cancel"), None);
    }

    #[test]
    fn rejects_nested_values() {
        assert!(Catalog::from_toml_str("[section]\nkey = 1\n").is_err());
    }
}
