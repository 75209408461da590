use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogSchemaError;

pub const CATALOG_CONFIG_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub config_version: u32,
    pub tiers: Vec<TierGroup>,
    #[serde(default)]
    pub image_urls: ImageUrlTable,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TierGroup {
    pub tier: String,
    #[serde(default)]
    pub servants: Vec<ServantRecord>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ServantRecord {
    pub name: String,
    #[serde(rename = "class")]
    pub servant_class: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub noble_phantasm: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Servant name to image URL, used as a fallback when a record carries no
/// inline `image_url`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct ImageUrlTable(BTreeMap<String, String>);

impl CatalogConfig {
    pub fn new(tiers: Vec<TierGroup>) -> Self {
        Self {
            config_version: CATALOG_CONFIG_VERSION,
            tiers,
            image_urls: ImageUrlTable::default(),
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogSchemaError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogSchemaError> {
        Self::from_json_str(&read_to_string(path)?)
    }

    pub fn servant_count(&self) -> usize {
        self.tiers.iter().map(|group| group.servants.len()).sum()
    }
}

impl TierGroup {
    pub fn new(tier: impl Into<String>, servants: Vec<ServantRecord>) -> Self {
        Self {
            tier: tier.into(),
            servants,
        }
    }
}

impl ServantRecord {
    pub fn new(
        name: impl Into<String>,
        servant_class: impl Into<String>,
        description: impl Into<String>,
        noble_phantasm: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            servant_class: servant_class.into(),
            description: description.into(),
            noble_phantasm: noble_phantasm.into(),
            image_url: None,
        }
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Inline image URL exactly as stored; only the empty string counts as
    /// absent.
    pub fn image_url(&self) -> Option<&str> {
        non_empty(self.image_url.as_deref())
    }
}

impl ImageUrlTable {
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogSchemaError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogSchemaError> {
        Self::from_json_str(&read_to_string(path)?)
    }

    /// Unknown names and empty URLs both yield `None`.
    pub fn get(&self, name: &str) -> Option<&str> {
        non_empty(self.0.get(name).map(String::as_str))
    }

    pub fn insert(&mut self, name: impl Into<String>, url: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), url.into())
    }

    /// Entries from `other` replace entries with the same name.
    pub fn merge_from(&mut self, other: ImageUrlTable) {
        self.0.extend(other.0);
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for ImageUrlTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ImageUrlTable {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

fn read_to_string(path: &Path) -> Result<String, CatalogSchemaError> {
    fs::read_to_string(path).map_err(|source| CatalogSchemaError::Read {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_record_with_missing_optional_fields() {
        let raw = r#"{
            "config_version": 1,
            "tiers": [
                {
                    "tier": "S",
                    "servants": [
                        {"name": "Richard I", "class": "Saber", "description": "Lionheart", "noble_phantasm": "Excalibur", "image_url": null},
                        {"name": "Sigurd", "class": "Saber"}
                    ]
                }
            ]
        }"#;

        let cfg = CatalogConfig::from_json_str(raw).expect("parse config");

        assert_eq!(cfg.tiers.len(), 1);
        assert_eq!(cfg.servant_count(), 2);
        assert!(cfg.image_urls.is_empty());
        assert_eq!(cfg.tiers[0].servants[0].image_url, None);
        assert!(cfg.tiers[0].servants[1].description.is_empty());
    }

    #[test]
    fn serializes_class_under_its_wire_name() {
        let record = ServantRecord::new("Gilgamesh", "Archer", "King of Heroes", "Gate of Babylon");
        let value = serde_json::to_value(&record).expect("serialize record");

        assert_eq!(value["class"], "Archer");
        assert!(value.get("servant_class").is_none());
    }

    #[test]
    fn inline_url_is_returned_verbatim() {
        let karna = |url: &str| {
            ServantRecord::new("Karna", "Lancer", "", "Vasavi Shakti").with_image_url(url)
        };

        let padded = karna(" https://i.imgur.com/karna.png ");
        assert_eq!(padded.image_url(), Some(" https://i.imgur.com/karna.png "));
        assert_eq!(karna("  ").image_url(), Some("  "));
        assert_eq!(karna("").image_url(), None);
    }

    #[test]
    fn image_table_returns_none_for_unknown_name() {
        let table: ImageUrlTable = [(
            "Gilgamesh".to_string(),
            "https://i.imgur.com/gilgamesh.png".to_string(),
        )]
        .into_iter()
        .collect();

        assert_eq!(
            table.get("Gilgamesh"),
            Some("https://i.imgur.com/gilgamesh.png")
        );
        assert_eq!(table.get("UnknownName"), None);
    }

    #[test]
    fn image_table_skips_only_empty_urls() {
        let mut table = ImageUrlTable::default();
        table.insert("Karna", "");
        table.insert("Arjuna", "https://i.imgur.com/arjuna.png\n");

        assert_eq!(table.get("Karna"), None);
        assert_eq!(table.get("Arjuna"), Some("https://i.imgur.com/arjuna.png\n"));
    }

    #[test]
    fn merge_replaces_existing_entries() {
        let mut base = ImageUrlTable::default();
        base.insert("Merlin", "https://old.example/merlin.png");
        base.insert("Solomon", "https://old.example/solomon.png");

        let mut overlay = ImageUrlTable::default();
        overlay.insert("Merlin", "https://new.example/merlin.png");

        base.merge_from(overlay);

        assert_eq!(base.len(), 2);
        assert_eq!(base.get("Merlin"), Some("https://new.example/merlin.png"));
        assert_eq!(base.get("Solomon"), Some("https://old.example/solomon.png"));
    }

    #[test]
    fn reports_path_when_file_is_missing() {
        let path = std::env::temp_dir().join(format!(
            "sc-missing-{}-catalog.json",
            std::process::id()
        ));

        let err = CatalogConfig::from_path(&path).expect_err("missing file must fail");
        assert!(matches!(err, CatalogSchemaError::Read { .. }));
        assert!(err.to_string().contains("sc-missing-"));
    }
}
