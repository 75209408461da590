use serde::Serialize;
use servant_catalog_core::{CatalogConfig, ImageUrlTable, ServantRecord, TierGroup};

use crate::CatalogError;

use super::validation_rules::collect_catalog_validation_issues;

/// Read-only servant roster, grouped by tier in declaration order.
///
/// Built once from a validated [`CatalogConfig`]; names are unique across
/// tiers, so name lookups have a single answer.
#[derive(Debug, Clone)]
pub struct Catalog {
    config_version: u32,
    tiers: Vec<TierGroup>,
    image_urls: ImageUrlTable,
}

/// A record together with the tier it was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedServant<'a> {
    pub tier: &'a str,
    #[serde(flatten)]
    pub record: &'a ServantRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierStat {
    pub tier: String,
    pub count: usize,
}

impl Catalog {
    pub fn from_config(config: CatalogConfig) -> Result<Self, CatalogError> {
        let issues = collect_catalog_validation_issues(&config);
        if issues.iter().any(|issue| issue.is_error()) {
            return Err(CatalogError::invalid_catalog(issues));
        }

        Ok(Self::from_validated(config))
    }

    pub(crate) fn from_validated(config: CatalogConfig) -> Self {
        Self {
            config_version: config.config_version,
            tiers: config.tiers,
            image_urls: config.image_urls,
        }
    }

    pub fn tiers(&self) -> impl Iterator<Item = &str> {
        self.tiers.iter().map(|group| group.tier.as_str())
    }

    pub fn list_by_tier(&self, tier: &str) -> Result<&[ServantRecord], CatalogError> {
        self.tiers
            .iter()
            .find(|group| group.tier == tier)
            .map(|group| group.servants.as_slice())
            .ok_or_else(|| CatalogError::TierNotFound(tier.to_string()))
    }

    pub fn lookup_by_name(&self, name: &str) -> Option<RankedServant<'_>> {
        self.ranked().find(|servant| servant.record.name == name)
    }

    /// Case-insensitive substring match on the name; first hit in tier order.
    pub fn search(&self, query: &str) -> Option<RankedServant<'_>> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        self.ranked()
            .find(|servant| servant.record.name.to_lowercase().contains(&needle))
    }

    pub fn servants_by_class(&self, servant_class: &str) -> Vec<RankedServant<'_>> {
        let wanted = servant_class.trim().to_lowercase();
        self.ranked()
            .filter(|servant| servant.record.servant_class.to_lowercase() == wanted)
            .collect()
    }

    pub fn all_servants(&self) -> Vec<RankedServant<'_>> {
        self.ranked().collect()
    }

    pub fn tier_stats(&self) -> Vec<TierStat> {
        self.tiers
            .iter()
            .map(|group| TierStat {
                tier: group.tier.clone(),
                count: group.servants.len(),
            })
            .collect()
    }

    /// Inline `image_url` first, then the image table, else nothing.
    pub fn resolve_image_url<'a>(&'a self, record: &'a ServantRecord) -> Option<&'a str> {
        record
            .image_url()
            .or_else(|| self.image_urls.get(&record.name))
    }

    pub fn image_urls(&self) -> &ImageUrlTable {
        &self.image_urls
    }

    pub fn len(&self) -> usize {
        self.tiers.iter().map(|group| group.servants.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn to_config(&self) -> CatalogConfig {
        CatalogConfig {
            config_version: self.config_version,
            tiers: self.tiers.clone(),
            image_urls: self.image_urls.clone(),
        }
    }

    fn ranked(&self) -> impl Iterator<Item = RankedServant<'_>> {
        self.tiers.iter().flat_map(|group| {
            group.servants.iter().map(move |record| RankedServant {
                tier: group.tier.as_str(),
                record,
            })
        })
    }
}
