use crate::config::CatalogConfig;
use crate::error::CatalogSchemaError;

const BUILTIN_CATALOG_JSON: &str = include_str!("../data/servants.json");

/// Default roster shipped with the binary, used when no catalog file is given.
pub fn builtin_catalog_config() -> Result<CatalogConfig, CatalogSchemaError> {
    CatalogConfig::from_json_str(BUILTIN_CATALOG_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_keeps_tier_order() {
        let cfg = builtin_catalog_config().expect("builtin catalog parses");
        let tiers = cfg
            .tiers
            .iter()
            .map(|group| group.tier.as_str())
            .collect::<Vec<_>>();

        assert_eq!(tiers, vec!["EX", "S", "A", "B", "C"]);
        assert_eq!(cfg.servant_count(), 80);
    }

    #[test]
    fn builtin_catalog_starts_without_images() {
        let cfg = builtin_catalog_config().expect("builtin catalog parses");

        let first = &cfg.tiers[0].servants[0];
        assert_eq!(first.name, "Gilgamesh");
        assert_eq!(first.noble_phantasm, "Gate of Babylon");
        assert!(cfg
            .tiers
            .iter()
            .flat_map(|group| group.servants.iter())
            .all(|record| record.image_url().is_none()));
    }
}
