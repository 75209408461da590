pub(crate) mod hash;
pub(crate) mod load_catalog;
pub(crate) mod validate_catalog;
