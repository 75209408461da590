pub(crate) mod catalog;
pub(crate) mod presenter;
pub(crate) mod url_rules;
pub(crate) mod validation_rules;
