use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigValidationIssue {
    pub code: String,
    pub field: String,
    pub message: String,
    pub severity: IssueSeverity,
}

impl ConfigValidationIssue {
    pub fn is_error(&self) -> bool {
        self.severity == IssueSeverity::Error
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("tier not found in catalog: {0}")]
    TierNotFound(String),

    #[error("servant not found in catalog: {0}")]
    ServantNotFound(String),

    #[error("invalid servant catalog ({issues_len} issue(s)); first: {first_issue}")]
    InvalidCatalog {
        issues: Vec<ConfigValidationIssue>,
        issues_len: usize,
        first_issue: String,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog schema error: {0}")]
    Schema(#[from] servant_catalog_core::CatalogSchemaError),
}

impl CatalogError {
    /// Keeps only error-severity issues; warnings never make a catalog invalid.
    pub fn invalid_catalog(issues: Vec<ConfigValidationIssue>) -> Self {
        application::InvalidCatalogParts::from_issues(issues).into_public_error()
    }

    pub fn validation_issues(&self) -> Option<&[ConfigValidationIssue]> {
        self.layered_ref().validation_issues()
    }

    pub fn is_lookup_miss(&self) -> bool {
        matches!(self.layered_ref(), LayeredErrorRef::Domain(_))
    }

    fn layered_ref(&self) -> LayeredErrorRef<'_> {
        match self {
            Self::TierNotFound(_) => LayeredErrorRef::Domain(domain::DomainErrorKind::TierNotFound),
            Self::ServantNotFound(_) => {
                LayeredErrorRef::Domain(domain::DomainErrorKind::ServantNotFound)
            }
            Self::InvalidCatalog {
                issues,
                issues_len,
                first_issue,
            } => LayeredErrorRef::Application(application::ApplicationErrorRef::InvalidCatalog {
                issues: issues.as_slice(),
                issues_len: *issues_len,
                first_issue,
            }),
            Self::Io(_) => {
                LayeredErrorRef::Infrastructure(infrastructure::InfrastructureErrorKind::Io)
            }
            Self::Json(_) => {
                LayeredErrorRef::Infrastructure(infrastructure::InfrastructureErrorKind::Json)
            }
            Self::Schema(_) => {
                LayeredErrorRef::Infrastructure(infrastructure::InfrastructureErrorKind::Schema)
            }
        }
    }
}

#[derive(Debug)]
enum LayeredErrorRef<'a> {
    Domain(domain::DomainErrorKind),
    Application(application::ApplicationErrorRef<'a>),
    Infrastructure(infrastructure::InfrastructureErrorKind),
}

impl<'a> LayeredErrorRef<'a> {
    fn validation_issues(self) -> Option<&'a [ConfigValidationIssue]> {
        match self {
            Self::Application(app_error) => app_error.validation_issues(),
            Self::Domain(_) | Self::Infrastructure(_) => None,
        }
    }
}

mod domain {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(super) enum DomainErrorKind {
        TierNotFound,
        ServantNotFound,
    }
}

mod application {
    use super::{CatalogError, ConfigValidationIssue};

    #[derive(Debug)]
    pub(super) struct InvalidCatalogParts {
        issues: Vec<ConfigValidationIssue>,
        issues_len: usize,
        first_issue: String,
    }

    impl InvalidCatalogParts {
        pub(super) fn from_issues(issues: Vec<ConfigValidationIssue>) -> Self {
            let issues = issues
                .into_iter()
                .filter(ConfigValidationIssue::is_error)
                .collect::<Vec<_>>();
            let first_issue = issues
                .first()
                .map(|issue| format!("{} ({}): {}", issue.field, issue.code, issue.message))
                .unwrap_or_else(|| "unknown validation issue".to_string());

            Self {
                issues_len: issues.len(),
                first_issue,
                issues,
            }
        }

        pub(super) fn into_public_error(self) -> CatalogError {
            CatalogError::InvalidCatalog {
                issues: self.issues,
                issues_len: self.issues_len,
                first_issue: self.first_issue,
            }
        }
    }

    #[derive(Debug)]
    pub(super) enum ApplicationErrorRef<'a> {
        InvalidCatalog {
            issues: &'a [ConfigValidationIssue],
            issues_len: usize,
            first_issue: &'a str,
        },
    }

    impl<'a> ApplicationErrorRef<'a> {
        pub(super) fn validation_issues(self) -> Option<&'a [ConfigValidationIssue]> {
            match self {
                Self::InvalidCatalog {
                    issues,
                    issues_len,
                    first_issue,
                } => {
                    let _ = (issues_len, first_issue);
                    Some(issues)
                }
            }
        }
    }
}

mod infrastructure {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(super) enum InfrastructureErrorKind {
        Io,
        Json,
        Schema,
    }
}
