use crate::common::TABLE_NAME_DEFAULT;

pub const LOCAL_STAGE: &str = "local";
pub const LOCAL_DYNAMODB_ENDPOINT: &str = "http://dynamodb:8000";
pub const TRANSLATE_REGION_DEFAULT: &str = "us-east-1";

/// Settings resolved once at cold start.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub table_name: String,
    pub stage: Option<String>,
    /// Overrides the regional DynamoDB endpoint, e.g. for a local container.
    pub dynamodb_endpoint: Option<String>,
    pub translate_region: String,
    pub consistent_reads: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let stage = lookup("STAGE").filter(|stage| !stage.is_empty());
        let dynamodb_endpoint = lookup("DYNAMODB_ENDPOINT").or_else(|| {
            (stage.as_deref() == Some(LOCAL_STAGE)).then(|| LOCAL_DYNAMODB_ENDPOINT.to_string())
        });

        Self {
            table_name: lookup("DYNAMODB_TABLE").unwrap_or(TABLE_NAME_DEFAULT.into()),
            stage,
            dynamodb_endpoint,
            translate_region: lookup("TRANSLATE_REGION").unwrap_or(TRANSLATE_REGION_DEFAULT.into()),
            consistent_reads: lookup("CONSISTENT_READS")
                .map(|val| val.eq_ignore_ascii_case("true") || val == "1")
                .unwrap_or(false),
        }
    }
}
