use serde::{Deserialize, Serialize};

/// One mutual-fund scheme from the catalog.
///
/// `scheme_code` is the provider-assigned identifier (numeric in practice but
/// opaque here); it becomes the canonical lookup key once a free-text name
/// has been matched.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeRecord {
    pub scheme_code: String,
    pub scheme_name: String,
}

impl SchemeRecord {
    pub fn new(scheme_code: impl Into<String>, scheme_name: impl Into<String>) -> Self {
        Self {
            scheme_code: scheme_code.into(),
            scheme_name: scheme_name.into(),
        }
    }
}
