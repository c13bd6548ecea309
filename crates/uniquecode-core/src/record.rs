use crate::code::UniqueCode;
use crate::request::NormalizedRequest;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// The record written to the `UniqueCodes` collection.
///
/// Field names follow the stored attribute names (`Code`, `CreatedOn`,
/// `UsedBy`, `Reference`, `Description`). Absent metadata is omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "PascalCase")]
pub struct CodeRecord {
    pub code: UniqueCode,
    /// Creation time, rendered as RFC 3339 in UTC.
    pub created_on: Timestamp,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_by: Option<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CodeRecord {
    /// Builds the record for `code`, carrying the request's metadata.
    pub fn from_request(
        request: NormalizedRequest,
        code: UniqueCode,
        created_on: Timestamp,
    ) -> Self {
        Self::builder()
            .code(code)
            .created_on(created_on)
            .used_by(request.used_by)
            .reference(request.reference)
            .description(request.description)
            .build()
    }
}

/// The body returned to the caller: only the generated code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniqueCodeResponse {
    pub code: UniqueCode,
}
