use serde::{Deserialize, Serialize};

/// Inbound generation request.
///
/// Wire names are camelCase (`productName`, `keywords`). Empty strings are
/// accepted and interpolated into the prompt as-is; there is no input
/// validation beyond JSON well-formedness.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub product_name: String,
    pub keywords: String,
}

/// Caller-facing result of a successful generation call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResult {
    /// Generated description with surrounding whitespace trimmed.
    pub description: String,
}
