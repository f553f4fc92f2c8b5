//! Test vector types for PHC string format tests.
//!
//! Vectors live in `tests/vectors/phc.json`. Salt and hash bytes are
//! hex-encoded; parameters are `[name, value]` pairs so their order is kept.

// Many fields are required for deserialization but not directly used in tests
#![allow(dead_code)]

use phc_string::{Hint, ParamValue, Params, PhcFields, SaltEncoding};
use serde::Deserialize;

/// A test vector suite (top-level JSON structure).
#[derive(Debug, Deserialize)]
pub struct TestVectorSuite<T> {
    pub name: String,
    pub tests: Vec<T>,
}

/// A parameter value as written in JSON.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum JsonParamValue {
    Integer(i64),
    Text(String),
}

/// Test vector for a single PHC string.
#[derive(Debug, Deserialize)]
pub struct PhcTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// Salt encoding name (`"base64"` when missing)
    #[serde(default)]
    pub hint: Option<String>,
    /// The PHC string
    pub phc: String,
    /// Expected id (null for fail tests)
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub version: Option<i64>,
    #[serde(default)]
    pub params: Option<Vec<(String, JsonParamValue)>>,
    /// Hex-encoded salt bytes
    #[serde(default)]
    pub salt: Option<String>,
    /// Hex-encoded hash bytes
    #[serde(default)]
    pub hash: Option<String>,
}

impl PhcTestVector {
    /// The hint this vector is parsed and formatted with.
    pub fn hint(&self) -> Hint {
        let encoding = self
            .hint
            .as_deref()
            .map_or(SaltEncoding::Base64, |name| {
                name.parse()
                    .unwrap_or_else(|e| panic!("Test '{}' has a bad hint: {e}", self.name))
            });
        Hint::with_salt_encoding(encoding)
    }

    /// The semantic values this vector should decode to.
    pub fn expected_fields(&self) -> PhcFields {
        PhcFields {
            id: self.id.clone(),
            version: self.version,
            params: self.params.as_ref().map(|entries| {
                entries
                    .iter()
                    .map(|(name, value)| {
                        let value = match value {
                            JsonParamValue::Integer(n) => ParamValue::Integer(*n),
                            JsonParamValue::Text(s) => ParamValue::Text(s.clone()),
                        };
                        (name.clone(), value)
                    })
                    .collect::<Params>()
            }),
            salt: self.salt.as_deref().map(|s| self.hex_field(s)),
            hash: self.hash.as_deref().map(|s| self.hex_field(s)),
        }
    }

    fn hex_field(&self, s: &str) -> Vec<u8> {
        hex_decode(s).unwrap_or_else(|| panic!("Test '{}' has invalid hex", self.name))
    }
}

// =============================================================================
// Helper functions
// =============================================================================

/// Decode a hex string to bytes.
/// Returns `None` if the string is not valid hex.
pub fn hex_decode(s: &str) -> Option<Vec<u8>> {
    hex::decode(s).ok()
}

/// Load a test vector suite from a JSON file.
pub fn load_vectors<T: serde::de::DeserializeOwned>(path: &str) -> TestVectorSuite<T> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read test vector file {path}: {e}"));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse test vector file {path}: {e}"))
}
