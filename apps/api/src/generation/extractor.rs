//! Response extraction: recovers `GeneratedContent` from free-form model text.
//!
//! Strategy is a bracket slice, not a parser: drop code fences, take everything from the
//! first `{` to the last `}`, and parse that. Unbalanced or truncated JSON is not repaired.
//! Callers only see `ExtractError`, so a stricter parser can replace this without touching
//! the orchestrator.

use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

use crate::models::content::GeneratedContent;

const STRING_FIELDS: [&str; 4] = [
    "hero_headline",
    "sub_headline",
    "cta_text",
    "seo_meta_description",
];
const EXPECTED_FEATURE_COUNT: usize = 3;

#[derive(Debug, Error, PartialEq)]
pub enum ExtractError {
    /// No JSON object could be located, or the located slice is not valid JSON.
    #[error("malformed generation: {0}")]
    Malformed(String),

    /// Valid JSON, wrong shape.
    #[error("schema mismatch: {0}")]
    SchemaMismatch(String),
}

/// Extracts and validates landing-page content from raw model output.
pub fn extract_content(raw: &str) -> Result<GeneratedContent, ExtractError> {
    let value = extract_json_object(raw)?;
    validate_content(value)
}

/// Locates and parses the outermost `{ … }` span of `raw`, ignoring code fences.
pub fn extract_json_object(raw: &str) -> Result<Value, ExtractError> {
    let cleaned = strip_code_fences(raw);

    let start = cleaned
        .find('{')
        .ok_or_else(|| ExtractError::Malformed("no '{' in model output".to_string()))?;
    let end = cleaned
        .rfind('}')
        .ok_or_else(|| ExtractError::Malformed("no '}' in model output".to_string()))?;

    if end < start {
        return Err(ExtractError::Malformed(
            "last '}' precedes first '{' in model output".to_string(),
        ));
    }

    serde_json::from_str(&cleaned[start..=end])
        .map_err(|e| ExtractError::Malformed(format!("invalid JSON object: {e}")))
}

/// Removes every ```` ```json ```` and ```` ``` ```` marker, wherever it appears.
fn strip_code_fences(text: &str) -> String {
    text.replace("```json", "").replace("```", "").trim().to_string()
}

/// Checks the parsed value field by field. No coercion: `"features": "a, b"` is rejected.
fn validate_content(value: Value) -> Result<GeneratedContent, ExtractError> {
    let Value::Object(mut object) = value else {
        return Err(ExtractError::SchemaMismatch(
            "top-level JSON value is not an object".to_string(),
        ));
    };

    let [hero_headline, sub_headline, cta_text, seo_meta_description] =
        STRING_FIELDS.map(|key| take_string(&mut object, key));

    let features = take_features(&mut object)?;
    if features.len() != EXPECTED_FEATURE_COUNT {
        warn!(
            "Model returned {} features (expected {}), keeping as-is",
            features.len(),
            EXPECTED_FEATURE_COUNT
        );
    }

    Ok(GeneratedContent {
        hero_headline: hero_headline?,
        sub_headline: sub_headline?,
        cta_text: cta_text?,
        features,
        seo_meta_description: seo_meta_description?,
    })
}

fn take_string(object: &mut Map<String, Value>, key: &str) -> Result<String, ExtractError> {
    match object.remove(key) {
        None => Err(ExtractError::SchemaMismatch(format!("missing key '{key}'"))),
        Some(Value::String(s)) if s.trim().is_empty() => {
            Err(ExtractError::SchemaMismatch(format!("key '{key}' is empty")))
        }
        Some(Value::String(s)) => Ok(s),
        Some(other) => Err(ExtractError::SchemaMismatch(format!(
            "key '{key}' must be a string, got {}",
            json_type_name(&other)
        ))),
    }
}

fn take_features(object: &mut Map<String, Value>) -> Result<Vec<String>, ExtractError> {
    let items = match object.remove("features") {
        None => return Err(ExtractError::SchemaMismatch("missing key 'features'".to_string())),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(ExtractError::SchemaMismatch(format!(
                "key 'features' must be an array, got {}",
                json_type_name(&other)
            )))
        }
    };

    if items.is_empty() {
        return Err(ExtractError::SchemaMismatch("key 'features' is empty".to_string()));
    }

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::String(s) => Ok(s),
            other => Err(ExtractError::SchemaMismatch(format!(
                "features[{i}] must be a string, got {}",
                json_type_name(&other)
            ))),
        })
        .collect()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
