// Shared prompt constants.
// Feature-specific templates live in a prompts.rs next to the feature.

/// System prompt that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a helpful assistant that outputs ONLY JSON. \
    You MUST respond with a single valid JSON object. \
    Do NOT include any text outside the JSON object. \
    Do NOT include explanations or apologies.";
