// Prompt construction for landing-page generation.
// The JSON-only system directive is shared via llm_client::prompts.

use crate::generation::generator::GenerationRequest;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;

/// System prompt for landing-page generation. Enforces JSON-only output.
pub const GENERATION_SYSTEM: &str = JSON_ONLY_SYSTEM;

/// The two messages sent to the model for one generation.
#[derive(Debug, Clone)]
pub struct PromptPair {
    pub system: &'static str,
    pub user: String,
}

/// Builds the copywriting prompt. Form values are embedded verbatim, unvalidated.
pub fn build_generation_prompt(request: &GenerationRequest) -> PromptPair {
    let user = format!(
        r#"You are an expert copywriter and SEO specialist. Create landing page content for a business with the following details:
Business Name: {business_name}
Industry: {industry}
Target Audience: {audience}
Keywords: {keywords}
Tone of Voice: {tone}

Return ONLY a JSON object with the following structure:
{{
  "hero_headline": "H1 headline",
  "sub_headline": "H2 headline",
  "cta_text": "Call to action text",
  "features": ["Feature 1", "Feature 2", "Feature 3"],
  "seo_meta_description": "SEO description"
}}

RULES:
1. "features" MUST be an array of exactly 3 short strings
2. Every field MUST be present and non-empty
3. Do NOT add prose, comments, or extra keys. Return the JSON object and nothing else"#,
        business_name = request.business_name,
        industry = request.industry,
        audience = request.audience,
        keywords = request.keywords,
        tone = request.tone,
    );

    PromptPair {
        system: GENERATION_SYSTEM,
        user,
    }
}
