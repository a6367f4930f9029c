// LLM prompt constants for intent extraction.

/// Field names the model must emit, in reply order.
pub const INTENT_FIELDS: [&str; 4] = [
    "job_role",
    "required_skills",
    "preferred_difficulty",
    "max_duration",
];

/// Intent extraction prompt template. `{field_list}` and `{user_query}` are
/// filled in by `build_intent_prompt`.
pub const INTENT_PROMPT_TEMPLATE: &str = r#"You are an AI assistant helping match job roles and assessments.
Extract the following fields from the user's input:
{field_list}

Input: "{user_query}"

Respond in this format:
job_role: <role>
required_skills: <comma-separated-skills>
preferred_difficulty: <Low/Medium/High>
max_duration: <minutes or unknown>"#;

/// Embeds the raw user text verbatim into the extraction prompt.
pub fn build_intent_prompt(user_query: &str) -> String {
    let last = INTENT_FIELDS.len() - 1;
    let field_list = INTENT_FIELDS
        .iter()
        .enumerate()
        .map(|(i, field)| {
            if i == last {
                format!("- {field} (optional)")
            } else {
                format!("- {field}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    INTENT_PROMPT_TEMPLATE
        .replace("{field_list}", &field_list)
        .replace("{user_query}", user_query)
}
