// LLM prompt constants for the resume module.

/// Suggestion prompt template.
/// Replace: {description}, {format_instruction}
pub const SUGGESTION_PROMPT_TEMPLATE: &str = "Improve the following job experience description \
for a resume. Suggest concise, concrete rewrites that highlight impact and use strong action \
verbs.

Description:
{description}

{format_instruction}";
