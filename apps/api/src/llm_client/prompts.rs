// Shared prompt fragments. Each service that needs LLM calls defines its own
// prompts.rs alongside it; cross-cutting instructions live here.

/// Output-format instruction for list-shaped plain-text answers.
pub const PLAIN_TEXT_LIST_INSTRUCTION: &str = "Respond in plain text only. \
    Put each suggestion on its own line. \
    Do NOT use markdown headings or code fences. \
    Do NOT include an introduction or a closing remark.";
