// Conversational portfolio editing: one model call per user message,
// validated and merged over the current document, explained by a rule-table reply.

pub mod engine;
pub mod handlers;
pub mod prompts;
pub mod reply;
