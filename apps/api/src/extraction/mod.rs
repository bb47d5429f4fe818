// Resume extraction: image → text → ResumeDocument → catalog reconciliation → portfolio.
// All model calls go through the llm_client::TextModel seam.

pub mod enrichment;
pub mod extractor;
pub mod handlers;
pub mod pipeline;
pub mod prompts;
pub mod reconcile;
