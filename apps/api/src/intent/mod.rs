// Intent extraction: prompt the LLM with the user's job description, then
// parse its fixed four-line reply into an ExtractedIntent.
// All LLM calls go through llm_client.

pub mod extractor;
pub mod parser;
pub mod prompts;
