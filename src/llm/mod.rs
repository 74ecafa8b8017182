//! LLM domain: the single completion call behind "Show answer".
//!
//!   - prompts.rs: model id + prompt template
//!   - completion.rs: Completer trait + OpenAI-compatible client

pub mod completion;
pub mod prompts;

pub use completion::{Completer, OpenAiCompleter};
pub use prompts::build_answer_prompt;
