//! Prompt template and model constants.

pub const MODEL: &str = "gpt-3.5-turbo";

pub const PROMPT_PREFIX: &str = "Question: \n";
pub const PROMPT_SUFFIX: &str = "\nOnly write correct answer.";

/// Join OCR fragments (question first, then options) into the answer prompt.
pub fn build_answer_prompt<S: AsRef<str>>(fragments: &[S]) -> String {
    let body = fragments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join("\n");
    format!("{}{}{}", PROMPT_PREFIX, body, PROMPT_SUFFIX)
}
