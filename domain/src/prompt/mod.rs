//! Prompt templates for personas, the summarizer and the judge.

pub mod template;

pub use template::PromptTemplate;
