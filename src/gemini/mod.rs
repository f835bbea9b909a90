mod client;
mod types;

pub use client::{GeminiClient, HttpGeminiClient};
pub use types::{
    Candidate, Content, GenerateContentBody, GenerateContentResponse, GenerateRequest, InlineData,
    Part,
};

/// Instruction prepended to every request, steering the model towards
/// invoice understanding. Not user-supplied.
pub const SYSTEM_INSTRUCTION: &str = "You are an expert in understanding invoices. \
You will receive input images as invoices and answer questions based on the input image.";

/// Model identifiers the form offers. Other identifiers are passed through
/// to the backend unvalidated; acceptance is the backend's decision.
pub const KNOWN_MODELS: &[&str] = &["gemini-2.5-pro", "gemini-2.5-flash"];
