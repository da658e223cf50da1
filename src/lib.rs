//! Upload a PDF, pick a summary style and a hosted model, get a summary back.
//!
//! Text is pulled out of the PDF page by page, wrapped in one of four fixed
//! prompt templates and sent as a single chat completion to an
//! OpenAI-compatible provider (Groq by default).

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
