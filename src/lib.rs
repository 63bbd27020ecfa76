//! Bridges a Gemini-style "generate content" client to a locally hosted
//! OpenAI-compatible chat-completion backend such as LM Studio.

pub mod config;
pub mod converters;
pub mod error;
pub mod generator;
pub mod llm_client;
pub mod logging;
pub mod models;
pub mod router;

pub use error::{Error, Result};
pub use generator::{ContentGenerator, GenerateContentStream, LocalContentGenerator};
