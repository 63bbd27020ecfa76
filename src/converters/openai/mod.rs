pub mod openai_choice;
pub mod openai_message;
pub mod openai_request;
pub mod openai_response;
pub mod openai_response_message;
pub mod openai_usage;

pub use openai_choice::OpenAIChoice;
pub use openai_message::{OpenAIMessage, OpenAIRole};
pub use openai_request::OpenAIRequest;
pub use openai_response::OpenAIResponse;
pub use openai_response_message::OpenAIResponseMessage;
pub use openai_usage::OpenAIUsage;
