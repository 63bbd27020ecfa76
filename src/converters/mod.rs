pub mod gemini;
pub mod helpers;
pub mod openai;
pub mod token_estimator;
