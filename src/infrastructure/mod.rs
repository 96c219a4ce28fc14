pub mod assets;
pub mod llm;
pub mod observability;
