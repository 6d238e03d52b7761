// erdwatch-core/src/infrastructure/generator/mod.rs

pub mod chat_completion;

pub use chat_completion::ChatCompletionClient;
