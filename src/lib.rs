pub mod app;
pub mod chain;
pub mod commands;
pub mod config;
pub mod di;
pub mod entity;
pub mod interactor;
pub mod presenter;
pub mod prompt;
pub mod utils;
pub mod view;

// Re-export commonly used items
pub use app::App;
pub use chain::{create_provider, signer_from_private_key, AlloyGateway, ChainGateway};
pub use crate::config::Config;
pub use di::ServiceContainer;
pub use entity::*;
pub use prompt::{Prompt, ScriptedPrompt, StdinPrompt};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
