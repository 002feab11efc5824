// Library exports for the swap token selector
pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use app::{
    filter_tokens, initial_pair, App, AppEvent, EntryVariant, ModalFocus, ModalProps, ModalState,
    SearchFilter, SwapSide, TokenEntry, TokenModal,
};
pub use cli::Cli;
pub use data::{RecentTokens, Token, TokenInfo, TokenRegistry, TokenSpec};
pub use error::RegistryError;
pub use ui::{render_token_modal, render_ui};
pub use utils::*;
