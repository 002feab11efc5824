// App module structure for better organization

pub mod types;
pub mod core;
pub mod modal;
pub mod navigation;
pub mod search;
pub mod input;

// Re-export the main App struct and key types
pub use self::core::{App, initial_pair};
pub use modal::{ModalProps, TokenModal};
pub use search::{SearchFilter, filter_tokens};
pub use types::{AppEvent, EntryVariant, ModalFocus, ModalState, SwapSide, TokenEntry};
