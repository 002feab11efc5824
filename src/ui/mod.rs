// UI module organization
pub mod layout;
pub mod selectors;
pub mod components;

// Re-export the main UI function
pub use layout::render_ui;
pub use selectors::render_token_modal;
