//! Token selection modal: owns the search query and the visible token set,
//! and reports the user's pick through the caller's callbacks.

use std::sync::Arc;
use cli_log::*;

use super::types::{EntryVariant, ModalFocus, ModalState, SwapSide, TokenEntry};
use crate::data::{Token, TokenRegistry};

pub type SelectCallback = Box<dyn FnMut(Token)>;
pub type CloseCallback = Box<dyn FnMut()>;

/// What the host hands a modal when opening it
pub struct ModalProps {
    pub side: SwapSide,
    pub on_close: CloseCallback,
    pub on_token_selected: SelectCallback,
}

impl ModalProps {
    pub fn new(
        side: SwapSide,
        on_close: impl FnMut() + 'static,
        on_token_selected: impl FnMut(Token) + 'static,
    ) -> Self {
        Self {
            side,
            on_close: Box::new(on_close),
            on_token_selected: Box::new(on_token_selected),
        }
    }

    /// Same as [`ModalProps::new`] with the direction given as a flag (`true` = from)
    pub fn with_flag(
        from: bool,
        on_close: impl FnMut() + 'static,
        on_token_selected: impl FnMut(Token) + 'static,
    ) -> Self {
        Self::new(SwapSide::from_flag(from), on_close, on_token_selected)
    }
}

pub struct TokenModal {
    pub(super) registry: Arc<TokenRegistry>,
    pub(super) side: SwapSide,
    on_close: CloseCallback,
    on_token_selected: SelectCallback,

    // Search state
    pub(super) input: String,
    pub(super) query: String,
    pub(super) visible: Vec<Token>,

    // Navigation state
    pub(super) focus: ModalFocus,
    pub(super) recent_cursor: usize,
    pub(super) list_cursor: usize,

    pub(super) state: ModalState,
    pub needs_redraw: bool,
}

impl TokenModal {
    pub fn new(registry: Arc<TokenRegistry>, props: ModalProps) -> Self {
        let visible = registry.tokens();
        info!("Opening {} token modal with {} tokens", props.side, visible.len());
        Self {
            registry,
            side: props.side,
            on_close: props.on_close,
            on_token_selected: props.on_token_selected,
            input: String::new(),
            query: String::new(),
            visible,
            focus: ModalFocus::Search,
            recent_cursor: 0,
            list_cursor: 0,
            state: ModalState::Open,
            needs_redraw: true,
        }
    }

    pub fn swap_from(
        registry: Arc<TokenRegistry>,
        on_close: impl FnMut() + 'static,
        on_token_selected: impl FnMut(Token) + 'static,
    ) -> Self {
        Self::new(registry, ModalProps::new(SwapSide::From, on_close, on_token_selected))
    }

    pub fn swap_to(
        registry: Arc<TokenRegistry>,
        on_close: impl FnMut() + 'static,
        on_token_selected: impl FnMut(Token) + 'static,
    ) -> Self {
        Self::new(registry, ModalProps::new(SwapSide::To, on_close, on_token_selected))
    }

    /// Pick `entry`'s token: selection callback once, then close callback once.
    ///
    /// Returns `false` without calling anything when the modal is no longer
    /// open or the token is not in this modal's registry.
    pub fn activate(&mut self, entry: &TokenEntry) -> bool {
        if !self.is_open() {
            return false;
        }
        if self.registry.info(&entry.token).is_none() {
            warn!("Ignoring activation of unknown token '{}'", entry.token);
            return false;
        }

        info!("Selected {} as {} token ({:?} entry)", entry.token, self.side, entry.variant);
        self.state = ModalState::Selected(entry.token.clone());
        self.needs_redraw = true;
        (self.on_token_selected)(entry.token.clone());
        (self.on_close)();
        true
    }

    /// Close without picking anything
    pub fn dismiss(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }

        info!("Dismissed {} token modal", self.side);
        self.state = ModalState::Dismissed;
        self.needs_redraw = true;
        (self.on_close)();
        true
    }

    /// Activate whatever entry the keyboard focus is on.
    /// From the search box that is the first visible token.
    pub fn activate_focused(&mut self) -> bool {
        match self.focused_entry() {
            Some(entry) => self.activate(&entry),
            None => false,
        }
    }

    pub fn focused_entry(&self) -> Option<TokenEntry> {
        match self.focus {
            ModalFocus::Search => self.visible.first().cloned().map(TokenEntry::listed),
            ModalFocus::Recent => self
                .registry
                .recent()
                .as_slice()
                .get(self.recent_cursor)
                .cloned()
                .map(TokenEntry::recent),
            ModalFocus::List => self.visible.get(self.list_cursor).cloned().map(TokenEntry::listed),
        }
    }

    pub fn recent_entries(&self) -> Vec<TokenEntry> {
        self.registry.recent().iter().cloned().map(TokenEntry::recent).collect()
    }

    pub fn listed_entries(&self) -> Vec<TokenEntry> {
        self.visible.iter().cloned().map(TokenEntry::listed).collect()
    }

    /// Whether `entry` is the one under the keyboard cursor
    pub fn is_highlighted(&self, entry: &TokenEntry, index: usize) -> bool {
        match entry.variant {
            EntryVariant::Recent => self.focus == ModalFocus::Recent && index == self.recent_cursor,
            EntryVariant::Listed => self.focus == ModalFocus::List && index == self.list_cursor,
        }
    }

    pub fn registry(&self) -> &TokenRegistry {
        &self.registry
    }

    pub fn side(&self) -> SwapSide {
        self.side
    }

    pub fn visible_tokens(&self) -> &[Token] {
        &self.visible
    }

    /// Normalised query the list is filtered by
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Raw search box text
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    pub fn focus(&self) -> ModalFocus {
        self.focus
    }

    pub fn list_cursor(&self) -> usize {
        self.list_cursor
    }

    pub fn recent_cursor(&self) -> usize {
        self.recent_cursor
    }
}
