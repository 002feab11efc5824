//! Core application logic and initialization

use anyhow::{Result, bail};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use cli_log::*;

use crate::config::{DEFAULT_FROM_TOKEN, DEFAULT_TO_TOKEN};
use crate::data::{Token, TokenRegistry};
use super::modal::{ModalProps, TokenModal};
use super::types::{AppEvent, SwapSide};

/// Swap pair screen hosting the token modals
pub struct App {
    pub registry: Arc<TokenRegistry>,

    // Current pair
    pub from: Token,
    pub to: Token,

    // UI state
    pub modal: Option<TokenModal>,
    pub status_message: Option<String>,
    pub needs_redraw: bool,

    // Modal callbacks land here
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
}

impl App {
    pub fn new(registry: Arc<TokenRegistry>, from: Token, to: Token) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            registry,
            from,
            to,
            modal: None,
            status_message: None,
            needs_redraw: true,
            events_tx,
            events_rx,
        }
    }

    /// Open the modal for `side`, replacing any modal that is still mounted
    pub fn open_modal(&mut self, side: SwapSide) {
        let on_close = {
            let tx = self.events_tx.clone();
            move || {
                let _ = tx.send(AppEvent::ModalClosed { side });
            }
        };
        let on_token_selected = {
            let tx = self.events_tx.clone();
            move |token: Token| {
                let _ = tx.send(AppEvent::TokenSelected { side, token });
            }
        };

        let props = ModalProps::new(side, on_close, on_token_selected);
        self.modal = Some(TokenModal::new(Arc::clone(&self.registry), props));
        self.needs_redraw = true;
    }

    /// Apply everything the open modal reported since the last call
    pub fn process_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                AppEvent::TokenSelected { side, token } => self.apply_selection(side, token),
                AppEvent::ModalClosed { side } => {
                    if self.modal.as_ref().is_some_and(|modal| modal.side() == side) {
                        self.modal = None;
                    }
                    self.needs_redraw = true;
                }
            }
        }
    }

    /// Picking the token already on the other leg flips the pair
    pub fn apply_selection(&mut self, side: SwapSide, token: Token) {
        let (target, other) = match side {
            SwapSide::From => (&mut self.from, &mut self.to),
            SwapSide::To => (&mut self.to, &mut self.from),
        };
        if *other == token {
            std::mem::swap(target, other);
        } else {
            *target = token;
        }

        info!("Pair is now {} -> {}", self.from, self.to);
        self.status_message = Some(format!("Swap {} → {}", self.from, self.to));
        self.needs_redraw = true;
    }

    pub fn flip_pair(&mut self) {
        std::mem::swap(&mut self.from, &mut self.to);
        self.status_message = Some(format!("Swap {} → {}", self.from, self.to));
        self.needs_redraw = true;
    }
}

/// Resolve the starting pair from user input, falling back to the configured defaults
/// and then to the first registry tokens.
pub fn initial_pair(registry: &TokenRegistry, from: Option<&str>, to: Option<&str>) -> Result<(Token, Token)> {
    let tokens = registry.tokens();
    let fallback = |preferred: &str, index: usize| {
        registry
            .resolve(preferred)
            .ok()
            .or_else(|| tokens.get(index).cloned())
            .or_else(|| tokens.first().cloned())
    };

    let from = match from {
        Some(symbol) => registry.resolve(symbol)?,
        None => match fallback(DEFAULT_FROM_TOKEN, 0) {
            Some(token) => token,
            None => bail!("token registry is empty"),
        },
    };
    let to = match to {
        Some(symbol) => registry.resolve(symbol)?,
        None => match fallback(DEFAULT_TO_TOKEN, 1) {
            Some(token) if token != from => token,
            _ => tokens.iter().find(|t| **t != from).cloned().unwrap_or_else(|| from.clone()),
        },
    };

    if from == to && registry.len() > 1 {
        bail!("cannot swap {from} for itself");
    }
    Ok((from, to))
}
