//! Search functionality for the token list

use cli_log::*;

use super::modal::TokenModal;
use crate::data::{Token, TokenRegistry};

/// Turns raw search box text into the query the list is filtered by.
pub struct SearchFilter;

impl SearchFilter {
    pub fn normalize(raw: &str) -> String {
        raw.to_lowercase()
    }

    /// Normalise `raw` and hand the result to `update`
    pub fn on_change<F: FnOnce(String)>(raw: &str, update: F) {
        update(Self::normalize(raw));
    }
}

/// Symbols whose lower-cased form contains the lower-cased `query`, in registry order.
///
/// Always recomputed from the whole registry.
pub fn filter_tokens(registry: &TokenRegistry, query: &str) -> Vec<Token> {
    if query.is_empty() {
        return registry.tokens();
    }

    let query = query.to_lowercase();
    registry
        .symbols()
        .filter(|token| token.as_str().to_lowercase().contains(&query))
        .cloned()
        .collect()
}

impl TokenModal {
    pub fn add_search_char(&mut self, ch: char) {
        if !self.is_open() {
            return;
        }
        self.input.push(ch);
        self.refresh_query();
    }

    pub fn remove_search_char(&mut self) {
        if !self.is_open() {
            return;
        }
        self.input.pop();
        self.refresh_query();
    }

    pub fn clear_search(&mut self) {
        if !self.is_open() {
            return;
        }
        self.input.clear();
        self.refresh_query();
    }

    /// Replace the whole search box text, as a paste would
    pub fn set_query(&mut self, raw: &str) {
        if !self.is_open() {
            return;
        }
        self.input = raw.to_string();
        self.refresh_query();
    }

    fn refresh_query(&mut self) {
        let raw = self.input.clone();
        SearchFilter::on_change(&raw, |query| self.apply_query(query));
    }

    fn apply_query(&mut self, query: String) {
        self.visible = filter_tokens(&self.registry, &query);
        debug!("Query '{}' matches {} of {} tokens", query, self.visible.len(), self.registry.len());
        self.query = query;

        if self.list_cursor >= self.visible.len() {
            self.list_cursor = 0;
        }
        self.needs_redraw = true;
    }
}
