use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use super::core::App;
use super::modal::TokenModal;
use super::types::{ModalFocus, SwapSide, TokenEntry};
use crate::config::{MODAL_HEIGHT_PERCENT, MODAL_WIDTH_PERCENT};
use crate::ui::components::centered_rect;
use crate::ui::selectors::{hit_test, ModalHit};

impl App {
    /// Returns `false` when the user asked to quit.
    pub fn handle_key_input(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return true;
        }

        if let Some(modal) = self.modal.as_mut() {
            modal.handle_key(key);
            if modal.needs_redraw {
                modal.needs_redraw = false;
                self.needs_redraw = true;
            }
            self.process_events();
            return true;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return false,
            KeyCode::Char('f') | KeyCode::Left => self.open_modal(SwapSide::From),
            KeyCode::Char('t') | KeyCode::Right => self.open_modal(SwapSide::To),
            KeyCode::Char('s') => self.flip_pair(),
            _ => {}
        }
        true
    }

    /// Route a mouse event on a `screen`-sized terminal to the open modal
    pub fn handle_mouse_input(&mut self, mouse: MouseEvent, screen: Rect) {
        let Some(modal) = self.modal.as_mut() else {
            return;
        };

        let area = centered_rect(MODAL_WIDTH_PERCENT, MODAL_HEIGHT_PERCENT, screen);
        modal.handle_click(mouse, area);
        if modal.needs_redraw {
            modal.needs_redraw = false;
            self.needs_redraw = true;
        }
        self.process_events();
    }
}

impl TokenModal {
    /// Left clicks on a modal drawn in `area`; everything else is ignored
    pub fn handle_click(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) || !self.is_open() {
            return;
        }

        match hit_test(self, area, mouse.column, mouse.row) {
            Some(ModalHit::Close) => {
                self.dismiss();
            }
            Some(ModalHit::Search) => self.set_focus(ModalFocus::Search),
            Some(ModalHit::Recent(index)) => {
                if let Some(entry) = self.recent_entries().get(index).cloned() {
                    self.activate(&entry);
                }
            }
            Some(ModalHit::Listed(index)) => {
                if let Some(token) = self.visible.get(index).cloned() {
                    self.activate(&TokenEntry::listed(token));
                }
            }
            None => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press || !self.is_open() {
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.dismiss();
            }
            KeyCode::Enter => {
                self.activate_focused();
            }
            KeyCode::Tab => self.next_focus(),
            KeyCode::BackTab => self.previous_focus(),
            KeyCode::Up => self.handle_up_navigation(),
            KeyCode::Down => self.handle_down_navigation(),
            KeyCode::Left => {
                if self.focus == ModalFocus::Recent {
                    self.previous_recent_column();
                }
            }
            KeyCode::Right => {
                if self.focus == ModalFocus::Recent {
                    self.next_recent_column();
                }
            }
            KeyCode::PageUp => {
                if self.focus == ModalFocus::List {
                    self.page_up_tokens();
                }
            }
            KeyCode::PageDown => {
                if self.focus == ModalFocus::List {
                    self.page_down_tokens();
                }
            }
            KeyCode::Home => {
                if self.focus == ModalFocus::List {
                    self.first_token();
                }
            }
            KeyCode::End => {
                if self.focus == ModalFocus::List {
                    self.last_token();
                }
            }
            KeyCode::Backspace => {
                self.set_focus(ModalFocus::Search);
                self.remove_search_char();
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear_search();
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                // Typing always goes to the search box
                self.set_focus(ModalFocus::Search);
                self.add_search_char(ch);
            }
            _ => {}
        }
    }

    fn handle_up_navigation(&mut self) {
        match self.focus {
            ModalFocus::Search => {}
            ModalFocus::Recent => self.previous_recent_row(),
            ModalFocus::List => self.previous_token(),
        }
    }

    fn handle_down_navigation(&mut self) {
        match self.focus {
            ModalFocus::Search => self.set_focus(ModalFocus::List),
            ModalFocus::Recent => self.next_recent_row(),
            ModalFocus::List => self.next_token(),
        }
    }
}
