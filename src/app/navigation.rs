//! Keyboard navigation inside the token modal

use super::modal::TokenModal;
use super::types::ModalFocus;
use crate::config::{LIST_PAGE_SIZE, RECENT_GRID_COLUMNS};

impl TokenModal {
    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
        self.needs_redraw = true;
    }

    pub fn previous_focus(&mut self) {
        self.focus = self.focus.previous();
        self.needs_redraw = true;
    }

    pub fn set_focus(&mut self, focus: ModalFocus) {
        self.focus = focus;
        self.needs_redraw = true;
    }

    // Recent grid navigation
    pub fn next_recent_column(&mut self) {
        let len = self.registry.recent().len();
        let row_start = self.recent_cursor - self.recent_cursor % RECENT_GRID_COLUMNS;
        let column = (self.recent_cursor % RECENT_GRID_COLUMNS + 1) % RECENT_GRID_COLUMNS;
        self.recent_cursor = (row_start + column).min(len - 1);
        self.needs_redraw = true;
    }

    pub fn previous_recent_column(&mut self) {
        let row_start = self.recent_cursor - self.recent_cursor % RECENT_GRID_COLUMNS;
        let column = self.recent_cursor % RECENT_GRID_COLUMNS;
        let column = if column == 0 { RECENT_GRID_COLUMNS - 1 } else { column - 1 };
        self.recent_cursor = (row_start + column).min(self.registry.recent().len() - 1);
        self.needs_redraw = true;
    }

    pub fn next_recent_row(&mut self) {
        let len = self.registry.recent().len();
        self.recent_cursor = (self.recent_cursor + RECENT_GRID_COLUMNS) % len;
        self.needs_redraw = true;
    }

    pub fn previous_recent_row(&mut self) {
        let len = self.registry.recent().len();
        self.recent_cursor = (self.recent_cursor + len - RECENT_GRID_COLUMNS % len) % len;
        self.needs_redraw = true;
    }

    // Token list navigation
    pub fn next_token(&mut self) {
        if !self.visible.is_empty() {
            self.list_cursor = (self.list_cursor + 1) % self.visible.len();
            self.needs_redraw = true;
        }
    }

    pub fn previous_token(&mut self) {
        if !self.visible.is_empty() {
            self.list_cursor = if self.list_cursor == 0 {
                self.visible.len() - 1
            } else {
                self.list_cursor - 1
            };
            self.needs_redraw = true;
        }
    }

    pub fn page_down_tokens(&mut self) {
        if !self.visible.is_empty() {
            self.list_cursor = std::cmp::min(self.list_cursor + LIST_PAGE_SIZE, self.visible.len() - 1);
            self.needs_redraw = true;
        }
    }

    pub fn page_up_tokens(&mut self) {
        self.list_cursor = self.list_cursor.saturating_sub(LIST_PAGE_SIZE);
        self.needs_redraw = true;
    }

    pub fn first_token(&mut self) {
        self.list_cursor = 0;
        self.needs_redraw = true;
    }

    pub fn last_token(&mut self) {
        self.list_cursor = self.visible.len().saturating_sub(1);
        self.needs_redraw = true;
    }
}

#[cfg(test)]
mod tests {
    use crate::app::modal::tests::recorded_modal;
    use crate::app::types::SwapSide;

    #[test]
    fn list_cursor_wraps_both_ways() {
        let (mut modal, _calls) = recorded_modal(SwapSide::From);
        let len = modal.visible_tokens().len();
        modal.previous_token();
        assert_eq!(modal.list_cursor(), len - 1);
        modal.next_token();
        assert_eq!(modal.list_cursor(), 0);
    }

    #[test]
    fn paging_stays_in_bounds() {
        let (mut modal, _calls) = recorded_modal(SwapSide::From);
        let len = modal.visible_tokens().len();
        modal.page_down_tokens();
        modal.page_down_tokens();
        assert_eq!(modal.list_cursor(), len - 1);
        modal.page_up_tokens();
        modal.page_up_tokens();
        assert_eq!(modal.list_cursor(), 0);
    }

    #[test]
    fn recent_grid_moves_in_two_columns() {
        let (mut modal, _calls) = recorded_modal(SwapSide::From);
        modal.next_recent_column();
        assert_eq!(modal.recent_cursor(), 1);
        modal.next_recent_column();
        assert_eq!(modal.recent_cursor(), 0);
        modal.previous_recent_column();
        assert_eq!(modal.recent_cursor(), 1);
        modal.next_recent_row();
        assert_eq!(modal.recent_cursor(), 3);
        modal.next_recent_row();
        assert_eq!(modal.recent_cursor(), 1);
        modal.previous_recent_row();
        assert_eq!(modal.recent_cursor(), 3);
    }

    #[test]
    fn narrowing_the_list_resets_the_cursor() {
        let (mut modal, _calls) = recorded_modal(SwapSide::From);
        modal.last_token();
        assert_eq!(modal.list_cursor(), 4);
        modal.set_query("us");
        assert_eq!(modal.list_cursor(), 0);
    }
}
