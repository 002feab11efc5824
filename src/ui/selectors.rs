use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{ModalFocus, TokenModal};
use crate::config::{MODAL_SUBTITLE, RECENT_GRID_COLUMNS};
use super::components::{modal_header, render_token_entry, token_line, BORDER_COLOR, HIGHLIGHT_COLOR};

const RECENT_ROW_HEIGHT: u16 = 3;
const CLOSE_TITLE: &str = " Esc ✕ ";

/// Screen regions of an open token modal, shared by drawing and mouse hit-testing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalLayout {
    pub close: Rect,
    pub subtitle: Rect,
    pub search: Rect,
    pub recent_heading: Rect,
    /// One cell per recent entry, row-major.
    pub recent_cells: Vec<Rect>,
    pub list: Rect,
    pub hints: Rect,
}

impl ModalLayout {
    pub fn new(area: Rect, recent_len: usize) -> Self {
        let inner = Block::default().borders(Borders::ALL).inner(area);

        let recent_rows = recent_len.div_ceil(RECENT_GRID_COLUMNS);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),                                          // Subtitle
                Constraint::Length(3),                                          // Search box
                Constraint::Length(1 + recent_rows as u16 * RECENT_ROW_HEIGHT), // Recent grid
                Constraint::Min(3),                                             // Token list
                Constraint::Length(1),                                          // Key hints
            ])
            .split(inner);

        let mut constraints = vec![Constraint::Length(1)];
        constraints.extend((0..recent_rows).map(|_| Constraint::Length(RECENT_ROW_HEIGHT)));
        let recent = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(chunks[2]);

        let mut recent_cells = Vec::with_capacity(recent_len);
        for row in 0..recent_rows {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints((0..RECENT_GRID_COLUMNS).map(|_| Constraint::Ratio(1, RECENT_GRID_COLUMNS as u32)))
                .split(recent[row + 1]);
            recent_cells.extend(columns.iter().copied());
        }
        recent_cells.truncate(recent_len);

        // Right-aligned titles end one cell before the top-right corner
        let close_width = Line::from(CLOSE_TITLE).width() as u16;
        let close = Rect {
            x: area.right().saturating_sub(1 + close_width).max(area.x),
            y: area.y,
            width: close_width.min(area.width),
            height: area.height.min(1),
        };

        Self {
            close,
            subtitle: chunks[0],
            search: chunks[1],
            recent_heading: recent[0],
            recent_cells,
            list: chunks[3],
            hints: chunks[4],
        }
    }

    /// Rows of the token list inside its border.
    pub fn list_rows(&self) -> Rect {
        Block::default().borders(Borders::ALL).inner(self.list)
    }
}

/// What a click at a screen position falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalHit {
    Close,
    Search,
    Recent(usize),
    /// Index into the visible token list.
    Listed(usize),
}

pub fn hit_test(modal: &TokenModal, area: Rect, column: u16, row: u16) -> Option<ModalHit> {
    let position = Position::new(column, row);
    if !area.contains(position) {
        return None;
    }

    let layout = ModalLayout::new(area, modal.registry().recent().len());
    if layout.close.contains(position) {
        return Some(ModalHit::Close);
    }
    if layout.search.contains(position) {
        return Some(ModalHit::Search);
    }
    if let Some(index) = layout.recent_cells.iter().position(|cell| cell.contains(position)) {
        return Some(ModalHit::Recent(index));
    }

    let rows = layout.list_rows();
    if rows.contains(position) {
        let offset = list_scroll_offset(modal.list_cursor(), rows.height as usize);
        let index = offset + (row - rows.y) as usize;
        if index < modal.listed_entries().len() {
            return Some(ModalHit::Listed(index));
        }
    }
    None
}

/// First list row shown so that `cursor` stays on screen.
pub fn list_scroll_offset(cursor: usize, visible_height: usize) -> usize {
    if visible_height > 0 && cursor >= visible_height {
        cursor - visible_height + 1
    } else {
        0
    }
}

/// Column of the text cursor after `input` in a bordered search box.
pub fn search_cursor_x(area: Rect, input: &str) -> u16 {
    let typed = u16::try_from(Line::from(input).width()).unwrap_or(u16::MAX);
    area.x
        .saturating_add(1)
        .saturating_add(typed)
        .min(area.right().saturating_sub(2))
}

pub fn render_token_modal(f: &mut Frame, modal: &TokenModal, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER_COLOR))
        .title_top(modal_header(modal.side()))
        .title_top(Line::from(CLOSE_TITLE).right_aligned());
    f.render_widget(block, area);

    let layout = ModalLayout::new(area, modal.registry().recent().len());

    let subtitle = Paragraph::new(MODAL_SUBTITLE).style(Style::default().fg(Color::Gray));
    f.render_widget(subtitle, layout.subtitle);

    render_search_box(f, modal, layout.search);
    render_recent_tokens(f, modal, &layout);
    render_token_list(f, modal, layout.list);

    let hints = Paragraph::new("Type: search | Tab: focus | ↑↓←→: move | Enter: select | Esc: close")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hints, layout.hints);
}

pub fn render_search_box(f: &mut Frame, modal: &TokenModal, area: Rect) {
    let focused = modal.focus() == ModalFocus::Search;
    let border_style = if focused {
        Style::default().fg(HIGHLIGHT_COLOR)
    } else {
        Style::default().fg(BORDER_COLOR)
    };

    let text = if modal.input().is_empty() {
        Line::from(Span::styled("Search token", Style::default().fg(Color::DarkGray)))
    } else {
        Line::from(Span::styled(modal.input().to_string(), Style::default().fg(Color::White)))
    };

    let search = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title("🔍"),
    );
    f.render_widget(search, area);

    if focused {
        f.set_cursor_position((search_cursor_x(area, modal.input()), area.y + 1));
    }
}

/// The four shortcut entries, always shown in full whatever the query
pub fn render_recent_tokens(f: &mut Frame, modal: &TokenModal, layout: &ModalLayout) {
    let heading = Paragraph::new("◷ Recent searches").style(Style::default().fg(Color::Gray));
    f.render_widget(heading, layout.recent_heading);

    for (index, (entry, cell)) in modal.recent_entries().iter().zip(&layout.recent_cells).enumerate() {
        render_token_entry(f, modal.registry(), entry, modal.is_highlighted(entry, index), *cell);
    }
}

pub fn render_token_list(f: &mut Frame, modal: &TokenModal, area: Rect) {
    // Calculate visible area for scrolling
    let visible_height = area.height.saturating_sub(2) as usize; // Account for borders
    let entries = modal.listed_entries();
    let total_items = entries.len();
    let total_tokens = modal.registry().len();

    let title = if modal.query().is_empty() {
        format!("Tokens ({total_tokens} total)")
    } else {
        format!("Tokens - Search: '{}' ({}/{})", modal.input(), total_items, total_tokens)
    };
    let border_style = if modal.focus() == ModalFocus::List {
        Style::default().fg(HIGHLIGHT_COLOR)
    } else {
        Style::default().fg(BORDER_COLOR)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    // Calculate scroll offset to keep the cursor visible
    let cursor = modal.list_cursor();
    let scroll_offset = list_scroll_offset(cursor, visible_height);
    let visible_end = std::cmp::min(scroll_offset + visible_height, total_items);
    let max_label = area.width.saturating_sub(12) as usize;

    let items: Vec<ListItem> = entries
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_height)
        .map(|(index, entry)| {
            let highlighted = modal.is_highlighted(entry, index);
            let marker = if highlighted { "► " } else { "  " };
            let mut line = token_line(modal.registry(), &entry.token, highlighted, max_label);
            line.spans.insert(0, Span::styled(marker, Style::default().fg(HIGHLIGHT_COLOR)));
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD));
    f.render_widget(list, area);

    // Show scroll indicator if needed
    if total_items > visible_height {
        let scroll_indicator = format!(" {}-{}/{} ", scroll_offset + 1, visible_end, total_items);
        let indicator_width = scroll_indicator.len() as u16;
        if indicator_width + 1 < area.width {
            let indicator_area = Rect {
                x: area.x + area.width - indicator_width - 1,
                y: area.y,
                width: indicator_width,
                height: 1,
            };
            let indicator = Paragraph::new(scroll_indicator).style(Style::default().fg(Color::Cyan));
            f.render_widget(indicator, indicator_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modal::tests::recorded_modal;
    use crate::app::SwapSide;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn draw(modal: &TokenModal, width: u16, height: u16) -> Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| render_token_modal(f, modal, f.area()))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen_text(buffer: &Buffer) -> String {
        let area = buffer.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn shows_header_recent_grid_and_every_token() {
        let (modal, _calls) = recorded_modal(SwapSide::From);
        let text = screen_text(&draw(&modal, 70, 30));
        assert!(text.contains("Swap From"));
        assert!(text.contains("Recent searches"));
        assert!(text.contains("Tokens (5 total)"));
        for label in ["Starknet", "Ethereum", "Bitcoin", "Tether", "USD Coin"] {
            assert!(text.contains(label), "missing {label}");
        }
    }

    #[test]
    fn no_match_leaves_list_empty_but_recent_intact() {
        let (mut modal, _calls) = recorded_modal(SwapSide::To);
        modal.set_query("xyz");
        let text = screen_text(&draw(&modal, 70, 30));
        assert!(text.contains("Swap To"));
        assert!(text.contains("(0/5)"));
        // The recent grid still names its four tokens
        for label in ["Starknet", "Ethereum", "Bitcoin", "Tether"] {
            assert!(text.contains(label), "missing {label}");
        }
        assert!(!text.contains("USD Coin"));
    }

    #[test]
    fn filtered_list_shows_only_matches() {
        let (mut modal, _calls) = recorded_modal(SwapSide::From);
        modal.set_query("usd");
        let text = screen_text(&draw(&modal, 70, 30));
        assert!(text.contains("(2/5)"));
        assert!(text.contains("USD Coin"));
        assert!(text.contains("USDT"));
    }

    #[test]
    fn small_area_scrolls_without_panicking() {
        let (mut modal, _calls) = recorded_modal(SwapSide::From);
        modal.set_focus(ModalFocus::List);
        modal.last_token();
        let text = screen_text(&draw(&modal, 40, 18));
        assert!(text.contains("►"));
    }

    #[test]
    fn search_cursor_follows_display_width() {
        let (mut modal, _calls) = recorded_modal(SwapSide::From);
        modal.set_query("以太");

        let mut terminal = Terminal::new(TestBackend::new(70, 30)).unwrap();
        terminal
            .draw(|f| render_token_modal(f, &modal, f.area()))
            .unwrap();
        let search = ModalLayout::new(Rect::new(0, 0, 70, 30), 4).search;
        let cursor = terminal.get_cursor_position().unwrap();
        assert_eq!(cursor, Position::new(search.x + 5, search.y + 1));

        assert_eq!(search_cursor_x(Rect::new(0, 0, 20, 3), "以太"), 5);
        assert_eq!(search_cursor_x(Rect::new(0, 0, 20, 3), "eth"), 4);
        // Long input pins the cursor to the last cell inside the border
        assert_eq!(search_cursor_x(Rect::new(u16::MAX - 10, 0, 10, 3), &"x".repeat(40)), u16::MAX - 2);
    }

    #[test]
    fn layout_matches_what_is_drawn() {
        let (modal, _calls) = recorded_modal(SwapSide::From);
        let area = Rect::new(0, 0, 70, 30);
        let buffer = draw(&modal, 70, 30);
        let layout = ModalLayout::new(area, 4);

        let close: String = (layout.close.x..layout.close.right())
            .map(|x| buffer[(x, layout.close.y)].symbol().to_string())
            .collect();
        assert!(close.contains("Esc"));
        assert_eq!(layout.recent_cells.len(), 4);

        let rows = layout.list_rows();
        let first_row: String = (rows.x..rows.right())
            .map(|x| buffer[(x, rows.y)].symbol().to_string())
            .collect();
        assert!(first_row.contains("Ethereum"));

        assert_eq!(hit_test(&modal, area, rows.x + 2, rows.y + 2), Some(ModalHit::Listed(2)));
        assert_eq!(hit_test(&modal, area, layout.close.x, layout.close.y), Some(ModalHit::Close));
        assert_eq!(hit_test(&modal, area, 75, 5), None);
    }

    #[test]
    fn scrolled_list_offsets_clicks() {
        let (mut modal, _calls) = recorded_modal(SwapSide::From);
        modal.set_focus(ModalFocus::List);
        modal.last_token();
        let area = Rect::new(0, 0, 40, 18);
        let rows = ModalLayout::new(area, 4).list_rows();
        let offset = list_scroll_offset(modal.list_cursor(), rows.height as usize);
        assert!(offset > 0);
        assert_eq!(hit_test(&modal, area, rows.x + 1, rows.y), Some(ModalHit::Listed(offset)));
    }
}
