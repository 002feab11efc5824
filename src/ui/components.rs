use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use cli_log::warn;

use crate::app::{SwapSide, TokenEntry};
use crate::config::DEFAULT_ICON;
use crate::data::{Token, TokenRegistry};
use crate::utils::truncate_label;

pub const BORDER_COLOR: Color = Color::DarkGray;
pub const HIGHLIGHT_COLOR: Color = Color::Yellow;

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// `icon label SYMBOL`, with label and icon taken from the registry
pub fn token_line(registry: &TokenRegistry, token: &Token, highlighted: bool, max_label: usize) -> Line<'static> {
    let (icon, label) = match registry.info(token) {
        Some(info) => (info.icon.clone(), info.label.clone()),
        None => {
            warn!("Token '{token}' has no registry entry");
            (DEFAULT_ICON.to_string(), token.to_string())
        }
    };

    let label_style = if highlighted {
        Style::default().fg(HIGHLIGHT_COLOR).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    Line::from(vec![
        Span::styled(format!("{icon} "), Style::default().fg(Color::Cyan)),
        Span::styled(truncate_label(&label, max_label), label_style),
        Span::raw(" "),
        Span::styled(token.to_string(), Style::default().fg(Color::Gray)),
    ])
}

/// Render one entry as a standalone box. Recent entries get a border.
pub fn render_token_entry(f: &mut Frame, registry: &TokenRegistry, entry: &TokenEntry, highlighted: bool, area: Rect) {
    let max_label = area.width.saturating_sub(8) as usize;
    let line = token_line(registry, &entry.token, highlighted, max_label);

    let mut block = Block::default();
    if entry.variant.is_bordered() {
        let border_style = if highlighted {
            Style::default().fg(HIGHLIGHT_COLOR)
        } else {
            Style::default().fg(BORDER_COLOR)
        };
        block = block.borders(Borders::ALL).border_style(border_style);
    }

    f.render_widget(Paragraph::new(line).block(block), area);
}

/// "Select a token | Swap From" header line
pub fn modal_header(side: SwapSide) -> Line<'static> {
    Line::from(vec![
        Span::styled("Select a token", Style::default().fg(Color::Gray)),
        Span::styled(" │ ", Style::default().fg(BORDER_COLOR)),
        Span::styled(side.title(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
    ])
}

pub fn render_footer(f: &mut Frame, text: &str, area: Rect) {
    let footer = Paragraph::new(text.to_string())
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_inside_parent() {
        let parent = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(60, 80, parent);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 40);
        assert_eq!(popup.x, 20);
        assert_eq!(popup.y, 5);
    }

    #[test]
    fn token_line_uses_registry_label() {
        let registry = TokenRegistry::builtin().unwrap();
        let strk = registry.resolve("STRK").unwrap();
        let text: String = token_line(&registry, &strk, false, 20)
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        assert_eq!(text, "◆ Starknet STRK");
    }
}
