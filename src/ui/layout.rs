use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, SwapSide};
use crate::config::{MODAL_HEIGHT_PERCENT, MODAL_WIDTH_PERCENT};
use crate::utils::shorten_address;
use super::{
    components::{centered_rect, render_footer, token_line, BORDER_COLOR},
    selectors::render_token_modal,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(f.area());

    // Header
    let header = Paragraph::new("Token Swap")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    render_pair(f, app, chunks[1]);

    let status = app
        .status_message
        .clone()
        .unwrap_or_else(|| format!("Swap {} → {}", app.from, app.to));
    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Green))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    render_footer(f, "[F] Select From | [T] Select To | [S] Flip | [Q] Quit", chunks[3]);

    if let Some(modal) = &app.modal {
        let popup_area = centered_rect(MODAL_WIDTH_PERCENT, MODAL_HEIGHT_PERCENT, f.area());
        f.render_widget(Clear, popup_area);
        render_token_modal(f, modal, popup_area);
    }
}

fn render_pair(f: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Percentage(10),
            Constraint::Percentage(45),
        ])
        .split(area);

    render_side(f, app, SwapSide::From, columns[0]);

    let arrow = Paragraph::new("⇄")
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    let arrow_area = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..columns[1]
    };
    f.render_widget(arrow, arrow_area);

    render_side(f, app, SwapSide::To, columns[2]);
}

fn render_side(f: &mut Frame, app: &App, side: SwapSide, area: Rect) {
    let token = match side {
        SwapSide::From => &app.from,
        SwapSide::To => &app.to,
    };
    let active = app.modal.as_ref().is_some_and(|modal| modal.side() == side);
    let border_style = if active {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(BORDER_COLOR)
    };

    let max_label = area.width.saturating_sub(10) as usize;
    let mut lines = vec![Line::default(), token_line(&app.registry, token, false, max_label)];
    if let Some(address) = app.registry.info(token).and_then(|info| info.address.as_deref()) {
        lines.push(Line::from(Span::styled(shorten_address(address), Style::default().fg(Color::DarkGray))));
    }

    let key = if side.is_from() { "F" } else { "T" };
    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!("{} [{key}]", side.title())),
        );
    f.render_widget(panel, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::initial_pair;
    use crate::data::TokenRegistry;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| render_ui(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app() -> App {
        let registry = Arc::new(TokenRegistry::builtin().unwrap());
        let (from, to) = initial_pair(&registry, None, None).unwrap();
        App::new(registry, from, to)
    }

    #[test]
    fn swap_screen_shows_both_legs() {
        let text = draw(&app());
        assert!(text.contains("Swap From [F]"));
        assert!(text.contains("Swap To [T]"));
        assert!(text.contains("Ethereum"));
        assert!(text.contains("USD Coin"));
        assert!(!text.contains("Recent searches"));
    }

    #[test]
    fn open_modal_is_drawn_on_top() {
        let mut app = app();
        app.open_modal(SwapSide::To);
        let text = draw(&app);
        assert!(text.contains("Select a token"));
        assert!(text.contains("Recent searches"));
    }
}
