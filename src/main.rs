use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dotenv::dotenv;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use std::{
    io,
    panic::{self, AssertUnwindSafe},
    sync::Arc,
    time::Duration,
};
use cli_log::*;
use clap::Parser;

// Import from our local library modules
use swap_selector::{filter_tokens, initial_pair, render_ui, token_rows, App, Cli, SearchFilter, TokenRegistry};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    init_cli_log!();
    info!("Starting swap token selector...");

    let cli = Cli::parse();
    let registry = Arc::new(TokenRegistry::load(cli.registry.as_deref())?);

    if let Some(raw) = cli.filter.as_deref() {
        let query = SearchFilter::normalize(raw);
        for row in token_rows(&registry, &filter_tokens(&registry, &query)) {
            println!("{row}");
        }
        return Ok(());
    }

    let (from, to) = initial_pair(&registry, cli.from.as_deref(), cli.to.as_deref())?;
    let mut app = App::new(registry, from, to);
    if let Some(side) = cli.open {
        app.open_modal(side);
    }

    // Gracefully handle panics and restore the terminal
    let result = panic::catch_unwind(AssertUnwindSafe(|| run_tui_app(&mut app)));

    // Restore terminal state
    disable_raw_mode().ok();
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture).ok();

    match result {
        Ok(res) => res,
        Err(panic) => {
            eprintln!("\n\nApplication panicked: {panic:?}\n\n");
            Err(anyhow::anyhow!("Application panicked"))
        }
    }
}

fn run_tui_app(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal before returning
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        info!("App error: {err:?}");
    }
    info!("Exiting with pair {} -> {}", app.from, app.to);

    res
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_millis(swap_selector::config::TICK_RATE_MS);

    loop {
        if app.needs_redraw {
            terminal.draw(|f| render_ui(f, app))?;
            app.needs_redraw = false;
        }

        if event::poll(tick_rate)? {
            match event::read()? {
                Event::Key(key) => {
                    if !app.handle_key_input(key) {
                        return Ok(()); // Exit requested
                    }
                }
                Event::Mouse(mouse) => {
                    let size = terminal.size()?;
                    app.handle_mouse_input(mouse, Rect::new(0, 0, size.width, size.height));
                }
                Event::Resize(_, _) => app.needs_redraw = true,
                _ => {}
            }
        }
    }
}
