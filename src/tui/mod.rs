pub mod action;
pub mod keys;
pub mod reducer;
pub mod runtime;
pub mod state;
pub mod types;
pub mod view;
pub mod widgets;

#[cfg(test)]
pub mod testing;


pub use action::{Action, Effect};
pub use keys::key_to_action;
pub use reducer::reduce;
pub use runtime::Runtime;
pub use state::AppState;
pub use types::{Direction, Panel, Side};

use std::io;
use std::sync::Arc;
use std::time::Duration;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::config::Config;
use crate::data_provider::TournamentDataProvider;

/// Main entry point for TUI mode
pub async fn run(
    provider: Arc<dyn TournamentDataProvider>,
    config: Config,
) -> Result<(), io::Error> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut runtime = Runtime::new(AppState::with_config(config), provider);

    // Trigger initial data load
    runtime.dispatch(Action::LoadTournament);

    let result = run_loop(&mut terminal, &mut runtime);

    // Restore terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    runtime: &mut Runtime,
) -> Result<(), io::Error> {
    loop {
        // Process actions from background tasks first so loads trigger a re-render
        let actions_processed = runtime.process_actions();
        if actions_processed > 0 {
            tracing::debug!("LOOP: Processed {} actions", actions_processed);
        }

        terminal.draw(|f| {
            let area = f.area();
            view::render_app(runtime.state(), area, f.buffer_mut());
        })?;

        if actions_processed > 0 {
            continue;
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(action) = key_to_action(key, runtime.state()) {
                    if matches!(action, Action::Quit) {
                        tracing::debug!("ACTION: Quitting application");
                        return Ok(());
                    }
                    runtime.dispatch(action);
                }
            }
        }
    }
}
