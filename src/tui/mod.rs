mod app;
mod help_text;
mod syntax;
pub mod theme;
mod ui;
mod watcher;

pub use app::App;
pub use theme::ThemeName;
pub use watcher::{ContentChanges, ContentWatcher};

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use std::time::Duration;

/// Run the TUI application.
///
/// Draws, then waits up to 50ms for a key so finished lesson loads and
/// content file changes are picked up without user input. Returns when the
/// app asks to quit.
pub fn run(
    terminal: &mut DefaultTerminal,
    app: App,
    watcher: Option<ContentWatcher>,
) -> Result<()> {
    let mut app = app;
    let mut watcher = watcher;

    loop {
        terminal.draw(|frame| ui::render(frame, &mut app))?;

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key);
            if app.should_quit() {
                return Ok(());
            }
        }

        app.tick();

        match watcher.as_mut().and_then(ContentWatcher::check_for_changes) {
            Some(ContentChanges::Modules(changed)) => {
                tracing::debug!(?changed, "content files changed");
                app.modules_changed(&changed);
            }
            Some(ContentChanges::Rescan) => app.content_rescanned(),
            None => {}
        }
    }
}
