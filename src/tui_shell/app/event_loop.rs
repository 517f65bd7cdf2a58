use std::io;

use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::*;

pub(in crate::tui_shell) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.drain_workers();

        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        // Also paces the countdown redraw.
        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => app.handle_key(k),
                Event::Paste(text) => app.handle_paste(&text),
                _ => {}
            }
        }
    }
}
