use cellmenu::app::App;
use cellmenu::core::UiConfig;
use cellmenu::logging;
use cellmenu::tui::crossterm::CrosstermEvents;
use cellmenu::tui::terminal_guard::TerminalGuard;
use cellmenu::ui::backend::terminal::TerminalBackend;
use std::io;

fn main() -> io::Result<()> {
    let _logging = logging::init();

    let guard = TerminalGuard::new()?;
    let result = run();
    drop(guard);

    if let Err(err) = &result {
        tracing::error!(error = %err, "ui loop failed");
    }
    result
}

fn run() -> io::Result<()> {
    let mut app = App::new(TerminalBackend::stdout(), UiConfig::default())?;
    app.run(&mut CrosstermEvents)
}
