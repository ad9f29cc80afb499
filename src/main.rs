use memberlist::app::{App, Tui};
use memberlist::config::AppConfig;
use memberlist::{error, logging, MemberListError, Result};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "member list failed");
            eprintln!("{}", error::user_friendly_message(&err));
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = AppConfig::load()?;
    let log_path = logging::init(&config.logging)?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        log = %log_path.display(),
        "starting"
    );

    let mut tui = Tui::new(config.tick_rate()).map_err(|e| MemberListError::Tui(e.to_string()))?;
    tui.init().map_err(|e| MemberListError::Tui(e.to_string()))?;

    let mut app = App::new(&config);
    let outcome = app.run(&mut tui);
    let restored = tui.restore();

    settle(outcome, restored)
}

/// The loop's own error wins over a failed terminal restore
fn settle(outcome: Result<()>, restored: io::Result<()>) -> Result<()> {
    outcome?;
    restored?;
    Ok(())
}
