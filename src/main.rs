use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;

use campus_profile::app::App;
use campus_profile::cli::{json_output, summary_output, Cli, OutputMode};
use campus_profile::client::ProfileClient;
use campus_profile::config::ProfileConfig;
use campus_profile::controller::ProfileController;
use campus_profile::logging::initialize_logging;
use campus_profile::terminal::{setup_panic_hook, TerminalManager};
use campus_profile::ui;

/// Spinner animation rate
const TICK_RATE: Duration = Duration::from_millis(120);

#[tokio::main]
async fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();

    match initialize_logging() {
        Ok(path) => tracing::debug!("Logging to {}", path.display()),
        Err(e) => eprintln!("Warning: file logging disabled: {}", e),
    }

    let config = cli.apply(ProfileConfig::from_env());
    tracing::info!(?config, "Starting {}", env!("CARGO_PKG_NAME"));
    let client = ProfileClient::from_config(&config);

    match cli.output_mode() {
        OutputMode::Interactive => {
            run_interactive(client).await?;
            Ok(ExitCode::SUCCESS)
        }
        mode => {
            let mut controller = ProfileController::new(client);
            let state = controller.load_profile().await;
            let printed = if mode == OutputMode::Json {
                json_output(state)
            } else {
                summary_output(state)
            };
            Ok(ExitCode::from(printed.emit()))
        }
    }
}

async fn run_interactive(client: ProfileClient) -> Result<()> {
    setup_panic_hook();

    let mut term_manager = TerminalManager::new()?;
    let mut app = App::new(client);
    app.refresh();

    let result = run_app(term_manager.terminal(), &mut app).await;
    term_manager.restore()?;
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut message_rx = app
        .message_rx
        .take()
        .ok_or_else(|| eyre!("message receiver already taken"))?;
    let mut ticker = tokio::time::interval(TICK_RATE);

    let size = terminal.size()?;
    app.resize(size.width, size.height);

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            tracing::info!("Quitting");
            return Ok(());
        }

        tokio::select! {
            _ = ticker.tick() => app.tick(),

            event = event_stream.next() => match event {
                Some(Ok(Event::Key(key))) => app.handle_key(key),
                Some(Ok(Event::Resize(width, height))) => app.resize(width, height),
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e.into()),
                None => return Ok(()),
            },

            Some(msg) = message_rx.recv() => app.handle_message(msg),
        }
    }
}
