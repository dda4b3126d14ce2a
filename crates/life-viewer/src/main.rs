//! Terminal viewer for the Game of Life engine.

mod input;
mod render;
mod session;
mod telemetry;
mod terminal;

use anyhow::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use life_core::LifeConfig;
use render::TerminalRenderer;
use session::{Frame, Session};
use terminal::TermGuard;
use tokio::signal;
use tokio::time::{interval, Duration};
use tracing::{debug, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    telemetry::init_telemetry()?;

    // Load configuration
    let config = match std::env::args().nth(1) {
        Some(path) => LifeConfig::from_json_file(path)?,
        None => LifeConfig::default(),
    }
    .with_env_overrides()?;

    info!(
        width = config.board.width,
        height = config.board.height,
        seed = config.board.seed,
        boundary = ?config.board.boundary,
        headless = config.run.headless,
        "Starting Game of Life viewer"
    );

    let frame_interval = Duration::from_millis(config.view.frame_interval_ms);
    let mut session = Session::new(config)?;

    if session.config().run.headless {
        let summary = session.run_headless()?;
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let _guard = TermGuard::new()?;
    let mut renderer = TerminalRenderer::new(std::io::stdout(), &session.config().view);
    renderer.draw(&session, &Frame::Full)?;

    let mut events = EventStream::new();
    let mut frames = interval(frame_interval);

    while !session.is_finished() {
        tokio::select! {
            _ = frames.tick() => {
                let frame = session.tick()?;
                renderer.draw(&session, &frame)?;
            }
            event = events.next() => match event {
                Some(event) => {
                    if let Some(event) = input::map_event(&event?) {
                        let frame = session.handle_event(event)?;
                        renderer.draw(&session, &frame)?;
                    }
                }
                None => {
                    debug!("Terminal event stream closed");
                    break;
                }
            },
            _ = signal::ctrl_c() => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    info!(
        generation = session.generation(),
        population = session.board().population(),
        "Viewer stopped"
    );

    Ok(())
}
