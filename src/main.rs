mod app;
mod config;
mod countdown;
mod logging;
mod storage;
mod store;
mod ui;

use crate::app::effect::Effect;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::countdown::timer::CountdownTimers;
use crate::storage::ListFile;
use crate::store::ListState;
use anyhow::Result;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let cfg = config::load_config()?;
    logging::init(&cfg.logging)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, cfg).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    // A list file that fails to load is left alone rather than overwritten
    let mut list_file = ListFile::from_config(&cfg.storage);
    let mut load_error = None;
    let loaded = list_file.as_ref().map(ListFile::load);
    let list = match loaded {
        Some(Ok(list)) => list,
        Some(Err(e)) => {
            warn!(error = %e, "could not load list");
            load_error = Some(e.to_string());
            list_file = None;
            ListState::default()
        }
        None => ListState::default(),
    };
    if let Some(file) = &list_file {
        info!(path = %file.path().display(), "using list file");
    }

    let mut state = AppState::new(cfg, list);
    let mut timers = CountdownTimers::new(event_tx.clone(), state.countdown);
    if let Some(e) = load_error {
        state.notify_error(format!("{}. Changes will not be saved.", e));
    }
    info!(items = state.items().len(), "starting");

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let effects = handler::handle_event(&mut state, event);

        let mut save = false;
        for effect in effects {
            match effect {
                Effect::StartCountdown { item_id, ticket } => timers.start(item_id, ticket),
                Effect::CancelCountdown { item_id } => {
                    timers.cancel(item_id);
                }
                Effect::SaveList => save = true,
                Effect::Quit => state.should_quit = true,
            }
        }

        if save {
            if let Some(file) = &list_file {
                if let Err(e) = file.save(state.store.list()) {
                    warn!(error = %e, "could not save list");
                    state.notify_error(format!("Could not save list: {}", e));
                }
            }
        }

        if state.should_quit {
            info!(running = timers.running_count(), "quitting");
            timers.cancel_all();
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}
