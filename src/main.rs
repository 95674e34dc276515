use cvchat::{
    client::{dispatch, load_suggestions, ChatClient},
    config::{get_config_dir, initialize_config},
    key_handlers::{handle_chat_input, KeyAction},
    logging::init_logging,
    ui, App,
};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dotenv::dotenv;
use log::{error, info, warn};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{io, time::Duration};
use tokio::{sync::mpsc, time};

const TICK_RATE: Duration = Duration::from_millis(80);
const POLL_TIMEOUT: Duration = Duration::from_millis(100);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    let config = initialize_config()?;
    let _logger = init_logging(&get_config_dir()?, &config.log_level)?;
    info!("Starting cvchat against {}", config.base_url);

    let client = ChatClient::new(&config)?.into_shared();

    let api = client.lock().await.api().clone();
    tokio::spawn(async move {
        match api.health().await {
            Ok(status) => info!("Backend {} reports status '{}'", api.base_url(), status),
            Err(e) => warn!("Backend {} health check failed: {}", api.base_url(), e),
        }
    });
    tokio::spawn(load_suggestions(client.clone()));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, App::new(client)).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!("Terminal loop failed: {:?}", err);
        eprintln!("{:?}", err);
    }
    info!("Exiting");
    res
}

/// Main loop: redraws on every tick or input event until asked to quit.
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> anyhow::Result<()> {
    let (tx, mut rx) = mpsc::channel::<Event>(100);

    // Terminal input is blocking, so read it off the runtime threads.
    tokio::task::spawn_blocking(move || loop {
        match event::poll(POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(event) => {
                    if tx.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("Failed to read terminal event: {}", e);
                    break;
                }
            },
            Ok(false) => {
                if tx.is_closed() {
                    break;
                }
            }
            Err(e) => {
                warn!("Failed to poll terminal events: {}", e);
                break;
            }
        }
    });

    let mut tick = time::interval(TICK_RATE);
    while !app.should_quit {
        {
            let mut client = app.client.lock().await;
            app.status_indicator.set_waiting(client.is_pending());
            if client.is_animating() {
                app.status_indicator.set_status("Typing answer...");
            } else {
                app.status_indicator.clear_status();
            }
            terminal.draw(|f| ui::draw(f, &app, &mut client))?;
        }

        tokio::select! {
            event = rx.recv() => match event {
                Some(Event::Key(key)) => {
                    let shared = app.client.clone();
                    let action = {
                        let mut client = shared.lock().await;
                        handle_chat_input(key, &mut app, &mut client)
                    };
                    match action {
                        KeyAction::Send(pending) => {
                            tokio::spawn(dispatch(shared, pending));
                        }
                        KeyAction::Quit => app.should_quit = true,
                        KeyAction::None => {}
                    }
                }
                Some(_) => {}
                None => app.should_quit = true,
            },
            _ = tick.tick() => app.status_indicator.update_spinner(),
        }
    }

    Ok(())
}
