use std::{io, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use game_client::{
    load_settings, BoardWidget, GameService, GameSession, SessionError, SessionEvent, SessionView,
};
use tokio::{
    io::{AsyncBufReadExt, BufReader},
    sync::broadcast::{self, error::RecvError},
};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

mod board;
mod commands;
mod view;

use board::TerminalBoard;
use commands::{parse_command, Command, HELP};
use view::TerminalView;

type TerminalSession<S> = GameSession<S, TerminalBoard, TerminalView<io::Stdout>>;

#[derive(Parser, Debug)]
#[command(about = "Play a remote chess game from the terminal")]
struct Args {
    /// Game service host; overrides the settings file.
    #[arg(long)]
    host: Option<String>,
    #[arg(long)]
    port: Option<u16>,
    /// Settings file, `chess_client.toml` by default.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref());
    if let Some(host) = args.host {
        settings.server_host = host;
    }
    if let Some(port) = args.port {
        settings.server_port = port;
    }

    let mut session = GameSession::with_settings(
        &settings,
        TerminalBoard::new(),
        TerminalView::new(io::stdout()),
    )?;
    tokio::spawn(log_events(session.subscribe_events()));

    if let Err(err) = session.initialize().await {
        warn!(error = %err, "could not load the game; type 'refresh' to retry");
    }
    print_board(&mut session);
    session.view_mut().print(HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                session.view_mut().show_error(&err.to_string());
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }
        run_command(&mut session, command).await;
    }

    Ok(())
}

async fn run_command<S: GameService>(session: &mut TerminalSession<S>, command: Command) {
    let result = match command {
        Command::Drop { source, target } => {
            if !session.board().is_draggable() {
                session
                    .view_mut()
                    .show_error("the game is over; reset to play again");
                return;
            }
            let Some(piece) = session.board_mut().drop_piece(source, target) else {
                session
                    .view_mut()
                    .show_error(&format!("there is no piece on {source}"));
                return;
            };
            session.on_drop(source, target, piece).await.map(|_| ())
        }
        Command::Promote(piece) => {
            session.view_mut().select_promotion(piece);
            session.on_promotion_confirmed().await.map(|_| ())
        }
        Command::Reset(player) => {
            let player = player.unwrap_or_else(|| session.board().orientation());
            session.on_reset_requested(player).await.map(|_| ())
        }
        Command::Switch => session.on_color_switch_requested().await.map(|_| ()),
        Command::Refresh => session.refresh().await.map(|_| ()),
        Command::Delete => session.delete_game().await,
        Command::Board => Ok(()),
        Command::Help => {
            session.view_mut().print(HELP);
            return;
        }
        Command::Quit => return,
    };

    match result {
        // service failures were already reported by the session
        Ok(()) | Err(SessionError::Service(_)) => {}
        Err(err) => session.view_mut().show_error(&err.to_string()),
    }
    print_board(session);
}

fn print_board<S: GameService>(session: &mut TerminalSession<S>) {
    let text = format!("{}FEN: {}", session.board().render(), session.board().fen());
    let view = session.view_mut();
    view.print(&text);
    if view.promotion_visible() {
        view.print("(waiting for: promote q|r|b|n)");
    }
}

async fn log_events(mut events: broadcast::Receiver<SessionEvent>) {
    loop {
        match events.recv().await {
            Ok(event) => debug!(?event, "session event"),
            Err(RecvError::Lagged(skipped)) => warn!(skipped, "session event log fell behind"),
            Err(RecvError::Closed) => break,
        }
    }
}
