//! Moderator console for the survey party game.
//!
//! Runs one game session actor and drives it from typed commands. The
//! question generator is configured from the environment (and `.env`).

use std::sync::Arc;

use anyhow::{Context, Error};
use ctrlc::set_handler;
use log::{info, warn};
use pico_args::Arguments;
use ss_console::{
    commands::{ConsoleCommand, parse_command, split_names},
    view::{render_board, render_flash, render_standings},
};
use survey_says::{
    GamePhase, GameState, GeneratorConfig, QuestionService, STRIKE_FLASH_DURATION, SessionActor,
    SessionHandle,
};
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "\
Moderate a survey party game from the terminal

USAGE:
  ss_console [OPTIONS]

OPTIONS:
  --teams      N           Start right away with N teams (2 to 4)
  --names      A,B,...     Team names for --teams

FLAGS:
  --offline                Use the built-in question pool only
  -h, --help               Print help information

ENVIRONMENT:
  SURVEY_API_KEY           API key for the question generator (or OPENAI_API_KEY)
  SURVEY_API_BASE          Chat completions base URL  [default: https://api.openai.com/v1]
  SURVEY_MODEL             Model name  [default: gpt-4o-mini]
  SURVEY_MAX_TOKENS        Completion token limit  [default: 512]
  SURVEY_TIMEOUT_SECS      Request timeout in seconds  [default: 20]
  SURVEY_AUDIENCE          Who the questions are written for
  RUST_LOG                 Log filter  [default: info]
";

const COMMANDS: &str = "\
Commands:
  start N [A, B]    start a game with N teams
  reveal SLOT       reveal answer 1 to 4
  strike | x        wrong guess
  award TEAM        give the round score to team TEAM
  next              next question
  end               end the game
  reset             back to setup after the game
  show              print the board
  dump              print the full state as JSON
  help              this list
  quit              leave
";

struct Args {
    teams: Option<usize>,
    names: Vec<String>,
    offline: bool,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let args = Args {
        teams: pargs.opt_value_from_str("--teams")?,
        names: pargs
            .opt_value_from_str::<_, String>("--names")?
            .map(|raw| split_names(&raw))
            .unwrap_or_default(),
        offline: pargs.contains("--offline"),
    };

    // Catching signals for exit.
    set_handler(|| std::process::exit(0))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let config = if args.offline {
        info!("Offline mode, using the built-in question pool");
        None
    } else {
        GeneratorConfig::from_env().context("Invalid question generator settings")?
    };
    let (actor, handle) = SessionActor::new(Arc::new(QuestionService::from_config(config)));
    let session = tokio::spawn(actor.run());

    println!("{COMMANDS}");
    if let Some(teams) = args.teams {
        run_command(&handle, ConsoleCommand::Start {
            teams,
            names: args.names,
        })
        .await?;
    } else {
        print!("{}", render_board(&handle.state().await?));
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match parse_command(&line) {
            Ok(ConsoleCommand::Quit) => break,
            Ok(command) => run_command(&handle, command).await?,
            Err(e) => println!("{e}"),
        }
    }

    handle.close().await;
    session.await?;
    Ok(())
}

/// Sends one command to the session and prints what happened. Rejected
/// operations are reported and play goes on.
async fn run_command(handle: &SessionHandle, command: ConsoleCommand) -> Result<(), Error> {
    let result = match command {
        ConsoleCommand::Start { teams, names } => handle.start_game(teams, names).await,
        ConsoleCommand::Reveal(slot) => handle.reveal_slot(slot).await,
        ConsoleCommand::Strike => match handle.register_strike().await {
            Ok(flash) => {
                println!("{}", render_flash(&flash));
                let timer = handle.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(STRIKE_FLASH_DURATION).await;
                    let _ = timer.acknowledge_strike(flash.generation).await;
                });
                handle.state().await
            }
            Err(e) => Err(e),
        },
        ConsoleCommand::Award(team_id) => handle.award_points(team_id).await,
        ConsoleCommand::Next => handle.advance_round().await,
        ConsoleCommand::End => handle.end_game().await,
        ConsoleCommand::Reset => handle.full_reset().await,
        ConsoleCommand::Show => handle.state().await,
        ConsoleCommand::Dump => {
            let state = handle.state().await?;
            println!("{}", serde_json::to_string_pretty(&state)?);
            return Ok(());
        }
        ConsoleCommand::Help => {
            println!("{COMMANDS}");
            return Ok(());
        }
        ConsoleCommand::Quit => return Ok(()),
    };

    for event in handle.drain_events().await? {
        println!("* {event}");
    }
    match result {
        Ok(state) => print_state(&state),
        Err(e) => {
            warn!("{e}");
            print_state(&handle.state().await?);
        }
    }
    Ok(())
}

fn print_state(state: &GameState) {
    print!("{}", render_board(state));
    if state.phase() == GamePhase::GameOver {
        print!("{}", render_standings(state));
    }
}
