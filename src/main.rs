use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use chess_rules::chess_errors::ChessResult;
use chess_rules::coordinator::game_config::GameConfig;
use chess_rules::coordinator::game_coordinator::{ClickResult, GameCoordinator};
use chess_rules::game_state::chess_rules::STARTING_POSITION;
use chess_rules::utils::algebraic::algebraic_to_square;
use chess_rules::utils::render_game_state::render_game_state;

/// Drive a chess game from stdin, one command per line.
///
/// Commands: click <sq>, select <sq>, moves <sq>, move <from> <to>, board,
/// status, reset, quit.
#[derive(Debug, Parser)]
#[command(name = "chess_rules", version)]
struct Args {
    /// Position string to start from.
    #[arg(long, default_value = STARTING_POSITION)]
    position: String,

    /// Refuse to select pieces that have no legal moves.
    #[arg(long)]
    no_immobile_selection: bool,

    /// Log filter, e.g. "debug" or "chess_rules=trace". Overrides RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,
}

fn main() {
    let args = Args::parse();

    let filter = match &args.log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = GameConfig::default()
        .with_start_position(args.position)
        .with_immobile_selection(!args.no_immobile_selection);

    let mut game = match GameCoordinator::new(config) {
        Ok(game) => game,
        Err(err) => {
            error!(%err, "could not set up the game");
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = run_session(&mut game, stdin.lock(), stdout.lock()) {
        error!(%err, "session ended on an i/o error");
        std::process::exit(1);
    }
}

/// Reads commands until `quit` or end of input, writing one reply per command.
/// Lines that are not valid UTF-8 are reported and skipped.
fn run_session<R: BufRead, W: Write>(
    game: &mut GameCoordinator,
    input: R,
    mut output: W,
) -> io::Result<()> {
    writeln!(output, "{}", game.status())?;

    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                writeln!(output, "error: {err}")?;
                continue;
            }
            Err(err) => return Err(err),
        };
        let words = line.split_whitespace().collect::<Vec<_>>();
        if words.first() == Some(&"quit") {
            break;
        }
        if words.is_empty() {
            continue;
        }

        match run_command(game, &words) {
            Ok(reply) => writeln!(output, "{reply}")?,
            Err(err) => writeln!(output, "error: {err}")?,
        }
        output.flush()?;
    }

    Ok(())
}

fn run_command(game: &mut GameCoordinator, words: &[&str]) -> ChessResult<String> {
    match words {
        ["click", square] => {
            let result = game.attempt_move(algebraic_to_square(square)?)?;
            Ok(describe(game, result))
        }
        ["select", square] => {
            let result = game.select_square(algebraic_to_square(square)?)?;
            Ok(describe(game, result))
        }
        ["moves", square] => {
            let moves = game.legal_moves_at(algebraic_to_square(square)?)?;
            let mut targets = moves.iter().map(|mv| mv.to.to_string()).collect::<Vec<_>>();
            targets.sort();
            Ok(targets.join(" "))
        }
        ["move", from, to] => {
            let mv = game.play_move(algebraic_to_square(from)?, algebraic_to_square(to)?)?;
            Ok(format!("played {mv}\n{}", game.status()))
        }
        ["board"] => Ok(render_game_state(game.state())),
        ["status"] => Ok(game.status().to_string()),
        ["reset"] => {
            game.reset()?;
            Ok(game.status().to_string())
        }
        _ => Ok(format!("unknown command: {}", words.join(" "))),
    }
}

fn describe(game: &GameCoordinator, result: ClickResult) -> String {
    match result {
        ClickResult::Selected { square, moves } => format!("selected {square} ({moves} moves)"),
        ClickResult::Deselected => "selection cleared".to_owned(),
        ClickResult::Moved(mv) => format!("played {mv}\n{}", game.status()),
        ClickResult::Ignored => "ignored".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::run_session;
    use chess_rules::coordinator::game_coordinator::GameCoordinator;
    use chess_rules::coordinator::game_config::GameConfig;

    fn session(input: &[u8]) -> String {
        let mut game = GameCoordinator::new(GameConfig::default()).expect("default game starts");
        let mut output = Vec::new();
        run_session(&mut game, input, &mut output).expect("session runs");
        String::from_utf8(output).expect("replies are text")
    }

    #[test]
    fn commands_get_one_reply_each() {
        let text = session(b"move e2 e4\nstatus\nbogus\nquit\nstatus\n");
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "White to move.");
        assert_eq!(lines[1], "played e2e4");
        assert_eq!(lines[2], "Black to move.");
        assert_eq!(lines[3], "Black to move.");
        assert_eq!(lines[4], "unknown command: bogus");
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn invalid_utf8_line_is_reported_and_skipped() {
        let text = session(b"\xff\xfe\nmoves e2\n");
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("error: "));
        assert_eq!(lines[2], "e3 e4");
    }

    #[test]
    fn bad_square_is_an_error_reply() {
        let text = session(b"click z9\n");
        assert!(text.lines().nth(1).is_some_and(|line| line.starts_with("error: ")));
    }
}
