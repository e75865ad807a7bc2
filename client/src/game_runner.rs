use std::io::{self, BufRead, Write};

use tictactoe_common::games::tictactoe::{
    MatchSession, Outcome, Turn, parse_position, render_board,
};
use tictactoe_common::log;

const QUIT_COMMANDS: [&str; 2] = ["quit", "exit"];

pub struct RunnerOptions {
    pub show_history: bool,
}

/// Plays `session` to the end, reading human moves from `input`.
/// Returns `None` when the player quits or input runs out.
pub fn run_match<R: BufRead, W: Write>(
    session: &mut MatchSession,
    input: &mut R,
    output: &mut W,
    options: &RunnerOptions,
) -> io::Result<Option<Outcome>> {
    writeln!(output, "You are O, the bot is X.")?;

    while !session.outcome().is_terminal() {
        match session.current_turn() {
            Turn::Bot => match session.play_bot() {
                Ok(played) => {
                    writeln!(output, "Bot plays cell {}", played.position.cell_number())?;
                }
                Err(err) => {
                    log!("Bot could not move: {}", err);
                    break;
                }
            },
            Turn::Human => {
                writeln!(output, "{}", render_board(session.board()))?;
                write!(output, "Your move (1-9 or \"row col\"): ")?;
                output.flush()?;

                let mut line = String::new();
                if input.read_line(&mut line)? == 0 {
                    return Ok(None);
                }
                let line = line.trim();
                if QUIT_COMMANDS.contains(&line.to_ascii_lowercase().as_str()) {
                    log!("Player left the match");
                    return Ok(None);
                }

                let result = parse_position(line)
                    .and_then(|pos| session.play_human(pos).map_err(|e| e.to_string()));
                if let Err(message) = result {
                    writeln!(output, "{}", message)?;
                }
            }
        }
    }

    let outcome = session.outcome();
    writeln!(output, "{}", render_board(session.board()))?;
    let verdict = match session.winner_turn() {
        Some(Turn::Bot) => "The bot wins.".to_string(),
        Some(Turn::Human) => "You win!".to_string(),
        None => format!("{}.", outcome),
    };
    writeln!(output, "{}", verdict)?;

    if options.show_history {
        let moves: Vec<String> = session
            .history()
            .iter()
            .map(|m| format!("{}{}", m.turn.mark().symbol(), m.position.cell_number()))
            .collect();
        writeln!(output, "Moves: {}", moves.join(" "))?;
    }

    Ok(Some(outcome))
}
