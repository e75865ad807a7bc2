use std::fmt;

use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use crate::log;
use super::error::MoveError;
use super::game_state::GameEngine;
use super::board::Board;
use super::types::{Mark, Outcome, Position};
use super::win_detector::check_win_with_line;

pub const BOT_MARK: Mark = Mark::X;
pub const HUMAN_MARK: Mark = Mark::O;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstPlayer {
    Human,
    Bot,
    Random,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Human,
    Bot,
}

impl Turn {
    pub fn mark(&self) -> Mark {
        match self {
            Turn::Human => HUMAN_MARK,
            Turn::Bot => BOT_MARK,
        }
    }

    fn other(&self) -> Turn {
        match self {
            Turn::Human => Turn::Bot,
            Turn::Bot => Turn::Human,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayedMove {
    pub turn: Turn,
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    GameOver,
    NotYourTurn,
    Move(MoveError),
}

impl From<MoveError> for SessionError {
    fn from(err: MoveError) -> Self {
        SessionError::Move(err)
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::GameOver => write!(f, "Game is already over"),
            SessionError::NotYourTurn => write!(f, "Not your turn"),
            SessionError::Move(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for SessionError {}

/// One human-vs-bot match. The bot always plays X, the human O.
pub struct MatchSession {
    engine: GameEngine,
    current_turn: Turn,
    history: Vec<PlayedMove>,
}

impl MatchSession {
    pub fn new(first_player: FirstPlayer, rng: &mut SessionRng) -> Self {
        let current_turn = match first_player {
            FirstPlayer::Human => Turn::Human,
            FirstPlayer::Bot => Turn::Bot,
            FirstPlayer::Random => {
                if rng.random_bool() {
                    Turn::Human
                } else {
                    Turn::Bot
                }
            }
        };

        log!(
            "Match started, first move: {:?} (seed {})",
            current_turn,
            rng.seed()
        );

        Self {
            engine: GameEngine::new(),
            current_turn,
            history: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        self.engine.board()
    }

    pub fn outcome(&self) -> Outcome {
        self.engine.outcome()
    }

    pub fn current_turn(&self) -> Turn {
        self.current_turn
    }

    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    pub fn winner_turn(&self) -> Option<Turn> {
        let winner = self.outcome().winner()?;
        if winner == BOT_MARK {
            Some(Turn::Bot)
        } else if winner == HUMAN_MARK {
            Some(Turn::Human)
        } else {
            None
        }
    }

    pub fn play_human(&mut self, position: Position) -> Result<Outcome, SessionError> {
        self.ensure_turn(Turn::Human)?;
        self.apply(Turn::Human, position)
    }

    pub fn play_bot(&mut self) -> Result<PlayedMove, SessionError> {
        self.ensure_turn(Turn::Bot)?;
        let position = self.engine.best_move().ok_or(SessionError::GameOver)?;
        self.apply(Turn::Bot, position)?;
        Ok(PlayedMove {
            turn: Turn::Bot,
            position,
        })
    }

    fn ensure_turn(&self, turn: Turn) -> Result<(), SessionError> {
        if self.outcome().is_terminal() {
            return Err(SessionError::GameOver);
        }
        if self.current_turn != turn {
            return Err(SessionError::NotYourTurn);
        }
        Ok(())
    }

    fn apply(&mut self, turn: Turn, position: Position) -> Result<Outcome, SessionError> {
        let outcome = self.engine.place(position.row, position.col, turn.mark())?;
        self.history.push(PlayedMove { turn, position });
        log!("{:?} placed {} at {}", turn, turn.mark().symbol(), position);

        if outcome.is_terminal() {
            self.log_game_over(outcome);
        } else {
            self.current_turn = turn.other();
        }
        Ok(outcome)
    }

    fn log_game_over(&self, outcome: Outcome) {
        match check_win_with_line(self.engine.board()) {
            Some((_, line)) => log!(
                "Match over after {} moves: {}, line {} - {} - {}",
                self.history.len(),
                outcome,
                line[0],
                line[1],
                line[2]
            ),
            None => log!("Match over after {} moves: {}", self.history.len(), outcome),
        }
    }
}
