mod board;
mod bot_controller;
mod error;
mod game_state;
mod render;
mod session;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::calculate_minimax_move;
pub use error::MoveError;
pub use game_state::GameEngine;
pub use render::{parse_position, render_board};
pub use session::{BOT_MARK, FirstPlayer, HUMAN_MARK, MatchSession, PlayedMove, SessionError, Turn};
pub use types::{BOARD_SIZE, Mark, Outcome, Position};
pub use win_detector::{DRAW_SCORE, LINES, Line, WIN_SCORE, check_win, check_win_with_line, evaluate_outcome, score};
