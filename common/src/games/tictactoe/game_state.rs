use super::board::Board;
use super::bot_controller::calculate_minimax_move;
use super::error::MoveError;
use super::types::{BOARD_SIZE, Mark, Outcome, Position};
use super::win_detector::evaluate_outcome;

/// A single 3x3 game. `place` is the only way to change the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
}

impl GameEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Writes `player` at (`row`, `col`) and returns the fresh outcome.
    /// On error the board is left untouched.
    pub fn place(&mut self, row: usize, col: usize, player: Mark) -> Result<Outcome, MoveError> {
        if !player.is_player() {
            return Err(MoveError::InvalidPlayer);
        }

        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(MoveError::OutOfBounds { row, col });
        }

        let pos = Position::new(row, col);
        if self.board.get(pos) != Some(Mark::Empty) {
            return Err(MoveError::CellOccupied { row, col });
        }

        self.board.set(pos, player);
        Ok(self.outcome())
    }

    pub fn outcome(&self) -> Outcome {
        evaluate_outcome(&self.board)
    }

    /// Best reply for X, `None` if the game is already won or drawn.
    pub fn best_move(&self) -> Option<Position> {
        calculate_minimax_move(&self.board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_from_rows(rows: [&str; 3]) -> GameEngine {
        let mut engine = GameEngine::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let mark = match ch {
                    'X' => Mark::X,
                    'O' => Mark::O,
                    _ => continue,
                };
                engine.place(row, col, mark).unwrap();
            }
        }
        engine
    }

    #[test]
    fn test_new_engine_is_in_progress() {
        let engine = GameEngine::new();
        assert_eq!(engine.outcome(), Outcome::InProgress);
        assert_eq!(engine.board(), &Board::new());
    }

    #[test]
    fn test_place_returns_outcome() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.place(0, 0, Mark::X), Ok(Outcome::InProgress));
        assert_eq!(engine.place(1, 0, Mark::O), Ok(Outcome::InProgress));
        assert_eq!(engine.place(0, 1, Mark::X), Ok(Outcome::InProgress));
        assert_eq!(engine.place(1, 1, Mark::O), Ok(Outcome::InProgress));
        assert_eq!(engine.place(0, 2, Mark::X), Ok(Outcome::Won(Mark::X)));
    }

    #[test]
    fn test_place_on_occupied_cell_fails_and_keeps_board() {
        for first in [Mark::X, Mark::O] {
            for second in [Mark::X, Mark::O] {
                let mut engine = GameEngine::new();
                engine.place(1, 2, first).unwrap();
                let before = *engine.board();

                assert_eq!(
                    engine.place(1, 2, second),
                    Err(MoveError::CellOccupied { row: 1, col: 2 })
                );
                assert_eq!(engine.board(), &before);
            }
        }
    }

    #[test]
    fn test_place_out_of_bounds_fails() {
        let mut engine = GameEngine::new();
        for player in [Mark::X, Mark::O] {
            for (row, col) in [(3, 0), (0, 3), (3, 3), (usize::MAX, 1), (1, 10)] {
                assert_eq!(
                    engine.place(row, col, player),
                    Err(MoveError::OutOfBounds { row, col })
                );
            }
        }
        assert_eq!(engine.board().marked_count(), 0);
    }

    #[test]
    fn test_place_empty_mark_is_invalid_player() {
        let mut engine = GameEngine::new();
        assert_eq!(engine.place(0, 0, Mark::Empty), Err(MoveError::InvalidPlayer));
        // Player is checked before bounds.
        assert_eq!(engine.place(5, 5, Mark::Empty), Err(MoveError::InvalidPlayer));
        assert_eq!(engine.board().marked_count(), 0);
    }

    #[test]
    fn test_terminal_outcomes() {
        assert_eq!(
            engine_from_rows(["XXX", "OO_", "___"]).outcome(),
            Outcome::Won(Mark::X)
        );
        assert_eq!(engine_from_rows(["XOX", "XOX", "OXO"]).outcome(), Outcome::Drawn);
        assert_eq!(
            engine_from_rows(["X__", "_O_", "___"]).outcome(),
            Outcome::InProgress
        );
    }

    #[test]
    fn test_best_move_on_empty_board_is_first_cell() {
        let engine = GameEngine::new();
        assert_eq!(engine.best_move(), Some(Position::new(0, 0)));
    }

    #[test]
    fn test_best_move_takes_quickest_win() {
        let engine = engine_from_rows(["X_O", "XO_", "___"]);
        assert_eq!(engine.best_move(), Some(Position::new(2, 0)));
    }

    #[test]
    fn test_best_move_leaves_board_unchanged() {
        for rows in [
            ["___", "___", "___"],
            ["X__", "_O_", "___"],
            ["X_O", "XO_", "___"],
            ["XO_", "_X_", "O__"],
        ] {
            let engine = engine_from_rows(rows);
            let before = engine.clone();
            engine.best_move();
            assert_eq!(engine, before);
        }
    }

    #[test]
    fn test_best_move_on_finished_game_is_none() {
        assert_eq!(engine_from_rows(["XXX", "OO_", "___"]).best_move(), None);
        assert_eq!(engine_from_rows(["XOX", "XOX", "OXO"]).best_move(), None);
    }

    fn assert_x_never_loses(engine: &GameEngine, x_to_move: bool) {
        match engine.outcome() {
            Outcome::Won(winner) => {
                assert_eq!(winner, Mark::X, "O won on board {:?}", engine.board());
                return;
            }
            Outcome::Drawn => return,
            Outcome::InProgress => {}
        }

        if x_to_move {
            let pos = engine.best_move().unwrap();
            let mut next = engine.clone();
            next.place(pos.row, pos.col, Mark::X).unwrap();
            assert_x_never_loses(&next, false);
        } else {
            for pos in engine.board().available_moves() {
                let mut next = engine.clone();
                next.place(pos.row, pos.col, Mark::O).unwrap();
                assert_x_never_loses(&next, true);
            }
        }
    }

    #[test]
    fn test_x_never_loses_when_moving_first() {
        assert_x_never_loses(&GameEngine::new(), true);
    }

    #[test]
    fn test_x_never_loses_when_moving_second() {
        assert_x_never_loses(&GameEngine::new(), false);
    }
}
