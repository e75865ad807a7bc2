use super::board::Board;
use super::types::{Mark, Outcome, Position};
use super::win_detector::{DRAW_SCORE, WIN_SCORE, evaluate_outcome, score};

/// Optimal move for X against an optimal O, or `None` once the game is decided.
///
/// Candidates are tried in row-major order and only a strictly better score
/// replaces the current pick, so ties go to the first empty cell.
pub fn calculate_minimax_move(input: &Board) -> Option<Position> {
    if evaluate_outcome(input) != Outcome::InProgress {
        return None;
    }

    let mut board = *input;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for pos in input.available_moves() {
        board.set(pos, Mark::X);
        let score = minimax(&mut board, 0, false);
        board.set(pos, Mark::Empty);

        if score > best_score {
            best_score = score;
            best_move = Some(pos);
        }
    }

    best_move
}

/// Full-depth search. A line found at depth `d` scores `score - d`, i.e.
/// `10 - d` for an X win and `-10 - d` for an O win; draws score 0 at any
/// depth. Every hypothetical mark is removed before returning.
pub(crate) fn minimax(board: &mut Board, depth: i32, is_maximizing: bool) -> i32 {
    let line_score = score(board);
    if line_score == WIN_SCORE || line_score == -WIN_SCORE {
        return line_score - depth;
    }

    if board.is_full() {
        return DRAW_SCORE;
    }

    let (mark, mut best) = if is_maximizing {
        (Mark::X, i32::MIN)
    } else {
        (Mark::O, i32::MAX)
    };

    for pos in board.available_moves() {
        board.set(pos, mark);
        let eval = minimax(board, depth + 1, !is_maximizing);
        board.set(pos, Mark::Empty);

        best = if is_maximizing {
            best.max(eval)
        } else {
            best.min(eval)
        };
    }

    best
}
