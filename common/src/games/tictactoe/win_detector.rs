use super::board::Board;
use super::types::{Mark, Outcome, Position};

pub type Line = [Position; 3];

const fn pos(row: usize, col: usize) -> Position {
    Position { row, col }
}

/// Scan order: rows, columns, main diagonal, anti-diagonal.
pub const LINES: [Line; 8] = [
    [pos(0, 0), pos(0, 1), pos(0, 2)],
    [pos(1, 0), pos(1, 1), pos(1, 2)],
    [pos(2, 0), pos(2, 1), pos(2, 2)],
    [pos(0, 0), pos(1, 0), pos(2, 0)],
    [pos(0, 1), pos(1, 1), pos(2, 1)],
    [pos(0, 2), pos(1, 2), pos(2, 2)],
    [pos(0, 0), pos(1, 1), pos(2, 2)],
    [pos(0, 2), pos(1, 1), pos(2, 0)],
];

/// Score of a board holding a win for X. Sign flips for O.
pub const WIN_SCORE: i32 = 10;
pub const DRAW_SCORE: i32 = 0;

pub fn check_win_with_line(board: &Board) -> Option<(Mark, Line)> {
    for line in LINES {
        let first = board.get(line[0]).unwrap_or(Mark::Empty);
        if first == Mark::Empty {
            continue;
        }
        if line[1..].iter().all(|&p| board.get(p) == Some(first)) {
            return Some((first, line));
        }
    }
    None
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|(mark, _)| mark)
}

pub fn evaluate_outcome(board: &Board) -> Outcome {
    if let Some(winner) = check_win(board) {
        return Outcome::Won(winner);
    }
    if board.is_full() {
        Outcome::Drawn
    } else {
        Outcome::InProgress
    }
}

/// +10 when X owns a line, -10 when O does, 0 otherwise (draw or unfinished).
pub fn score(board: &Board) -> i32 {
    match check_win(board) {
        Some(Mark::X) => WIN_SCORE,
        Some(Mark::O) => -WIN_SCORE,
        _ => DRAW_SCORE,
    }
}
