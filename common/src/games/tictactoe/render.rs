use super::board::Board;
use super::types::{Mark, Position};

const ROW_SEPARATOR: &str = "---+---+---";

/// Text board; empty cells show the number accepted by `parse_position`.
pub fn render_board(board: &Board) -> String {
    let lines: Vec<String> = board
        .rows()
        .iter()
        .enumerate()
        .map(|(row, cells)| {
            let rendered: Vec<String> = cells
                .iter()
                .enumerate()
                .map(|(col, &mark)| match mark {
                    Mark::Empty => format!(" {} ", Position::new(row, col).cell_number()),
                    mark => format!(" {} ", mark.symbol()),
                })
                .collect();
            rendered.join("|")
        })
        .collect();

    lines.join(&format!("\n{}\n", ROW_SEPARATOR))
}

/// Accepts a cell number `1`-`9` or a zero-based `row col` / `row,col` pair.
/// Pairs are not range-checked so the engine can report out-of-bounds moves.
pub fn parse_position(input: &str) -> Result<Position, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Enter a cell number (1-9) or \"row col\"".to_string());
    }

    let parts: Vec<&str> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [single] => {
            let number: usize = single
                .parse()
                .map_err(|_| format!("'{}' is not a cell number", single))?;
            Position::from_cell_number(number)
                .ok_or_else(|| format!("Cell number {} must be between 1 and 9", number))
        }
        [row, col] => {
            let row: usize = row
                .parse()
                .map_err(|_| format!("'{}' is not a valid row", row))?;
            let col: usize = col
                .parse()
                .map_err(|_| format!("'{}' is not a valid column", col))?;
            Ok(Position::new(row, col))
        }
        _ => Err(format!("Could not read a position from '{}'", input)),
    }
}
