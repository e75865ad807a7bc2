use super::types::{BOARD_SIZE, Mark, Position};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pos: Position) -> Option<Mark> {
        self.cells.get(pos.row)?.get(pos.col).copied()
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn marked_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_player())
            .count()
    }

    /// Empty cells in row-major order.
    pub fn available_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Mark::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    // Unchecked write; callers validate bounds and occupancy first.
    pub(crate) fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.row][pos.col] = mark;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.marked_count(), 0);
        assert!(!board.is_full());
        assert_eq!(board.available_moves().len(), 9);
    }

    #[test]
    fn test_available_moves_are_row_major() {
        let mut board = Board::new();
        board.set(Position::new(0, 0), Mark::X);
        board.set(Position::new(1, 1), Mark::O);

        let moves = board.available_moves();
        assert_eq!(moves.first(), Some(&Position::new(0, 1)));
        assert_eq!(moves.last(), Some(&Position::new(2, 2)));
        assert!(!moves.contains(&Position::new(1, 1)));
        assert_eq!(moves.len(), 7);
    }

    #[test]
    fn test_get_outside_board_returns_none() {
        let board = Board::new();
        assert_eq!(board.get(Position::new(3, 0)), None);
        assert_eq!(board.get(Position::new(0, 3)), None);
        assert_eq!(board.get(Position::new(2, 2)), Some(Mark::Empty));
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new();
        for row in 0..3 {
            for col in 0..3 {
                let mark = if (row + col) % 2 == 0 { Mark::X } else { Mark::O };
                board.set(Position::new(row, col), mark);
            }
        }
        assert!(board.is_full());
        assert!(board.available_moves().is_empty());
    }
}
