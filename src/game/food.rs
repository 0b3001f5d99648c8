use rand::Rng;

use super::board::Board;
use super::state::Cell;

/// The single food item on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    pub position: Cell,
}

impl Food {
    pub fn new(position: Cell) -> Self {
        Self { position }
    }

    /// Create food at a random cell not in `forbidden`
    pub fn random<R: Rng + ?Sized>(board: &Board, forbidden: &[Cell], rng: &mut R) -> Self {
        let mut food = Self::new(board.center());
        food.randomize_position(board, forbidden, rng);
        food
    }

    /// Move to a uniformly random cell outside `forbidden`.
    ///
    /// Draws until a free cell comes up. Returns false and leaves the food
    /// where it is when `forbidden` already covers every cell.
    pub fn randomize_position<R: Rng + ?Sized>(
        &mut self,
        board: &Board,
        forbidden: &[Cell],
        rng: &mut R,
    ) -> bool {
        if !has_free_cell(board, forbidden) {
            return false;
        }

        loop {
            let x = rng.gen_range(0..board.width());
            let y = rng.gen_range(0..board.height());
            let cell = Cell::new(x, y);

            if !forbidden.contains(&cell) {
                self.position = cell;
                return true;
            }
        }
    }
}

fn has_free_cell(board: &Board, forbidden: &[Cell]) -> bool {
    // Cheap path: fewer forbidden cells than the board has
    if forbidden.len() < board.area() {
        return true;
    }
    board.cells().any(|cell| !forbidden.contains(&cell))
}
