use super::error::ConfigError;
use super::state::Cell;

/// Smallest playable board side, in cells
pub const MIN_SIDE: i32 = 3;

/// Geometry of the wrap-around playing field.
///
/// The board never changes after construction; every coordinate that leaves
/// it re-enters on the opposite edge (see [`Board::wrap`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    cell_size: u32,
}

impl Board {
    /// Create a board measured in cells
    pub fn new(width: i32, height: i32, cell_size: u32) -> Result<Self, ConfigError> {
        if cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if width < MIN_SIDE || height < MIN_SIDE {
            return Err(ConfigError::BoardTooSmall { width, height });
        }

        Ok(Self {
            width,
            height,
            cell_size,
        })
    }

    /// Derive the grid from a screen size in pixels; partial cells are dropped
    pub fn from_screen(
        screen_width: u32,
        screen_height: u32,
        cell_size: u32,
    ) -> Result<Self, ConfigError> {
        if cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        let width = i32::try_from(screen_width / cell_size).unwrap_or(i32::MAX);
        let height = i32::try_from(screen_height / cell_size).unwrap_or(i32::MAX);
        Self::new(width, height, cell_size)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Number of cells on the board
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Map any coordinate pair onto the board.
    ///
    /// Uses `rem_euclid`, so negative inputs wrap to the far edge instead of
    /// producing a negative remainder.
    pub fn wrap(&self, x: i32, y: i32) -> Cell {
        Cell::new(x.rem_euclid(self.width), y.rem_euclid(self.height))
    }

    /// Cell the snake starts from
    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// All cells, row by row
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }
}
