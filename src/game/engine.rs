use log::{debug, info, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::{
    board::Board,
    config::GameConfig,
    direction::Direction,
    error::ConfigError,
    food::Food,
    state::{Cell, Snake},
};

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// The head landed on the food
    pub ate_food: bool,
    /// The head ran into the body and the snake was reset
    pub collided: bool,
    /// The snake covered the whole board and was reset
    pub filled_board: bool,
    /// Snake length before any reset this tick
    pub length: usize,
}

/// Drives the simulation one tick at a time.
///
/// Owns the snake and the food; the board is fixed at construction. The
/// harness reads [`GameEngine::snake`] and [`GameEngine::food`] after each
/// [`GameEngine::tick`] to draw them.
pub struct GameEngine<R = StdRng> {
    board: Board,
    snake: Snake,
    food: Food,
    rng: R,
    ticks: u64,
}

impl GameEngine<StdRng> {
    /// Create an engine, seeding food placement from `config.seed` if set
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> GameEngine<R> {
    /// Create an engine with a caller-supplied random source.
    ///
    /// Fails if the configured board is too small to play on.
    pub fn with_rng(config: &GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        let board = config.validate()?;
        let snake = Snake::new(&board);
        let food = Food::random(&board, snake.body(), &mut rng);

        info!(
            "Starting game on a {}x{} board, food at ({}, {})",
            board.width(),
            board.height(),
            food.position.x,
            food.position.y
        );

        Ok(Self {
            board,
            snake,
            food,
            rng,
            ticks: 0,
        })
    }

    /// Run one simulation step.
    ///
    /// `turns` are the direction requests received since the previous tick,
    /// oldest first. Only the last legal one takes effect.
    pub fn tick<I>(&mut self, turns: I) -> TickOutcome
    where
        I: IntoIterator<Item = Direction>,
    {
        for direction in turns {
            self.snake.set_pending_heading(direction);
        }
        self.snake.apply_pending_heading();
        self.snake.move_forward(&self.board);
        self.ticks += 1;

        let ate_food = self.snake.head_position() == self.food.position;
        let mut filled_board = false;
        if ate_food {
            self.snake.grow();
            debug!(
                "Food eaten at ({}, {}), length now {}",
                self.food.position.x,
                self.food.position.y,
                self.snake.len()
            );
            filled_board = !self.relocate_food();
        }

        let length = self.snake.len();
        let collided = self.snake.collides_with_self();
        if collided {
            info!("Snake ran into itself at length {length}, resetting");
            self.snake.reset();
            // Food stays put unless the fresh snake sits on it
            if self.snake.occupies(self.food.position) {
                self.relocate_food();
            }
        } else if filled_board {
            warn!("Snake covers the whole board at length {length}, resetting");
            self.snake.reset();
            self.relocate_food();
        }

        TickOutcome {
            ate_food,
            collided,
            filled_board,
            length,
        }
    }

    /// Start over: fresh snake and newly placed food
    pub fn restart(&mut self) {
        self.snake.reset();
        self.relocate_food();
        info!("Game restarted");
    }

    /// Put the food on a specific cell, wrapped onto the board
    pub fn place_food(&mut self, cell: Cell) {
        self.food.position = self.board.wrap(cell.x, cell.y);
    }

    /// Replace the snake, e.g. to set up a position
    pub fn set_snake(&mut self, snake: Snake) {
        self.snake = snake;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    /// Ticks run since the engine was created
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Move the food off the snake; false if the snake leaves no free cell
    fn relocate_food(&mut self) -> bool {
        let placed = self
            .food
            .randomize_position(&self.board, self.snake.body(), &mut self.rng);
        if placed {
            debug!(
                "Food placed at ({}, {})",
                self.food.position.x, self.food.position.y
            );
        }
        placed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> GameEngine {
        let config = GameConfig {
            seed: Some(11),
            ..GameConfig::small()
        };
        GameEngine::new(&config).unwrap()
    }

    #[test]
    fn test_new_engine() {
        let engine = engine();
        assert_eq!(engine.snake().body(), &[Cell::new(5, 5)]);
        assert_eq!(engine.snake().heading(), Direction::Right);
        assert_ne!(engine.food().position, Cell::new(5, 5));
        assert!(engine.board().contains(engine.food().position));
        assert_eq!(engine.ticks(), 0);
    }

    #[test]
    fn test_rejects_tiny_board() {
        let result = GameEngine::new(&GameConfig::new(2, 8));
        assert!(matches!(result, Err(ConfigError::BoardTooSmall { .. })));
    }

    #[test]
    fn test_basic_movement() {
        let mut engine = engine();
        engine.place_food(Cell::new(0, 0));

        let outcome = engine.tick([]);

        assert!(!outcome.ate_food);
        assert!(!outcome.collided);
        assert_eq!(engine.snake().body(), &[Cell::new(6, 5)]);
        assert_eq!(engine.snake().last_removed_cell(), Some(Cell::new(5, 5)));
        assert_eq!(engine.ticks(), 1);
    }

    #[test]
    fn test_food_consumption() {
        let mut engine = engine();
        engine.place_food(Cell::new(6, 5));

        let outcome = engine.tick([]);

        assert!(outcome.ate_food);
        assert_eq!(outcome.length, 2);
        assert_eq!(
            engine.snake().body(),
            &[Cell::new(6, 5), Cell::new(5, 5)]
        );
        assert_eq!(engine.snake().last_removed_cell(), None);
        assert!(!engine.snake().occupies(engine.food().position));
    }

    #[test]
    fn test_turn_applied_before_move() {
        let mut engine = engine();
        engine.place_food(Cell::new(0, 0));

        engine.tick([Direction::Up]);
        assert_eq!(engine.snake().head_position(), Cell::new(5, 4));
        assert_eq!(engine.snake().heading(), Direction::Up);
        assert_eq!(engine.snake().pending_heading(), None);
    }

    #[test]
    fn test_prevent_180_degree_turn() {
        let mut engine = engine();
        engine.place_food(Cell::new(0, 0));

        engine.tick([Direction::Left]);

        assert_eq!(engine.snake().heading(), Direction::Right);
        assert_eq!(engine.snake().head_position(), Cell::new(6, 5));
    }

    #[test]
    fn test_last_turn_in_tick_wins() {
        let mut engine = engine();
        engine.place_food(Cell::new(0, 0));

        engine.tick([Direction::Up, Direction::Down]);
        assert_eq!(engine.snake().head_position(), Cell::new(5, 6));
    }

    #[test]
    fn test_self_collision_resets_snake() {
        let mut engine = engine();
        engine.place_food(Cell::new(0, 0));

        // Hook whose next step up lands on (5,4)
        engine.set_snake(Snake::from_body(
            engine.board(),
            vec![
                Cell::new(5, 5),
                Cell::new(6, 5),
                Cell::new(6, 4),
                Cell::new(5, 4),
                Cell::new(4, 4),
            ],
            Direction::Left,
        ));

        let outcome = engine.tick([Direction::Up]);

        assert!(outcome.collided);
        assert_eq!(outcome.length, 5);
        assert_eq!(engine.snake().len(), 1);
        assert_eq!(engine.snake().heading(), Direction::Right);
        assert_eq!(engine.food().position, Cell::new(0, 0));
    }

    #[test]
    fn test_collision_reset_onto_food_moves_it() {
        let mut engine = engine();
        engine.set_snake(Snake::from_body(
            engine.board(),
            vec![
                Cell::new(2, 2),
                Cell::new(3, 2),
                Cell::new(3, 1),
                Cell::new(2, 1),
                Cell::new(1, 1),
            ],
            Direction::Left,
        ));
        engine.place_food(Cell::new(5, 5));

        let outcome = engine.tick([Direction::Up]);

        assert!(outcome.collided);
        assert_eq!(engine.snake().body(), &[Cell::new(5, 5)]);
        assert_ne!(engine.food().position, Cell::new(5, 5));
    }

    #[test]
    fn test_restart_moves_food_off_snake() {
        let mut engine = engine();
        engine.place_food(Cell::new(5, 5));

        engine.restart();

        assert_eq!(engine.snake().body(), &[Cell::new(5, 5)]);
        assert_ne!(engine.food().position, Cell::new(5, 5));
    }

    #[test]
    fn test_filling_the_board_resets() {
        let mut engine = GameEngine::with_rng(&GameConfig::new(3, 3), StdRng::seed_from_u64(5))
            .unwrap();

        // Serpentine covering every cell but (0,2), heading down into it
        engine.set_snake(Snake::from_body(
            engine.board(),
            vec![
                Cell::new(0, 1),
                Cell::new(0, 0),
                Cell::new(1, 0),
                Cell::new(2, 0),
                Cell::new(2, 1),
                Cell::new(1, 1),
                Cell::new(1, 2),
                Cell::new(2, 2),
            ],
            Direction::Down,
        ));
        engine.place_food(Cell::new(0, 2));

        let outcome = engine.tick([]);

        assert!(outcome.ate_food);
        assert!(outcome.filled_board);
        assert!(!outcome.collided);
        assert_eq!(outcome.length, 9);
        assert_eq!(engine.snake().body(), &[Cell::new(1, 1)]);
        assert_ne!(engine.food().position, Cell::new(1, 1));
    }
}
