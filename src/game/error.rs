use thiserror::Error;

/// Reasons a game configuration is refused at startup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board is {width}x{height} cells, at least 3x3 is required")]
    BoardTooSmall { width: i32, height: i32 },

    #[error("cell size must be greater than zero")]
    ZeroCellSize,

    #[error("tick rate must be greater than zero")]
    ZeroTickRate,
}
