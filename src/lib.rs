pub mod game;
pub mod logger;

pub use game::{Direction, DirectionBuffer, GameRng, GameSettings, GameState, Grid, GridCell, Position};
