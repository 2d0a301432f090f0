mod direction_buffer;
mod game_state;
mod grid;
mod rng;
mod settings;
mod types;

pub use direction_buffer::DirectionBuffer;
pub use game_state::GameState;
pub use grid::Grid;
pub use rng::GameRng;
pub use settings::GameSettings;
pub use types::{Direction, GridCell, Position};
