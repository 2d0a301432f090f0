use std::collections::VecDeque;

use crate::log;
use super::direction_buffer::DirectionBuffer;
use super::grid::Grid;
use super::rng::GameRng;
use super::settings::GameSettings;
use super::types::{Direction, GridCell, Position};

/// Single-player snake state machine.
///
/// Two states: running and game over. Game over is terminal; once reached,
/// `step` no longer mutates the grid, score, or snake body. A finished game
/// is discarded and replaced with a fresh instance.
pub struct GameState {
    grid: Grid,
    body: VecDeque<Position>,
    direction: Direction,
    direction_changes: DirectionBuffer,
    score: u32,
    game_over: bool,
    rng: GameRng,
}

impl GameState {
    pub fn new(rows: usize, columns: usize, rng: GameRng) -> Self {
        debug_assert!(rows > 0 && columns > 3, "grid must fit the initial snake");

        let mut state = Self {
            grid: Grid::new(rows, columns),
            body: VecDeque::new(),
            direction: Direction::Right,
            direction_changes: DirectionBuffer::new(),
            score: 0,
            game_over: false,
            rng,
        };
        state.add_snake();
        state.place_food();
        state
    }

    pub fn from_settings(settings: &GameSettings, rng: GameRng) -> Self {
        Self::new(settings.rows, settings.columns, rng)
    }

    /// Queues a direction change for the next ticks.
    ///
    /// Ignored when the buffer is full, or when `direction` equals or
    /// opposes the last queued direction (the current direction when
    /// nothing is queued). Rejecting the opposite keeps two rapid key
    /// presses within one tick from reversing the snake into its own neck.
    pub fn change_direction(&mut self, direction: Direction) {
        if self.can_change_direction(direction) {
            self.direction_changes.push(direction);
        }
    }

    /// Advances the game by one tick. No-op after game over.
    pub fn step(&mut self) {
        if self.game_over {
            return;
        }

        if let Some(direction) = self.direction_changes.pop_front() {
            self.direction = direction;
        }

        let new_head = self.head_position().translate(self.direction);
        match self.hit_test(new_head) {
            GridCell::Outside | GridCell::Snake => {
                self.game_over = true;
                log!(
                    "Snake died moving into ({}, {}). Final score: {}",
                    new_head.row,
                    new_head.col,
                    self.score
                );
            }
            GridCell::Empty => {
                self.remove_tail();
                self.add_head(new_head);
            }
            GridCell::Food => {
                self.add_head(new_head);
                self.score += 1;
                log!(
                    "Ate food at ({}, {}). Score: {}",
                    new_head.row,
                    new_head.col,
                    self.score
                );
                self.place_food();
            }
        }
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn columns(&self) -> usize {
        self.grid.columns()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn cell(&self, pos: Position) -> GridCell {
        self.grid.get(pos)
    }

    pub fn head_position(&self) -> Position {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail_position(&self) -> Position {
        *self.body.back().expect("Snake body should never be empty")
    }

    /// Snake cells from head to tail.
    pub fn snake_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.body.iter().copied()
    }

    pub fn snake_length(&self) -> usize {
        self.body.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    fn add_snake(&mut self) {
        let middle_row = (self.grid.rows() / 2) as i32;
        for col in 1..=3 {
            let pos = Position::new(middle_row, col);
            self.grid.set(pos, GridCell::Snake);
            self.body.push_front(pos);
        }
    }

    fn add_head(&mut self, pos: Position) {
        self.body.push_front(pos);
        self.grid.set(pos, GridCell::Snake);
    }

    fn remove_tail(&mut self) {
        let tail = self
            .body
            .pop_back()
            .expect("Snake body should never be empty");
        self.grid.set(tail, GridCell::Empty);
    }

    fn can_change_direction(&self, direction: Direction) -> bool {
        if self.direction_changes.is_full() {
            return false;
        }
        let last = self.direction_changes.last().unwrap_or(self.direction);
        direction != last && !direction.is_opposite(&last)
    }

    /// Classifies the cell the head is about to enter.
    ///
    /// The current tail cell counts as empty: the tail vacates it on the
    /// same tick the head arrives, so chasing the tail is always legal.
    fn hit_test(&self, pos: Position) -> GridCell {
        if !self.grid.contains(pos) {
            return GridCell::Outside;
        }
        if pos == self.tail_position() {
            return GridCell::Empty;
        }
        self.grid.get(pos)
    }

    fn place_food(&mut self) {
        let empty = self.grid.empty_positions();
        if empty.is_empty() {
            return;
        }

        let pos = empty[self.rng.random_range(0..empty.len())];
        self.grid.set(pos, GridCell::Food);
        log!("Food spawned at ({}, {})", pos.row, pos.col);
    }

    #[cfg(test)]
    fn find_food(&self) -> Option<Position> {
        for row in 0..self.grid.rows() {
            for col in 0..self.grid.columns() {
                let pos = Position::new(row as i32, col as i32);
                if self.grid.get(pos) == GridCell::Food {
                    return Some(pos);
                }
            }
        }
        None
    }

    #[cfg(test)]
    fn clear_food(&mut self) {
        for row in 0..self.grid.rows() {
            for col in 0..self.grid.columns() {
                let pos = Position::new(row as i32, col as i32);
                if self.grid.get(pos) == GridCell::Food {
                    self.grid.set(pos, GridCell::Empty);
                }
            }
        }
    }

    #[cfg(test)]
    fn set_food(&mut self, pos: Position) {
        self.clear_food();
        self.grid.set(pos, GridCell::Food);
    }
}
