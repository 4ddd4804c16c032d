//! End-of-game checks, run after the move has been applied.

use crate::position::{Grid, Position};
use crate::snake::Snake;

pub fn out_of_bounds(pos: Position, grid: &Grid) -> bool {
    !grid.contains(pos)
}

/// The head sits on some other segment.
pub fn self_intersects(snake: &Snake) -> bool {
    snake.occupies(snake.head(), true)
}

pub fn is_game_over(snake: &Snake, grid: &Grid) -> bool {
    out_of_bounds(snake.head(), grid) || self_intersects(snake)
}
