use log::{trace, warn};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::position::{Grid, Position};
use crate::snake::Snake;

/// Random draws to try before scanning the board for free cells.
const MAX_SAMPLING_ATTEMPTS: usize = 64;

/// Picks a uniformly random cell not covered by the snake.
///
/// Samples the whole board first, which is quick while the snake is short. If
/// that keeps hitting the body, the free cells are collected and one of them is
/// chosen. Returns `None` only when the snake covers every cell.
pub fn place<R: Rng + ?Sized>(snake: &Snake, grid: &Grid, rng: &mut R) -> Option<Position> {
    for _ in 0..MAX_SAMPLING_ATTEMPTS {
        let candidate = Position::new(
            rng.gen_range(1..=i32::from(grid.width())),
            rng.gen_range(1..=i32::from(grid.height())),
        );
        if !snake.occupies(candidate, false) {
            return Some(candidate);
        }
    }

    trace!("Random sampling kept hitting the snake, scanning free cells");
    let free: Vec<Position> = grid.cells().filter(|cell| !snake.occupies(*cell, false)).collect();
    let res = free.choose(rng).copied();
    if res.is_none() {
        warn!("No free cell left for food");
    }
    res
}

/// Whether any segment of the snake sits on the food.
pub fn is_eaten(snake: &Snake, food: Position) -> bool {
    snake.occupies(food, false)
}
