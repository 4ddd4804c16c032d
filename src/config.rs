use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::error::{Result, SnakeError};
use crate::position::{Grid, Position};

/// Widest board whose two-column cells and borders still fit in a terminal coordinate.
pub const MAX_WIDTH: u16 = (u16::MAX - 2) / 2;
/// Tallest board leaving room for the borders and the status line.
pub const MAX_HEIGHT: u16 = u16::MAX - 3;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Variant {
    /// Fixed speed, no score
    Classic,
    /// Score and levels, speeding up as you go
    Scored,
}

#[derive(Parser, Debug)]
#[command(name = "gridsnake", about = "Snake on a fixed grid, in your terminal")]
pub struct Args {
    #[arg(long, value_enum, default_value_t = Variant::Classic)]
    pub variant: Variant,

    #[arg(long, default_value_t = 21)]
    pub width: u16,

    #[arg(long, default_value_t = 21)]
    pub height: u16,

    /// Starting column of the snake (defaults to the middle)
    #[arg(long)]
    pub start_x: Option<i32>,

    /// Starting row of the snake (defaults to the middle)
    #[arg(long)]
    pub start_y: Option<i32>,

    /// Steps per second in the classic variant
    #[arg(long, default_value_t = 5)]
    pub speed: u32,

    /// Segments gained per food
    #[arg(long, default_value_t = 5)]
    pub growth: u32,

    /// Seed for food placement
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs here (filter with RUST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub variant: Variant,
    pub grid: Grid,
    pub start: Position,
    pub classic_speed: u32,
    pub growth: u32,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        let grid = Grid::new(21, 21);
        GameConfig {
            variant: Variant::Classic,
            grid,
            start: grid.center(),
            classic_speed: 5,
            growth: 5,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn scored() -> Self {
        GameConfig { variant: Variant::Scored, ..Default::default() }
    }

    pub fn from_args(args: &Args) -> Result<Self> {
        if args.width == 0 || args.height == 0 {
            return Err(SnakeError::InvalidConfig(format!(
                "board must be at least 1x1, got {}x{}",
                args.width, args.height
            )));
        }
        if args.width > MAX_WIDTH || args.height > MAX_HEIGHT {
            return Err(SnakeError::InvalidConfig(format!(
                "board must be at most {}x{}, got {}x{}",
                MAX_WIDTH, MAX_HEIGHT, args.width, args.height
            )));
        }
        if args.speed == 0 {
            return Err(SnakeError::InvalidConfig("speed must be at least 1".into()));
        }

        let grid = Grid::new(args.width, args.height);
        if args.growth as usize > grid.cell_count() {
            return Err(SnakeError::InvalidConfig(format!(
                "growth {} is more than the {} cells on the board",
                args.growth,
                grid.cell_count()
            )));
        }
        let center = grid.center();
        let start = Position::new(args.start_x.unwrap_or(center.x), args.start_y.unwrap_or(center.y));
        if !grid.contains(start) {
            return Err(SnakeError::InvalidConfig(format!(
                "start ({}, {}) is outside the {}x{} board",
                start.x, start.y, args.width, args.height
            )));
        }

        Ok(GameConfig {
            variant: args.variant,
            grid,
            start,
            classic_speed: args.speed,
            growth: args.growth,
            seed: args.seed,
        })
    }
}
