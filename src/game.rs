use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::collision;
use crate::config::{GameConfig, Variant};
use crate::direction::Direction;
use crate::food;
use crate::input::InputController;
use crate::position::{Grid, Position};
use crate::scoring::Scoreboard;
use crate::snake::Snake;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Hit a wall or its own body
    Crashed,
    /// No free cell left for food
    BoardFilled,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver(Outcome),
}

/// What happened during one step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    pub ate_food: bool,
    pub level_up: Option<u32>,
}

/// Score and level, already formatted for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreLine {
    pub score: String,
    pub level: String,
}

/// Everything a frontend needs to draw the board.
#[derive(Clone, Debug)]
pub struct RenderModel<'a> {
    pub grid: Grid,
    pub segments: &'a [Position],
    pub food: Option<Position>,
    pub heading: Option<Direction>,
    pub scores: Option<ScoreLine>,
}

/// One game from start to game over. Restarting means building a new one.
pub struct GameSession {
    config: GameConfig,
    snake: Snake,
    food: Option<Position>,
    input: InputController,
    scoreboard: Option<Scoreboard>,
    phase: Phase,
    rng: StdRng,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let snake = Snake::new(config.start);
        Self::with_layout(config, snake, None, rng)
    }

    /// Starts from a given snake and food. Food is placed at random when `None`.
    pub fn with_layout(config: GameConfig, snake: Snake, initial_food: Option<Position>, mut rng: StdRng) -> Self {
        let food = initial_food.or_else(|| food::place(&snake, &config.grid, &mut rng));
        let phase = if food.is_some() { Phase::Running } else { Phase::GameOver(Outcome::BoardFilled) };
        let scoreboard = match config.variant {
            Variant::Classic => None,
            Variant::Scored => Some(Scoreboard::new()),
        };

        info!(
            "New {:?} game on a {}x{} board, snake at ({}, {})",
            config.variant,
            config.grid.width(),
            config.grid.height(),
            snake.head().x,
            snake.head().y
        );

        GameSession { config, snake, food, input: InputController::new(), scoreboard, phase, rng }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Option<Position> {
        self.food
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    pub fn scoreboard(&self) -> Option<&Scoreboard> {
        self.scoreboard.as_ref()
    }

    pub fn input_mut(&mut self) -> &mut InputController {
        &mut self.input
    }

    /// Steps per second. Changes with the level in the scored variant.
    pub fn speed(&self) -> u32 {
        match &self.scoreboard {
            Some(board) => board.speed(),
            None => self.config.classic_speed,
        }
    }

    /// Runs one step: move (paying any owed growth), eat, check for the end.
    /// Does nothing once the game is over.
    pub fn update(&mut self) -> StepReport {
        let mut report = StepReport::default();
        if self.is_over() {
            return report;
        }

        let direction = self.input.consume_direction();
        self.snake.advance(direction);

        if let Some(food_pos) = self.food {
            if food::is_eaten(&self.snake, food_pos) {
                report.ate_food = true;
                self.snake.grow(self.config.growth);
                if let Some(board) = self.scoreboard.as_mut() {
                    report.level_up = board.food_eaten();
                    debug!("Food eaten at ({}, {}), score {}", food_pos.x, food_pos.y, board.score());
                } else {
                    debug!("Food eaten at ({}, {})", food_pos.x, food_pos.y);
                }

                self.food = food::place(&self.snake, &self.config.grid, &mut self.rng);
                if self.food.is_none() {
                    self.phase = Phase::GameOver(Outcome::BoardFilled);
                }
            }
        }

        if collision::is_game_over(&self.snake, &self.config.grid) {
            self.phase = Phase::GameOver(Outcome::Crashed);
        }

        if let Phase::GameOver(outcome) = self.phase {
            info!("Game over ({:?}) with length {}", outcome, self.snake.len());
        }

        report
    }

    #[cfg(test)]
    pub(crate) fn put_food(&mut self, pos: Position) {
        self.food = Some(pos);
    }

    pub fn render_model(&self) -> RenderModel<'_> {
        RenderModel {
            grid: self.config.grid,
            segments: self.snake.body(),
            food: self.food,
            heading: self.input.committed(),
            scores: self.scoreboard.as_ref().map(|board| ScoreLine {
                score: board.score_text(),
                level: board.level_text(),
            }),
        }
    }
}
