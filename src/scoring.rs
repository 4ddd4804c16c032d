use log::info;

/// Points for each food eaten.
pub const FOOD_POINTS: u32 = 100;

pub const BASE_LEVEL: u32 = 1;
pub const BASE_SPEED: u32 = 2;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LevelStep {
    pub min_score: u32,
    pub level: u32,
    pub speed: u32,
}

/// Score needed for each level, with the speed (steps per second) it brings.
pub const LEVELS: [LevelStep; 4] = [
    LevelStep { min_score: 800, level: 2, speed: 4 },
    LevelStep { min_score: 1500, level: 3, speed: 6 },
    LevelStep { min_score: 3000, level: 4, speed: 8 },
    LevelStep { min_score: 6000, level: 5, speed: 10 },
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scoreboard {
    score: u32,
    level: u32,
    speed: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Scoreboard { score: 0, level: BASE_LEVEL, speed: BASE_SPEED }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Credits one food and returns the new level if a threshold was crossed.
    ///
    /// Thresholds are compared with `>=`, so a score that jumps past one or
    /// more of them still levels up.
    pub fn food_eaten(&mut self) -> Option<u32> {
        self.score += FOOD_POINTS;

        let before = self.level;
        for step in LEVELS.iter() {
            if self.score >= step.min_score && self.level < step.level {
                self.level = step.level;
                self.speed = step.speed;
            }
        }

        if self.level != before {
            info!("Level {} reached at score {}, speed {}", self.level, self.score, self.speed);
            Some(self.level)
        } else {
            None
        }
    }

    pub fn score_text(&self) -> String {
        format_counter(self.score)
    }

    pub fn level_text(&self) -> String {
        format_counter(self.level)
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Zero-padded to three digits below 1000, four digits from there on.
pub fn format_counter(value: u32) -> String {
    if value < 1000 {
        format!("{:03}", value)
    } else {
        format!("{:04}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_level_one() {
        let board = Scoreboard::new();
        assert_eq!((board.score(), board.level(), board.speed()), (0, 1, 2));
    }

    #[test]
    fn levels_up_at_thresholds_and_never_regresses() {
        let mut board = Scoreboard::new();
        let mut levels = vec![];
        for _ in 0..60 {
            if let Some(level) = board.food_eaten() {
                levels.push((board.score(), level, board.speed()));
            }
            if board.score() >= 800 {
                assert!(board.level() >= 2);
                assert!(board.speed() >= 4);
            }
        }
        assert_eq!(levels, vec![(800, 2, 4), (1500, 3, 6), (3000, 4, 8), (6000, 5, 10)]);
    }

    #[test]
    fn level_holds_between_thresholds() {
        let mut board = Scoreboard::new();
        for _ in 0..8 {
            board.food_eaten();
        }
        assert_eq!((board.level(), board.speed()), (2, 4));
        for _ in 0..6 {
            assert_eq!(board.food_eaten(), None);
            assert_eq!((board.level(), board.speed()), (2, 4));
        }
        assert_eq!(board.score(), 1400);
    }

    #[test]
    fn counters_are_zero_padded() {
        assert_eq!(format_counter(0), "000");
        assert_eq!(format_counter(1), "001");
        assert_eq!(format_counter(900), "900");
        assert_eq!(format_counter(1000), "1000");
        assert_eq!(format_counter(12300), "12300");
    }
}
