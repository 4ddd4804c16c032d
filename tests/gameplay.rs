use std::time::Duration;

use gridsnake::config::GameConfig;
use gridsnake::direction::Direction;
use gridsnake::error::Result;
use gridsnake::game::{GameSession, Outcome, Phase, RenderModel};
use gridsnake::position::Position;
use gridsnake::scheduler::{Frame, FrameScheduler, Frontend};
use gridsnake::snake::Snake;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Default)]
struct Recorder {
    frames: Vec<(Vec<Position>, Option<Position>)>,
}

impl Frontend for Recorder {
    fn render(&mut self, model: &RenderModel<'_>) -> Result<()> {
        self.frames.push((model.segments.to_vec(), model.food));
        Ok(())
    }
}

fn p(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

fn session(config: GameConfig, body: Vec<Position>, food: Position) -> GameSession {
    GameSession::with_layout(config, Snake::from_segments(body), Some(food), StdRng::seed_from_u64(42))
}

#[test]
fn eat_then_grow_on_the_next_step() {
    let config = GameConfig::scored();
    let growth = config.growth as usize;
    let mut game = session(config, vec![p(11, 11)], p(12, 11));
    let mut scheduler = FrameScheduler::new();
    let mut recorder = Recorder::default();

    game.input_mut().set_direction(Direction::Right);

    // Scored variant starts at 2 steps per second
    let frame = scheduler.on_frame(Duration::from_millis(500), &mut game, &mut recorder).unwrap();
    let report = match frame {
        Frame::Stepped(report) => report,
        other => panic!("expected a step, got {:?}", other),
    };
    assert!(report.ate_food);
    assert_eq!(game.snake().head(), p(12, 11));
    assert_eq!(game.snake().len(), 1);
    assert_eq!(game.scoreboard().unwrap().score(), 100);

    let (_, new_food) = recorder.frames.last().unwrap();
    let new_food = new_food.unwrap();
    assert_ne!(new_food, p(12, 11));

    scheduler.on_frame(Duration::from_millis(1000), &mut game, &mut recorder).unwrap();
    assert_eq!(game.snake().len(), 1 + growth);
    assert_eq!(game.snake().head(), p(13, 11));
    assert_eq!(recorder.frames.len(), 2);
}

#[test]
fn walking_off_the_left_edge_stops_the_loop() {
    let mut game = session(GameConfig::default(), vec![p(1, 11), p(2, 11)], p(15, 4));
    let mut scheduler = FrameScheduler::new();
    let mut recorder = Recorder::default();

    game.input_mut().set_direction(Direction::Left);
    scheduler.on_frame(Duration::from_secs(1), &mut game, &mut recorder).unwrap();

    assert_eq!(game.snake().head(), p(0, 11));
    assert_eq!(game.phase(), Phase::GameOver(Outcome::Crashed));
    assert!(recorder.frames.is_empty());

    let body = game.snake().body().to_vec();
    for secs in 2..20 {
        let frame = scheduler.on_frame(Duration::from_secs(secs), &mut game, &mut recorder).unwrap();
        assert_eq!(frame, Frame::Stopped);
    }
    assert_eq!(game.snake().body(), &body[..]);
    assert!(recorder.frames.is_empty());
}

#[test]
fn scored_variant_starts_at_two_steps_per_second() {
    let mut game = session(GameConfig::scored(), vec![p(1, 5)], p(2, 5));
    let mut scheduler = FrameScheduler::new();
    let mut recorder = Recorder::default();
    game.input_mut().set_direction(Direction::Right);

    assert_eq!(game.speed(), 2);
    let frame = scheduler.on_frame(Duration::from_millis(499), &mut game, &mut recorder).unwrap();
    assert_eq!(frame, Frame::Waiting);
    let frame = scheduler.on_frame(Duration::from_millis(500), &mut game, &mut recorder).unwrap();
    assert!(matches!(frame, Frame::Stepped(r) if r.ate_food));
}

#[test]
fn fresh_session_for_each_game() {
    let config = GameConfig { seed: Some(3), ..GameConfig::scored() };
    let mut first = GameSession::new(config.clone());
    first.input_mut().set_direction(Direction::Up);
    for _ in 0..15 {
        first.update();
    }
    assert!(first.is_over());

    let second = GameSession::new(config);
    assert_eq!(second.phase(), Phase::Running);
    assert_eq!(second.snake().body(), &[p(11, 11)]);
    assert_eq!(second.scoreboard().unwrap().score(), 0);
    assert_eq!(second.food(), GameSession::new(GameConfig { seed: Some(3), ..GameConfig::scored() }).food());
}
