use std::{thread::sleep, time::{Duration, Instant}};

use crate::config::{GameConfig, Variant};
use crate::direction::Direction;
use crate::error::Result;
use crate::game::{GameSession, Outcome, Phase};
use crate::input::SwipeTracker;
use crate::scheduler::{Frame, FrameScheduler, Frontend};
use crate::term::TermManager;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use log::{debug, info};

/// Roughly one display refresh.
const FRAME_INTERVAL_MS: u64 = 16;

enum SessionEnd {
    Restart,
    Quit,
}

pub struct App {
    config: GameConfig,
    term: TermManager,
    paused: bool,
}

impl App {
    pub fn new(config: GameConfig) -> Result<Self> {
        Ok(App { config, term: TermManager::new()?, paused: false })
    }

    /// Runs games until the player quits. The terminal is restored on the way
    /// out, whether or not an error occurred.
    pub fn run(&mut self) -> Result<()> {
        self.term.layout_board(self.config.grid)?;
        self.term.setup()?;
        let res = self.run_sessions();
        let restored = self.term.restore();
        res.and(restored)
    }

    fn run_sessions(&mut self) -> Result<()> {
        if !self.show_intro()? {
            return Ok(());
        }

        loop {
            match self.play()? {
                SessionEnd::Restart => info!("Restarting"),
                SessionEnd::Quit => return Ok(()),
            }
        }
    }

    fn show_intro(&mut self) -> Result<bool> {
        let lines = &[
            "Arrow keys, WASD or drag the mouse to move",
            "P or Esc to pause",
            "Q or CTRL+C to quit",
            "",
            "Press any key to begin"
        ];

        self.term.show_message(lines)?;

        if is_quit(&self.term.read_key_blocking()?) {
            return Ok(false);
        }

        self.term.hide_message()?;
        Ok(true)
    }

    fn play(&mut self) -> Result<SessionEnd> {
        self.term.clear()?;
        self.paused = false;

        let mut session = GameSession::new(self.config.clone());
        let mut scheduler = FrameScheduler::new();
        let mut swipe = SwipeTracker::new();

        self.term.draw_borders()?;
        if self.config.variant == Variant::Classic {
            self.term.draw_status(" Snake")?;
        }
        self.term.render(&session.render_model())?;

        let clock = Instant::now();

        while !session.is_over() {
            sleep(Duration::from_millis(FRAME_INTERVAL_MS));

            for ev in self.term.read_events_queue()? {
                match ev {
                    Event::Key(key) if is_quit(&key) => return Ok(SessionEnd::Quit),
                    Event::Key(KeyEvent { code: KeyCode::Esc, .. })
                    | Event::Key(KeyEvent { code: KeyCode::Char('p'), .. }) => self.toggle_pause()?,
                    Event::Key(KeyEvent { code, .. }) => {
                        if let Some(dir) = Direction::from_key(code) {
                            session.input_mut().set_direction(dir);
                        }
                    }
                    Event::Mouse(MouseEvent { kind, column, row, .. }) => {
                        let (x, y) = (i32::from(column), i32::from(row));
                        let swiped = match kind {
                            MouseEventKind::Down(_) => {
                                swipe.begin(x, y);
                                None
                            }
                            MouseEventKind::Drag(_) => swipe.track(x, y),
                            MouseEventKind::Up(_) => {
                                let dir = swipe.track(x, y);
                                swipe.end();
                                dir
                            }
                            _ => None,
                        };
                        if let Some(dir) = swiped {
                            if session.input_mut().set_direction(dir) {
                                swipe.accepted(dir);
                            }
                        }
                    }
                    _ => {}
                }
            }

            if self.paused { continue; }

            if let Frame::Stepped(report) = scheduler.on_frame(clock.elapsed(), &mut session, &mut self.term)? {
                if let Some(level) = report.level_up {
                    debug!("Speed is now {} at level {}", session.speed(), level);
                }
            }
        }

        self.game_over(&session)?;
        self.restart_prompt()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn game_over(&mut self, session: &GameSession) -> Result<()> {
        let win = session.phase() == Phase::GameOver(Outcome::BoardFilled);
        let s = if win {"You won!"} else {"Game over!"};

        // The final step is never rendered by the scheduler
        self.term.render(&session.render_model())?;
        if !win {
            self.term.draw_crash(session.snake().body())?;
        }

        let summary = match session.scoreboard() {
            Some(board) => format!("Score: {}  Level: {}", board.score_text(), board.level_text()),
            None => format!("Length: {}", session.snake().len()),
        };

        self.term.show_message(&[
            s,
            &*summary,
            "",
            "Play again? (y/n)",
        ])
    }

    fn restart_prompt(&mut self) -> Result<SessionEnd> {
        loop {
            let key = self.term.read_key_blocking()?;
            if is_quit(&key) {
                return Ok(SessionEnd::Quit);
            }
            match key.code {
                KeyCode::Char('y') | KeyCode::Enter => return Ok(SessionEnd::Restart),
                KeyCode::Char('n') | KeyCode::Esc => break,
                _ => {}
            }
        }

        // Declined: the board stays as it ended until the player quits
        self.term.hide_message()?;
        self.term.draw_status(" Game over - Q to quit")?;
        loop {
            if is_quit(&self.term.read_key_blocking()?) {
                return Ok(SessionEnd::Quit);
            }
        }
    }

    fn toggle_pause(&mut self) -> Result<()> {
        if !self.paused {
            self.term.show_message(&["Paused", "Press P or Esc to resume", "or Q to quit"])?;
        } else {
            self.term.hide_message()?;
        }

        self.paused = !self.paused;
        Ok(())
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

fn is_quit(ev: &KeyEvent) -> bool {
    is_ctrl_c(ev) || ev.code == KeyCode::Char('q')
}
