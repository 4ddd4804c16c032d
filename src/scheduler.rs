//! Fixed-rate stepping on top of a per-frame callback.
//!
//! The host calls [`FrameScheduler::on_frame`] once per display frame with a
//! timestamp. A step only runs once `1 / speed` seconds have passed since the
//! last one, and the speed is read again on every frame since leveling up can
//! change it.

use std::time::Duration;

use crate::error::Result;
use crate::game::{GameSession, RenderModel, StepReport};

/// Draws the board. Each call replaces whatever was drawn before.
pub trait Frontend {
    fn render(&mut self, model: &RenderModel<'_>) -> Result<()>;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Frame {
    /// Too early for the next step, nothing changed
    Waiting,
    Stepped(StepReport),
    /// The game is over, no more steps will run
    Stopped,
}

#[derive(Debug, Default)]
pub struct FrameScheduler {
    last_step: Duration,
}

pub fn step_interval(speed: u32) -> Duration {
    Duration::from_nanos(1_000_000_000 / u64::from(speed.max(1)))
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_frame<F: Frontend + ?Sized>(
        &mut self,
        now: Duration,
        session: &mut GameSession,
        frontend: &mut F,
    ) -> Result<Frame> {
        if session.is_over() {
            return Ok(Frame::Stopped);
        }

        if now.saturating_sub(self.last_step) < step_interval(session.speed()) {
            return Ok(Frame::Waiting);
        }
        self.last_step = now;

        let report = session.update();
        if !session.is_over() {
            frontend.render(&session.render_model())?;
        }

        Ok(Frame::Stepped(report))
    }
}
