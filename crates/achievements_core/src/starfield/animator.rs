//! Frame-driven starfield animator.
//!
//! The host owns the display-refresh loop. It calls [`StarfieldAnimator::start`]
//! when the view mounts, [`StarfieldAnimator::on_frame`] from every refresh
//! callback, and [`StarfieldAnimator::stop`] on teardown. The host must only
//! request another frame while `on_frame` returns `FrameOutcome::Reschedule`.

use crate::starfield::field::{StarSprite, Starfield, StarfieldConfig, Viewport};
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimatorState {
    /// Created, not yet mounted.
    Idle,
    Running { last_frame_ms: u64 },
    /// Torn down; terminal.
    Stopped,
}

/// What the host should do after a frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Reschedule,
    Stop,
}

#[derive(Debug, Clone)]
pub struct StarfieldAnimator {
    field: Starfield,
    viewport: Viewport,
    state: AnimatorState,
}

impl StarfieldAnimator {
    pub fn new(field: Starfield, viewport: Viewport) -> Self {
        Self {
            field,
            viewport,
            state: AnimatorState::Idle,
        }
    }

    /// Seeds a fresh field from OS entropy, as done on every mount.
    pub fn from_config(config: &StarfieldConfig, viewport: Viewport) -> Self {
        Self::new(
            Starfield::seeded(config, &mut StdRng::from_entropy()),
            viewport,
        )
    }

    /// Deterministic variant of [`Self::from_config`].
    pub fn from_seed(config: &StarfieldConfig, viewport: Viewport, seed: u64) -> Self {
        Self::new(
            Starfield::seeded(config, &mut StdRng::seed_from_u64(seed)),
            viewport,
        )
    }

    /// Starts the frame clock. Has no effect unless the animator is idle.
    pub fn start(&mut self, now_ms: u64) -> FrameOutcome {
        match self.state {
            AnimatorState::Idle => {
                self.state = AnimatorState::Running {
                    last_frame_ms: now_ms,
                };
                info!(
                    "event=starfield_start module=starfield status=ok stars={}",
                    self.field.stars().len()
                );
                FrameOutcome::Reschedule
            }
            AnimatorState::Running { .. } => FrameOutcome::Reschedule,
            AnimatorState::Stopped => FrameOutcome::Stop,
        }
    }

    /// Advances the field by the time elapsed since the previous frame.
    ///
    /// A clock that moved backwards counts as zero elapsed time.
    pub fn on_frame(&mut self, now_ms: u64) -> FrameOutcome {
        let AnimatorState::Running { last_frame_ms } = self.state else {
            return FrameOutcome::Stop;
        };
        let elapsed = now_ms.saturating_sub(last_frame_ms);
        self.field.advance(elapsed as f64);
        self.state = AnimatorState::Running {
            last_frame_ms: now_ms.max(last_frame_ms),
        };
        FrameOutcome::Reschedule
    }

    /// Stops the loop for good.
    pub fn stop(&mut self) {
        if self.state != AnimatorState::Stopped {
            debug!("event=starfield_stop module=starfield status=ok");
        }
        self.state = AnimatorState::Stopped;
    }

    pub fn state(&self) -> AnimatorState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, AnimatorState::Running { .. })
    }

    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn field(&self) -> &Starfield {
        &self.field
    }

    /// Sprites visible in the current viewport.
    pub fn sprites(&self) -> Vec<StarSprite> {
        self.field.project(self.viewport)
    }
}
