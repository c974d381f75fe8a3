//! Clock module - frame timing for the host loop
//!
//! The engine only understands elapsed milliseconds. [`FrameLoop`] turns readings from a
//! [`FrameClock`] into those deltas and feeds them to [`GameState::tick`].

use std::time::{Duration, Instant};

use crate::game_state::GameState;
use crate::rng::PieceSource;

/// Monotonic time source
pub trait FrameClock {
    /// Time since an arbitrary fixed origin
    fn now(&self) -> Duration;
}

/// Wall clock backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Clock that only moves when told to
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    now: Duration,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    pub fn advance_ms(&mut self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl FrameClock for ManualClock {
    fn now(&self) -> Duration {
        self.now
    }
}

impl<C: FrameClock + ?Sized> FrameClock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// Drives gravity from successive clock readings.
///
/// The first frame after construction or [`rebase`](FrameLoop::rebase) yields a zero
/// delta.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameLoop {
    last: Option<Duration>,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous reading; the next frame starts from zero
    pub fn rebase(&mut self) {
        self.last = None;
    }

    /// Milliseconds since the previous frame, saturating at `u32::MAX`
    pub fn delta_ms(&mut self, clock: &impl FrameClock) -> u32 {
        let now = clock.now();
        let elapsed = match self.last {
            Some(prev) => now.saturating_sub(prev),
            None => Duration::ZERO,
        };
        self.last = Some(now);
        u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX)
    }

    /// Run one frame: measure the delta and tick the game.
    ///
    /// While the game is not running the loop rebases instead, so idle and paused time
    /// never reaches the gravity timer. Returns true if a gravity step ran.
    pub fn frame<S: PieceSource>(
        &mut self,
        clock: &impl FrameClock,
        game: &mut GameState<S>,
    ) -> bool {
        if !game.is_running() {
            self.rebase();
            return false;
        }
        let delta = self.delta_ms(clock);
        game.tick(delta)
    }
}
