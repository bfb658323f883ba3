//! Depth-by-depth reveal scheduler.
//!
//! The scheduler is a small state machine driven by host ticks. Each tick
//! carries a monotonically increasing timestamp in milliseconds; once at
//! least one interval has passed since the last advance, the visible depth
//! threshold rises by one level.

pub use fractree_core::DEFAULT_INTERVAL_MS;

/// Lifecycle of a reveal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    /// Not started yet.
    #[default]
    Idle,
    /// Threshold below the maximum depth.
    Revealing,
    /// Every level is visible; no further ticks are needed.
    Complete,
}

/// Result of a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    /// Whether the threshold moved on this tick.
    pub advanced: bool,
    /// Phase after the tick.
    pub phase: Phase,
}

impl Tick {
    /// Whether the host should schedule another tick.
    pub fn wants_next_frame(&self) -> bool {
        self.phase == Phase::Revealing
    }
}

/// Visible depth threshold and its timing.
#[derive(Debug, Clone)]
pub struct Reveal {
    /// Deepest level currently drawn.
    threshold: u32,
    /// Level at which the reveal completes.
    max_depth: u32,
    /// Minimum time between two advances.
    interval_ms: u64,
    /// Timestamp of the last advance, unset until the first tick.
    last_advance_ms: Option<u64>,
    phase: Phase,
}

impl Reveal {
    /// Create an idle scheduler for a tree `max_depth` levels deep.
    pub fn new(max_depth: u32, interval_ms: u64) -> Self {
        Self {
            threshold: 0,
            max_depth,
            interval_ms,
            last_advance_ms: None,
            phase: Phase::Idle,
        }
    }

    /// Reset to depth 0 and begin revealing.
    pub fn start(&mut self) {
        self.threshold = 0;
        self.last_advance_ms = None;
        self.phase = if self.max_depth == 0 {
            Phase::Complete
        } else {
            Phase::Revealing
        };
    }

    /// Advance the threshold if an interval has elapsed since the last advance.
    ///
    /// At most one level is revealed per tick. Timestamps earlier than the
    /// last advance count as no elapsed time.
    pub fn tick(&mut self, now_ms: u64) -> Tick {
        if self.phase != Phase::Revealing {
            return Tick {
                advanced: false,
                phase: self.phase,
            };
        }

        let last = *self.last_advance_ms.get_or_insert(now_ms);
        let advanced = now_ms.saturating_sub(last) >= self.interval_ms;
        if advanced {
            self.threshold += 1;
            self.last_advance_ms = Some(now_ms);
            if self.threshold >= self.max_depth {
                self.phase = Phase::Complete;
            }
        }

        Tick {
            advanced,
            phase: self.phase,
        }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn last_advance_ms(&self) -> Option<u64> {
        self.last_advance_ms
    }
}
