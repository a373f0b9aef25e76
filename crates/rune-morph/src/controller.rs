//! Time-driven progress source for a morph.

/// Where a controller is in its forward run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationStatus {
    /// At the start, not running.
    #[default]
    Dismissed,
    /// Advancing from 0 towards 1.
    Forward,
    /// Reached 1.
    Completed,
}

/// Advances a normalized value from 0 to 1 over a duration as time is fed
/// in through [`tick`](Self::tick).
#[derive(Debug, Clone, Default)]
pub struct AnimationController {
    duration_ms: f32,
    value: f32,
    status: AnimationStatus,
    ticking: bool,
}

impl AnimationController {
    pub fn new(duration_ms: f32) -> Self {
        Self {
            duration_ms,
            ..Self::default()
        }
    }

    pub fn duration_ms(&self) -> f32 {
        self.duration_ms
    }

    pub fn set_duration_ms(&mut self, duration_ms: f32) {
        self.duration_ms = duration_ms;
    }

    /// Current progress in `[0, 1]`.
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn status(&self) -> AnimationStatus {
        self.status
    }

    /// Whether ticks currently advance the value.
    pub fn is_animating(&self) -> bool {
        self.ticking
    }

    /// Start advancing forward from `from`.
    pub fn forward_from(&mut self, from: f32) {
        self.value = from.clamp(0.0, 1.0);
        if self.duration_ms <= 0.0 || self.value >= 1.0 {
            self.value = 1.0;
            self.status = AnimationStatus::Completed;
            self.ticking = false;
        } else {
            self.status = AnimationStatus::Forward;
            self.ticking = true;
        }
    }

    /// Advance by `delta_ms` of wall time.
    pub fn tick(&mut self, delta_ms: f32) -> AnimationStatus {
        if !self.ticking {
            return self.status;
        }
        self.value += delta_ms.max(0.0) / self.duration_ms;
        if self.value >= 1.0 {
            self.value = 1.0;
            self.status = AnimationStatus::Completed;
            self.ticking = false;
        }
        self.status
    }

    /// Halt without changing the value.
    pub fn stop(&mut self) {
        self.ticking = false;
    }

    /// Return to 0 and stop.
    pub fn reset(&mut self) {
        self.value = 0.0;
        self.status = AnimationStatus::Dismissed;
        self.ticking = false;
    }
}
