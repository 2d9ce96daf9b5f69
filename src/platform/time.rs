//! Frame timing

/// Turns render-clock timestamps into a bounded simulation step
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Option<f64>,
    max_step: f32,
}

impl FrameClock {
    /// `max_step` in seconds
    pub fn new(max_step: f32) -> Self {
        Self {
            last: None,
            max_step,
        }
    }

    /// Seconds since the previous frame, clamped to `[0, max_step]`.
    ///
    /// The first frame yields 0.
    pub fn advance(&mut self, now: f64) -> f32 {
        let dt = match self.last {
            Some(last) => ((now - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last = Some(now);
        dt.clamp(0.0, self.max_step)
    }
}
