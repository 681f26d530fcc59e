/// What the caller should do with an incoming event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThrottleDecision {
    /// Handle the event now.
    Run,
    /// Schedule one handler call after this many milliseconds, then call
    /// [`Throttle::finish_deferred`].
    Defer(f64),
    /// A deferred call is already pending; drop this event.
    Skip,
}

/// Leading + trailing rate limiter driven by caller-supplied timestamps.
///
/// The trailing call guarantees the resting scroll position is evaluated even
/// when the last event of a burst falls inside the window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Throttle {
    interval_ms: f64,
    last_run: Option<f64>,
    deferred: bool,
}

impl Throttle {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms: interval_ms.max(0.0),
            last_run: None,
            deferred: false,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    pub fn poll(&mut self, now_ms: f64) -> ThrottleDecision {
        if self.deferred {
            return ThrottleDecision::Skip;
        }
        match self.last_run {
            Some(last) if now_ms - last < self.interval_ms => {
                self.deferred = true;
                ThrottleDecision::Defer(self.interval_ms - (now_ms - last))
            }
            _ => {
                self.last_run = Some(now_ms);
                ThrottleDecision::Run
            }
        }
    }

    /// Record that the deferred call has run.
    pub fn finish_deferred(&mut self, now_ms: f64) {
        self.deferred = false;
        self.last_run = Some(now_ms);
    }
}
