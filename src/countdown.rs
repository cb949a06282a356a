use std::time::{Duration, Instant};

// Countdown timer shown next to the uptime
pub struct CountdownTimer {
    total: Duration,
    started: Instant,
    repeat: bool,
}

impl CountdownTimer {
    pub fn new(total_secs: u64, repeat: bool) -> Self {
        Self::starting_at(total_secs, repeat, Instant::now())
    }

    pub fn starting_at(total_secs: u64, repeat: bool, now: Instant) -> Self {
        Self {
            total: Duration::from_secs(total_secs),
            started: now,
            repeat,
        }
    }

    pub fn total_secs(&self) -> u64 {
        self.total.as_secs()
    }

    /// Seconds left at `now`. Goes negative once the timer has run out.
    pub fn remaining_secs_at(&self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.started);
        self.total.as_secs_f64() - elapsed.as_secs_f64()
    }

    pub fn remaining_secs(&self) -> f64 {
        self.remaining_secs_at(Instant::now())
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        self.remaining_secs_at(now) <= 0.0
    }

    pub fn restart_at(&mut self, now: Instant) {
        self.started = now;
    }

    /// Restarts a repeating timer that has run out. Returns true on rollover.
    pub fn tick_at(&mut self, now: Instant) -> bool {
        if self.repeat && self.is_expired_at(now) {
            self.restart_at(now);
            return true;
        }
        false
    }

    pub fn tick(&mut self) -> bool {
        self.tick_at(Instant::now())
    }
}
