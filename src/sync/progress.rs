use crate::config::DEFAULT_DURATION_SECS;

/// Locally predicted playback position of the current track.
///
/// `elapsed` only moves forward between reconciliations, except on an explicit
/// reset or a seek commit. Out-of-range input is clamped, never rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressModel {
    elapsed: f64,
    duration: f64,
    is_seeking: bool,
    track_identity: Option<String>,
    looping: bool,
}

impl Default for ProgressModel {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION_SECS)
    }
}

impl ProgressModel {
    pub fn new(duration: f64) -> Self {
        Self {
            elapsed: 0.0,
            duration: sanitize_duration(duration, DEFAULT_DURATION_SECS),
            is_seeking: false,
            track_identity: None,
            looping: false,
        }
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn is_seeking(&self) -> bool {
        self.is_seeking
    }

    pub fn track_identity(&self) -> Option<&str> {
        self.track_identity.as_deref()
    }

    pub fn looping(&self) -> bool {
        self.looping
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }

    /// Ignored while a seek gesture holds the position.
    pub fn advance(&mut self, quantum: f64) {
        if self.is_seeking || !quantum.is_finite() || quantum <= 0.0 {
            return;
        }
        self.elapsed += quantum;
    }

    pub fn seek_to(&mut self, value: f64) {
        let value = if value.is_finite() { value } else { 0.0 };
        self.elapsed = value.clamp(0.0, self.duration);
    }

    pub fn set_seeking(&mut self, seeking: bool) {
        self.is_seeking = seeking;
    }

    /// Unknown, zero or negative durations fall back to the default.
    pub fn set_duration(&mut self, duration: f64) {
        self.duration = sanitize_duration(duration, DEFAULT_DURATION_SECS);
    }

    pub fn set_track_identity(&mut self, identity: Option<String>) {
        self.track_identity = identity;
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    /// Tolerates float drift from fractional quanta.
    pub fn reached_end(&self) -> bool {
        self.elapsed + 1e-6 >= self.duration
    }

    /// Completion in percent, clamped to `0..=100`.
    pub fn percent(&self) -> f64 {
        if self.duration <= 0.0 {
            return 0.0;
        }
        (self.elapsed / self.duration * 100.0).clamp(0.0, 100.0)
    }
}

fn sanitize_duration(duration: f64, fallback: f64) -> f64 {
    if duration.is_finite() && duration > 0.0 {
        duration
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_accumulates_and_reset_zeroes() {
        let mut model = ProgressModel::new(30.0);
        model.advance(1.0);
        model.advance(1.0);
        assert_eq!(model.elapsed(), 2.0);
        model.reset();
        assert_eq!(model.elapsed(), 0.0);
    }

    #[test]
    fn advance_is_ignored_while_seeking() {
        let mut model = ProgressModel::new(30.0);
        model.set_seeking(true);
        model.seek_to(12.0);
        model.advance(1.0);
        assert_eq!(model.elapsed(), 12.0);
    }

    #[test]
    fn seek_clamps_into_track() {
        let mut model = ProgressModel::new(20.0);
        model.seek_to(-5.0);
        assert_eq!(model.elapsed(), 0.0);
        model.seek_to(25.0);
        assert_eq!(model.elapsed(), 20.0);
        model.seek_to(f64::NAN);
        assert_eq!(model.elapsed(), 0.0);
    }

    #[test]
    fn unknown_duration_uses_default() {
        let mut model = ProgressModel::new(0.0);
        assert_eq!(model.duration(), DEFAULT_DURATION_SECS);
        model.set_duration(f64::INFINITY);
        assert_eq!(model.duration(), DEFAULT_DURATION_SECS);
        model.set_duration(-1.0);
        assert_eq!(model.percent(), 0.0);
    }

    #[test]
    fn percent_and_end_detection() {
        let mut model = ProgressModel::new(10.0);
        for _ in 0..5 {
            model.advance(1.0);
        }
        assert_eq!(model.percent(), 50.0);
        assert!(!model.reached_end());

        let mut fine = ProgressModel::new(1.0);
        for _ in 0..10 {
            fine.advance(0.1);
        }
        assert!(fine.reached_end());
        assert!(fine.percent() > 99.9);
    }
}
