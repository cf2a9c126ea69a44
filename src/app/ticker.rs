use std::time::{Duration, Instant};

/// Label shown before anything plays and after a resetting stop.
pub const ZERO_TIME_LABEL: &str = "00:00 / 00:00";

/// Format whole seconds as `MM:SS`. Minutes keep counting past an hour.
pub fn format_mmss(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// `elapsed / total`, both as `MM:SS`.
pub fn time_label(elapsed_secs: u64, total_secs: u64) -> String {
    format!("{} / {}", format_mmss(elapsed_secs), format_mmss(total_secs))
}

/// Cancellable periodic schedule for the clock refresh.
///
/// The ticker does not run anything itself; the event loop asks `is_due`
/// and the app re-arms it with `reschedule` after each tick.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due: None,
        }
    }

    /// Arm for an immediate tick.
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now);
    }

    /// Arm for one period after `now`.
    pub fn reschedule(&mut self, now: Instant) {
        self.next_due = Some(now + self.period);
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.next_due.is_some_and(|due| now >= due)
    }

    /// Time left until the next tick, `None` when cancelled.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_mmss_pads_minutes_and_seconds() {
        assert_eq!(format_mmss(0), "00:00");
        assert_eq!(format_mmss(5), "00:05");
        assert_eq!(format_mmss(65), "01:05");
        assert_eq!(format_mmss(599), "09:59");
        assert_eq!(format_mmss(3600), "60:00");
    }

    #[test]
    fn time_label_joins_elapsed_and_total() {
        assert_eq!(time_label(65, 200), "01:05 / 03:20");
        assert_eq!(time_label(0, 0), ZERO_TIME_LABEL);
    }

    #[test]
    fn ticker_schedule_lifecycle() {
        let t0 = Instant::now();
        let mut ticker = Ticker::new(Duration::from_millis(1000));
        assert!(!ticker.is_active());
        assert!(!ticker.is_due(t0));
        assert_eq!(ticker.time_until_due(t0), None);

        ticker.start(t0);
        assert!(ticker.is_due(t0));

        ticker.reschedule(t0);
        assert!(!ticker.is_due(t0 + Duration::from_millis(999)));
        assert!(ticker.is_due(t0 + Duration::from_millis(1000)));
        assert_eq!(
            ticker.time_until_due(t0 + Duration::from_millis(400)),
            Some(Duration::from_millis(600))
        );
        assert_eq!(
            ticker.time_until_due(t0 + Duration::from_secs(5)),
            Some(Duration::ZERO)
        );

        ticker.cancel();
        assert!(!ticker.is_active());
        assert!(!ticker.is_due(t0 + Duration::from_secs(5)));
    }
}
