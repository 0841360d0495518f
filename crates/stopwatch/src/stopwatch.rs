//! Stopwatch state machine.
//!
//! The stopwatch never reads a clock itself. Every operation that depends on
//! time takes `now`, a monotonic reading measured from any fixed epoch the
//! caller likes (the binary uses the `Instant` it started at).
//!
//! # States
//!
//! - **stopped**: the elapsed time is fixed; `lap` does nothing.
//! - **running**: the elapsed time follows `now`.
//! - **running, lapped**: the clock keeps counting but the display holds the
//!   value it had when `lap` was pressed, until `lap` is pressed again.

use std::time::Duration;

use arrayvec::ArrayString;
use log::debug;

/// Display text, `mm:ss:ff`.
pub type DisplayText = ArrayString<8>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stopwatch {
    /// Elapsed time banked before the current run.
    banked: Duration,
    /// Clock reading when the current run started.
    resumed_at: Option<Duration>,
    /// Elapsed time as of the last tick.
    elapsed: Duration,
    /// Value held on the display while lapped.
    lap: Option<Duration>,
    /// Hundredths last reported by `tick`.
    shown: u64,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.resumed_at.is_some()
    }

    pub fn is_lapped(&self) -> bool {
        self.lap.is_some()
    }

    /// Elapsed time as of the last tick, ignoring any lap hold.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Value the display should show.
    pub fn displayed(&self) -> Duration {
        self.lap.unwrap_or(self.elapsed)
    }

    /// Start, resuming from the elapsed time, or stop.
    ///
    /// Stopping also releases a lap hold; the display then shows the real
    /// elapsed time.
    pub fn toggle(&mut self, now: Duration) {
        match self.resumed_at.take() {
            Some(resumed_at) => {
                self.elapsed = self.banked + now.saturating_sub(resumed_at);
                self.banked = self.elapsed;
                self.lap = None;
                debug!("stopwatch stopped at {:?}", self.elapsed);
            }
            None => {
                self.banked = self.elapsed;
                self.resumed_at = Some(now);
                debug!("stopwatch started from {:?}", self.elapsed);
            }
        }
    }

    /// Back to zero. A running stopwatch keeps running from `now`.
    pub fn reset(&mut self, now: Duration) {
        self.banked = Duration::ZERO;
        self.elapsed = Duration::ZERO;
        self.lap = None;
        if self.resumed_at.is_some() {
            self.resumed_at = Some(now);
        }
        debug!("stopwatch reset");
    }

    /// Hold or release the display while running. No-op while stopped.
    pub fn lap(&mut self) {
        if !self.is_running() {
            return;
        }
        self.lap = match self.lap {
            Some(_) => None,
            None => Some(self.elapsed),
        };
        debug!("stopwatch lap hold: {:?}", self.lap);
    }

    /// Advance to `now`. Returns whether the display text changed since the
    /// previous tick.
    pub fn tick(&mut self, now: Duration) -> bool {
        if let Some(resumed_at) = self.resumed_at {
            self.elapsed = self.banked + now.saturating_sub(resumed_at);
        }
        let shown = centis(self.displayed());
        let changed = shown != self.shown;
        self.shown = shown;
        changed
    }

    /// Render the displayed value as `mm:ss:ff` (minutes wrap at 60).
    ///
    /// ```
    /// use std::time::Duration;
    /// use lcd_label_stopwatch::Stopwatch;
    ///
    /// let mut sw = Stopwatch::new();
    /// sw.toggle(Duration::ZERO);
    /// sw.tick(Duration::from_millis(83_456));
    /// assert_eq!(sw.display_text().as_str(), "01:23:45");
    /// ```
    pub fn display_text(&self) -> DisplayText {
        format_duration(self.displayed())
    }
}

fn centis(d: Duration) -> u64 {
    d.as_secs() * 100 + u64::from(d.subsec_millis() / 10)
}

/// Format `d` as `mm:ss:ff`.
pub fn format_duration(d: Duration) -> DisplayText {
    let secs = d.as_secs();
    let mut out = DisplayText::new();
    push_two(&mut out, (secs / 60) % 60);
    out.push(':');
    push_two(&mut out, secs % 60);
    out.push(':');
    push_two(&mut out, u64::from(d.subsec_millis() / 10));
    out
}

fn push_two(out: &mut DisplayText, v: u64) {
    out.push(char::from(b'0' + (v / 10 % 10) as u8));
    out.push(char::from(b'0' + (v % 10) as u8));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn starts_stopped_at_zero() {
        let mut sw = Stopwatch::new();
        assert!(!sw.is_running());
        assert!(!sw.tick(ms(5_000)));
        assert_eq!(sw.display_text().as_str(), "00:00:00");
    }

    #[test]
    fn runs_and_resumes_from_banked_time() {
        let mut sw = Stopwatch::new();
        sw.toggle(ms(1_000));
        assert!(sw.tick(ms(2_500)));
        assert_eq!(sw.elapsed(), ms(1_500));

        sw.toggle(ms(3_000));
        assert_eq!(sw.elapsed(), ms(2_000));
        assert!(sw.tick(ms(9_000)));
        assert!(!sw.tick(ms(10_000)));
        assert_eq!(sw.elapsed(), ms(2_000));

        sw.toggle(ms(10_000));
        sw.tick(ms(10_250));
        assert_eq!(sw.elapsed(), ms(2_250));
    }

    #[test]
    fn reset_while_running_keeps_running() {
        let mut sw = Stopwatch::new();
        sw.toggle(ms(0));
        sw.tick(ms(4_000));
        sw.reset(ms(4_000));
        assert!(sw.is_running());
        sw.tick(ms(4_300));
        assert_eq!(sw.display_text().as_str(), "00:00:30");
    }

    #[test]
    fn reset_while_stopped_zeroes() {
        let mut sw = Stopwatch::new();
        sw.toggle(ms(0));
        sw.toggle(ms(1_230));
        sw.tick(ms(1_230));
        sw.reset(ms(2_000));
        assert!(sw.tick(ms(2_000)));
        assert_eq!(sw.elapsed(), Duration::ZERO);
        assert!(!sw.is_running());
    }

    #[test]
    fn lap_holds_the_display() {
        let mut sw = Stopwatch::new();
        sw.toggle(ms(0));
        sw.tick(ms(1_000));
        sw.lap();
        assert!(sw.is_lapped());

        assert!(!sw.tick(ms(5_000)));
        assert_eq!(sw.display_text().as_str(), "00:01:00");
        assert_eq!(sw.elapsed(), ms(5_000));

        sw.lap();
        assert!(sw.tick(ms(6_000)));
        assert_eq!(sw.display_text().as_str(), "00:06:00");
    }

    #[test]
    fn lap_is_ignored_while_stopped() {
        let mut sw = Stopwatch::new();
        sw.lap();
        assert!(!sw.is_lapped());
    }

    #[test]
    fn stopping_releases_the_lap() {
        let mut sw = Stopwatch::new();
        sw.toggle(ms(0));
        sw.tick(ms(1_000));
        sw.lap();
        sw.toggle(ms(3_000));
        assert!(!sw.is_lapped());
        assert_eq!(sw.displayed(), ms(3_000));
    }

    #[test]
    fn minutes_wrap_at_an_hour() {
        assert_eq!(format_duration(ms(3_599_990)).as_str(), "59:59:99");
        assert_eq!(format_duration(ms(3_600_000)).as_str(), "00:00:00");
        assert_eq!(format_duration(ms(61_009)).as_str(), "01:01:00");
    }
}
