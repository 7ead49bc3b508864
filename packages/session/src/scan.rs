//! # Scan session — the lifecycle of one QR-scanning attempt
//!
//! Idle → Scanning → (Result | Error) → Idle. The camera and the decoder are
//! external: they push events into the session, and the session decides what
//! counts. Two rules do all the work:
//!
//! - **First decode wins.** Only the first non-empty payload after entering
//!   `Scanning` is kept; the decode loop keeps producing frames at camera
//!   rate and every later event is ignored until the next cycle.
//! - **Stale cycles are dead.** [`start`](ScanSession::start) hands out a
//!   [`ScanCycle`] token and every event must present it. A decode loop that
//!   outlives its cycle (component unmounted, user pressed stop, a new scan
//!   started) can no longer mutate the session.
//!
//! At most one of result/error is set at any time; no history of past scans
//! is kept.

/// Fixed user-facing message for a scanner failure.
pub const SCAN_ERROR_MSG: &str = "Scanning failed. Check camera access.";

/// Lifecycle phase of a scan attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanPhase {
    #[default]
    Idle,
    Scanning,
    Result,
    Error,
}

/// Token identifying one scanning cycle.
///
/// Handed out by [`ScanSession::start`]; events carrying a token from an
/// earlier cycle are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanCycle(u64);

/// State of the scan page's single scanning attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanSession {
    phase: ScanPhase,
    result: Option<String>,
    error: Option<String>,
    cycle: u64,
}

impl ScanSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    /// The decoded payload, present only in [`ScanPhase::Result`].
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    /// The failure message, present only in [`ScanPhase::Error`].
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Begin a new scanning cycle, clearing any prior result or error.
    pub fn start(&mut self) -> ScanCycle {
        self.result = None;
        self.error = None;
        self.cycle += 1;
        self.phase = ScanPhase::Scanning;
        ScanCycle(self.cycle)
    }

    /// Manual stop with no result yet. Outstanding tokens are invalidated.
    pub fn stop(&mut self) {
        if self.phase == ScanPhase::Scanning {
            self.phase = ScanPhase::Idle;
            self.cycle += 1;
        }
    }

    /// Return to idle from a terminal state.
    pub fn reset(&mut self) {
        self.result = None;
        self.error = None;
        self.cycle += 1;
        self.phase = ScanPhase::Idle;
    }

    /// Accept a decoded payload. Returns whether the event was taken: only
    /// the first non-empty delivery of the current cycle wins.
    pub fn deliver(&mut self, cycle: ScanCycle, raw: &str) -> bool {
        if self.phase != ScanPhase::Scanning || cycle.0 != self.cycle || raw.is_empty() {
            return false;
        }
        self.result = Some(raw.to_string());
        self.error = None;
        self.phase = ScanPhase::Result;
        true
    }

    /// Record a scanner failure for the current cycle. The opaque detail is
    /// only logged; the user sees [`SCAN_ERROR_MSG`].
    pub fn fail(&mut self, cycle: ScanCycle, detail: &str) {
        if self.phase != ScanPhase::Scanning || cycle.0 != self.cycle {
            return;
        }
        tracing::debug!("scan failed: {detail}");
        self.error = Some(SCAN_ERROR_MSG.to_string());
        self.phase = ScanPhase::Error;
    }
}

/// True when the scanned payload can be opened as a link: the value must
/// start with exactly `http://` or `https://`.
pub fn is_openable_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_decode_wins() {
        let mut scan = ScanSession::new();
        let cycle = scan.start();

        assert!(scan.deliver(cycle, "A"));
        assert!(!scan.deliver(cycle, "B"));

        assert_eq!(scan.phase(), ScanPhase::Result);
        assert_eq!(scan.result(), Some("A"));
        assert_eq!(scan.error(), None);
    }

    #[test]
    fn test_restart_clears_prior_error() {
        let mut scan = ScanSession::new();
        let first = scan.start();
        scan.fail(first, "camera denied");
        assert_eq!(scan.phase(), ScanPhase::Error);

        let second = scan.start();
        assert_eq!(scan.error(), None);
        assert!(scan.deliver(second, "X"));

        assert_eq!(scan.phase(), ScanPhase::Result);
        assert_eq!(scan.result(), Some("X"));
        assert_eq!(scan.error(), None);
    }

    #[test]
    fn test_stale_cycle_events_are_ignored() {
        let mut scan = ScanSession::new();
        let first = scan.start();
        let second = scan.start();

        assert!(!scan.deliver(first, "stale"));
        assert_eq!(scan.phase(), ScanPhase::Scanning);

        scan.fail(first, "stale failure");
        assert_eq!(scan.phase(), ScanPhase::Scanning);

        assert!(scan.deliver(second, "fresh"));
        assert_eq!(scan.result(), Some("fresh"));
    }

    #[test]
    fn test_stop_returns_to_idle_and_invalidates_token() {
        let mut scan = ScanSession::new();
        let cycle = scan.start();
        scan.stop();

        assert_eq!(scan.phase(), ScanPhase::Idle);
        assert!(!scan.deliver(cycle, "late"));
        assert_eq!(scan.result(), None);

        // stop outside Scanning is a no-op
        scan.stop();
        assert_eq!(scan.phase(), ScanPhase::Idle);
    }

    #[test]
    fn test_reset_clears_terminal_state() {
        let mut scan = ScanSession::new();
        let cycle = scan.start();
        scan.deliver(cycle, "payload");

        scan.reset();
        assert_eq!(scan.phase(), ScanPhase::Idle);
        assert_eq!(scan.result(), None);
        assert_eq!(scan.error(), None);
    }

    #[test]
    fn test_empty_payload_is_ignored() {
        let mut scan = ScanSession::new();
        let cycle = scan.start();

        assert!(!scan.deliver(cycle, ""));
        assert_eq!(scan.phase(), ScanPhase::Scanning);
    }

    #[test]
    fn test_failure_keeps_result_empty() {
        let mut scan = ScanSession::new();
        let cycle = scan.start();
        scan.fail(cycle, "no camera");

        assert_eq!(scan.phase(), ScanPhase::Error);
        assert_eq!(scan.result(), None);
        assert_eq!(scan.error(), Some(SCAN_ERROR_MSG));
    }

    #[test]
    fn test_openable_url_requires_http_prefix() {
        assert!(is_openable_url("http://example.com"));
        assert!(is_openable_url("https://example.com/path?q=1"));

        assert!(!is_openable_url("ftp://example.com"));
        assert!(!is_openable_url("example.com"));
        assert!(!is_openable_url("javascript:alert(1)"));
        assert!(!is_openable_url("HTTP://example.com"));
        assert!(!is_openable_url(" https://example.com"));
        assert!(!is_openable_url(""));
    }
}
