//! Scroll synchronization between the editor and preview panes.
//!
//! Percentage-based mirroring with two timing behaviors the host relies on:
//! the write to the target pane is deferred to the next animation-frame
//! boundary (bursts of scroll events coalesce into one update), and a
//! short cool-down guard after the programmatic scroll suppresses the echo
//! event the target pane fires back.

use web_time::{Duration, Instant};

/// Guard window after a programmatic scroll during which incoming scroll
/// events are ignored.
pub const SYNC_COOLDOWN: Duration = Duration::from_millis(50);

/// The two scrollable panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Editor,
    Preview,
}

impl Pane {
    pub fn other(self) -> Self {
        match self {
            Self::Editor => Self::Preview,
            Self::Preview => Self::Editor,
        }
    }
}

/// Geometry of a scrollable region, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    /// Maximum scroll offset; zero when content fits the viewport.
    pub fn max_scroll(&self) -> f64 {
        (self.scroll_height - self.client_height).max(0.0)
    }

    /// Relative scroll progress in `[0, 1]`; 0 when nothing can scroll.
    pub fn percentage(&self) -> f64 {
        let max = self.scroll_height - self.client_height;
        if max <= 0.0 { 0.0 } else { self.scroll_top / max }
    }
}

/// A programmatic scroll for the host to apply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollUpdate {
    pub pane: Pane,
    pub scroll_top: f64,
}

/// Mirrors scroll percentage between two panes.
#[derive(Debug, Clone)]
pub struct ScrollSync {
    enabled: bool,
    cooldown: Duration,
    guard_until: Option<Instant>,
    pending: Option<ScrollUpdate>,
}

impl ScrollSync {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            cooldown: SYNC_COOLDOWN,
            guard_until: None,
            pending: None,
        }
    }

    /// Enable or disable synchronization (disabled while a single pane is
    /// fullscreen). Disabling drops any queued update.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.pending = None;
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the guard window is active at `now`.
    pub fn is_syncing(&self, now: Instant) -> bool {
        self.guard_until.is_some_and(|until| now < until)
    }

    /// React to a scroll of `source_pane`. Queues a mirrored offset for the
    /// opposite pane, to be applied at the next frame boundary. Returns
    /// whether an update was queued.
    ///
    /// Events arriving inside the guard window are the echo of our own
    /// programmatic scroll and are dropped.
    pub fn handle_scroll(
        &mut self,
        source_pane: Pane,
        source: ScrollMetrics,
        target: ScrollMetrics,
        now: Instant,
    ) -> bool {
        if !self.enabled || self.is_syncing(now) {
            return false;
        }
        let scroll_top = source.percentage() * target.max_scroll();
        // Later events in the same frame overwrite the queued update.
        self.pending = Some(ScrollUpdate {
            pane: source_pane.other(),
            scroll_top,
        });
        true
    }

    /// Take the queued update at an animation-frame boundary and arm the
    /// echo guard. Returns `None` when nothing is queued.
    pub fn take_frame_update(&mut self, now: Instant) -> Option<ScrollUpdate> {
        let update = self.pending.take()?;
        self.guard_until = Some(now + self.cooldown);
        Some(update)
    }
}
