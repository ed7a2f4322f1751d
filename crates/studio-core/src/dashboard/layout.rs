//! Settings/preview presentation modes.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::timer::{Instant, Scheduler, TimerId};

/// How the dashboard splits settings and preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    #[default]
    Split,
    SettingsOnly,
    PreviewOnly,
}

impl LayoutMode {
    pub const ALL: [LayoutMode; 3] = [LayoutMode::Split, LayoutMode::SettingsOnly, LayoutMode::PreviewOnly];

    pub fn label(self) -> &'static str {
        match self {
            LayoutMode::Split => "설정 + 미리보기",
            LayoutMode::SettingsOnly => "설정만",
            LayoutMode::PreviewOnly => "미리보기만",
        }
    }

    pub fn shows_settings(self) -> bool {
        !matches!(self, LayoutMode::PreviewOnly)
    }

    pub fn shows_preview(self) -> bool {
        !matches!(self, LayoutMode::SettingsOnly)
    }
}

/// Preview pane state.
///
/// Restarting the preview hides it and schedules a rebind after a short
/// delay. When the rebind fires, `epoch` advances so the renderer restarts
/// its animation from the beginning.
#[derive(Debug)]
pub struct PreviewState {
    mode: LayoutMode,
    epoch: u64,
    playing: bool,
    pending: Option<TimerId>,
    timers: Scheduler<()>,
    delay: Duration,
}

impl PreviewState {
    pub fn new(delay: Duration) -> Self {
        Self {
            mode: LayoutMode::default(),
            epoch: 0,
            playing: true,
            pending: None,
            timers: Scheduler::new(),
            delay,
        }
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// False between a replay request and its rebind.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Switch layout mode. Switching to a different mode replays the preview.
    pub fn set_mode(&mut self, mode: LayoutMode, now: Instant) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.replay(now);
    }

    /// Restart the preview animation after the configured delay.
    pub fn replay(&mut self, now: Instant) {
        if let Some(previous) = self.pending.take() {
            self.timers.cancel(previous);
        }
        self.playing = false;
        self.pending = Some(self.timers.schedule(now, self.delay, ()));
    }

    pub fn tick(&mut self, now: Instant) {
        if !self.timers.poll(now).is_empty() {
            self.pending = None;
            self.playing = true;
            self.epoch += 1;
            log::debug!("Preview replay, epoch {}", self.epoch);
        }
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    /// Cancel any pending rebind. The preview is left playing.
    pub fn teardown(&mut self) {
        self.timers.cancel_all();
        self.pending = None;
        self.playing = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preview() -> PreviewState {
        PreviewState::new(Duration::from_millis(100))
    }

    #[test]
    fn test_modes_are_exclusive() {
        assert!(LayoutMode::Split.shows_settings() && LayoutMode::Split.shows_preview());
        assert!(!LayoutMode::SettingsOnly.shows_preview());
        assert!(!LayoutMode::PreviewOnly.shows_settings());
    }

    #[test]
    fn test_switch_mode_replays_after_delay() {
        let mut preview = preview();
        let now = Instant::now();

        preview.set_mode(LayoutMode::PreviewOnly, now);
        assert_eq!(preview.mode(), LayoutMode::PreviewOnly);
        assert!(!preview.is_playing());

        preview.tick(now + Duration::from_millis(50));
        assert_eq!(preview.epoch(), 0);

        preview.tick(now + Duration::from_millis(100));
        assert_eq!(preview.epoch(), 1);
        assert!(preview.is_playing());
    }

    #[test]
    fn test_same_mode_does_not_replay() {
        let mut preview = preview();
        preview.set_mode(LayoutMode::Split, Instant::now());
        assert!(preview.is_playing());
        assert!(preview.next_deadline().is_none());
    }

    #[test]
    fn test_repeated_replay_supersedes() {
        let mut preview = preview();
        let now = Instant::now();

        preview.replay(now);
        preview.replay(now + Duration::from_millis(80));
        preview.tick(now + Duration::from_millis(120));
        assert_eq!(preview.epoch(), 0);

        preview.tick(now + Duration::from_millis(180));
        assert_eq!(preview.epoch(), 1);
    }

    #[test]
    fn test_teardown_cancels_rebind() {
        let mut preview = preview();
        let now = Instant::now();
        preview.replay(now);
        preview.teardown();
        preview.tick(now + Duration::from_secs(1));
        assert_eq!(preview.epoch(), 0);
        assert!(preview.is_playing());
    }
}
