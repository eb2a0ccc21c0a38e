//! Popup state container.
//!
//! Replaces the extension popup's scattered UI state hooks with one explicit
//! state machine. A popup open runs idle → loading → {ready | failed}; a
//! retry from failed re-enters loading. The container is pure and
//! synchronous; the fetch itself lives with the caller.

use std::collections::HashMap;

use crate::models::{ChartSlice, CommitStats, SliceStyle};
use crate::stats::{chart_config, ranked_slices, TimeWindow};

/// Fetch lifecycle of one popup open.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready(CommitStats),
    Failed(String),
}

/// Which panel the popup is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelView {
    #[default]
    Chart,
    Contributors,
}

/// Everything the renderer needs for one frame, derived from a ready popup.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupView {
    pub window: TimeWindow,
    pub panel: PanelView,
    pub total_commits: u64,
    pub contributors: usize,
    pub slices: Vec<ChartSlice>,
    pub config: HashMap<String, SliceStyle>,
}

#[derive(Debug, Clone, Default)]
pub struct Popup {
    phase: Phase,
    window: TimeWindow,
    panel: PanelView,
}

impl Popup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Idle or failed → loading. Anything else is a stray call and is ignored;
    /// the popup fires once per open and must never panic on a late event.
    pub fn start_loading(&mut self) {
        match self.phase {
            Phase::Idle | Phase::Failed(_) => self.phase = Phase::Loading,
            _ => tracing::debug!(phase = ?self.phase, "ignoring start_loading"),
        }
    }

    /// Loading → ready.
    pub fn resolve(&mut self, stats: CommitStats) {
        match self.phase {
            Phase::Loading => self.phase = Phase::Ready(stats),
            _ => tracing::debug!(phase = ?self.phase, "ignoring resolve outside loading"),
        }
    }

    /// Loading → failed.
    pub fn fail(&mut self, message: impl Into<String>) {
        match self.phase {
            Phase::Loading => self.phase = Phase::Failed(message.into()),
            _ => tracing::debug!(phase = ?self.phase, "ignoring fail outside loading"),
        }
    }

    /// Window and panel tabs switch freely in any phase.
    pub fn set_window(&mut self, window: TimeWindow) {
        self.window = window;
    }

    pub fn set_panel(&mut self, panel: PanelView) {
        self.panel = panel;
    }

    /// Windowed total for the header stat, once data is in.
    pub fn window_total(&self) -> Option<u64> {
        match &self.phase {
            Phase::Ready(stats) => Some(self.window.adjust(stats.total_commits)),
            _ => None,
        }
    }

    /// Derive the full render model. `None` until the popup is ready.
    pub fn render(&self) -> Option<PopupView> {
        let Phase::Ready(stats) = &self.phase else {
            return None;
        };

        let slices = ranked_slices(&stats.author_commit_count, self.window);
        let config = chart_config(&slices);

        Some(PopupView {
            window: self.window,
            panel: self.panel,
            total_commits: self.window_total().unwrap_or_default(),
            contributors: slices.len(),
            slices,
            config,
        })
    }
}
