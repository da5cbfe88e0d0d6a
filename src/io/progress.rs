//! Multi-show progress tracking with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static SHOW_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix:>14} [{bar:30.cyan/blue}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Shows: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// State of one show's row in the rolling display
#[derive(Debug, Clone, Default)]
struct ShowState {
    name: String,
    tiles_done: u64,
    tiles_total: u64,
    outcome: Option<&'static str>,
}

/// Coordinates progress display for a batch of shows
///
/// Shows one bar per show over its tiles, keeping only the most recent
/// shows visible, and adds a batch bar when there are more shows than bars.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    show_bars: Vec<ProgressBar>,
    show_states: Vec<ShowState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            show_bars: Vec::new(),
            show_states: Vec::new(),
        }
    }

    /// Create the bars for `show_count` shows
    pub fn initialize(&mut self, show_count: usize) {
        if show_count > MAX_INDIVIDUAL_PROGRESS_BARS {
            let batch_bar = ProgressBar::new(show_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..show_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(SHOW_STYLE.clone());
            self.show_bars.push(self.multi_progress.add(bar));
        }
        self.show_states = vec![ShowState::default(); show_count];
    }

    /// Begin tracking a show
    pub fn start_show(&mut self, index: usize, name: &str) {
        if let Some(state) = self.show_states.get_mut(index) {
            state.name = name.to_string();
        }
        self.update_bars();
    }

    /// Report the tile count once the show's layout is known
    pub fn set_tiles(&mut self, index: usize, tiles: usize) {
        if let Some(state) = self.show_states.get_mut(index) {
            state.tiles_total = tiles as u64;
        }
        self.update_bars();
    }

    /// Report one more tile written
    pub fn tile_written(&mut self, index: usize) {
        if let Some(state) = self.show_states.get_mut(index) {
            state.tiles_done += 1;
        }
        self.update_bars();
    }

    /// Mark a show as generated
    pub fn complete_show(&mut self, index: usize) {
        self.finish_show(index, "done");
    }

    /// Mark a show as rejected
    pub fn reject_show(&mut self, index: usize) {
        self.finish_show(index, "rejected");
    }

    /// Clear all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All shows processed");
        }
        let _ = self.multi_progress.clear();
    }

    /// Number of shows tracked
    pub fn show_count(&self) -> usize {
        self.show_states.len()
    }

    /// Number of shows with an outcome
    pub fn finished_count(&self) -> usize {
        self.show_states
            .iter()
            .filter(|state| state.outcome.is_some())
            .count()
    }

    fn finish_show(&mut self, index: usize, outcome: &'static str) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(state) = self.show_states.get_mut(index) {
            state.outcome = Some(outcome);
            state.tiles_done = state.tiles_total;
        }
        self.update_bars();
    }

    /// Point the bars at the most recently started shows
    fn update_bars(&self) {
        let started: Vec<&ShowState> = self
            .show_states
            .iter()
            .filter(|state| !state.name.is_empty())
            .collect();
        let start = started.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = started.get(start..).unwrap_or(&[]);

        for (bar, state) in self.show_bars.iter().zip(visible) {
            bar.set_length(state.tiles_total);
            bar.set_position(state.tiles_done);
            bar.set_prefix(state.name.clone());
            bar.set_message(match state.outcome {
                Some(outcome) => outcome.to_string(),
                None => format!("{}/{} tiles", state.tiles_done, state.tiles_total),
            });
        }

        for bar in self.show_bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_prefix(String::new());
            bar.set_message(String::new());
        }
    }
}
