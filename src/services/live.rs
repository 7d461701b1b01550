//! Frame-driven processing: sample, convolve, report.
//!
//! [`LiveProcessor`] holds the caller's selection (resolution, kernel,
//! border) and an injected, read-only [`PresetTable`]. Each call to
//! [`LiveProcessor::process_frame`] is independent: nothing from one frame
//! survives into the next.
//!
//! [`run_live`] drives a processor from a `tokio` interval at a bounded
//! frame rate. Ticks that fall behind are skipped rather than bunched up,
//! and a frame whose source is not ready is skipped and retried on the
//! next tick.

use std::sync::Arc;
use std::time::Duration;

use pixel_conv::{
    grid_to_csv, sample_to_grid, AlgorithmPreset, BorderMode, Convolver, DisplayMode, FrameSource,
    Kernel, PixelGrid, PresetTable, IDENTITY,
};
use tokio::time::{self, MissedTickBehavior};

use crate::error::ConfigError;
use crate::models::{validate_resolution, AppConfig};

/// One sampled frame and its filtered counterpart
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedFrame {
    /// The grid as sampled from the source
    pub base: PixelGrid,
    /// The grid after convolution
    pub filtered: PixelGrid,
}

impl ProcessedFrame {
    /// Export the filtered grid as CSV.
    pub fn to_csv(&self, mode: DisplayMode) -> String {
        grid_to_csv(&self.filtered, mode)
    }
}

/// Per-frame pipeline with caller-held settings
pub struct LiveProcessor {
    presets: Arc<PresetTable>,
    resolution: u32,
    convolver: Convolver,
    /// Id of the selected preset, `None` for a custom kernel
    preset_id: Option<String>,
}

impl LiveProcessor {
    /// Start with the identity preset and clamped borders.
    pub fn new(presets: Arc<PresetTable>, resolution: u32) -> Result<Self, ConfigError> {
        let resolution = validate_resolution(resolution)?;
        let mut processor = Self {
            presets,
            resolution,
            convolver: Convolver::new(IDENTITY),
            preset_id: None,
        };
        processor.select_preset(PresetTable::IDENTITY_ID)?;
        Ok(processor)
    }

    /// Apply the resolution, border and default preset from `config`.
    pub fn from_config(config: &AppConfig, presets: Arc<PresetTable>) -> Result<Self, ConfigError> {
        let mut processor = Self::new(presets, config.target_resolution()?)?;
        processor.set_border(config.border_mode()?);
        processor.select_preset(&config.default_preset)?;
        Ok(processor)
    }

    /// Switch to a preset from the table.
    pub fn select_preset(&mut self, id: &str) -> Result<&AlgorithmPreset, ConfigError> {
        let preset = self
            .presets
            .get(id)
            .ok_or_else(|| ConfigError::UnknownPreset(id.to_string()))?;
        self.convolver = Convolver::from_preset(preset).border(self.convolver.border_mode());
        self.preset_id = Some(preset.id.clone());
        tracing::debug!(preset = %preset.id, "Selected preset");
        Ok(preset)
    }

    /// Switch to a custom kernel.
    pub fn set_kernel(&mut self, kernel: Kernel) {
        self.convolver = Convolver::new(kernel).border(self.convolver.border_mode());
        self.preset_id = None;
        tracing::debug!(divisor = kernel.divisor(), "Selected custom kernel");
    }

    pub fn set_border(&mut self, border: BorderMode) {
        self.convolver = self.convolver.border(border);
    }

    pub fn set_resolution(&mut self, resolution: u32) -> Result<(), ConfigError> {
        self.resolution = validate_resolution(resolution)?;
        Ok(())
    }

    pub fn resolution(&self) -> u32 {
        self.resolution
    }

    pub fn border(&self) -> BorderMode {
        self.convolver.border_mode()
    }

    pub fn kernel(&self) -> &Kernel {
        self.convolver.kernel()
    }

    pub fn preset_id(&self) -> Option<&str> {
        self.preset_id.as_deref()
    }

    pub fn presets(&self) -> &PresetTable {
        &self.presets
    }

    /// Sample `source` at the current resolution and convolve it.
    ///
    /// Returns `None` when the source is not ready yet.
    pub fn process_frame<S>(&self, source: &S) -> Option<ProcessedFrame>
    where
        S: FrameSource + ?Sized,
    {
        if !source.is_ready() {
            tracing::debug!("Frame source not ready, skipping");
            return None;
        }
        let base = sample_to_grid(source, self.resolution)?;
        let filtered = self.convolver.apply(&base);
        Some(ProcessedFrame { base, filtered })
    }
}

/// Tick period for a frame rate.
///
/// Rates whose period is zero or does not fit a `Duration` are rejected.
pub fn frame_period(fps: f32) -> Result<Duration, ConfigError> {
    if !fps.is_finite() || fps <= 0.0 {
        return Err(ConfigError::InvalidFrameRate(fps));
    }
    let period =
        Duration::try_from_secs_f32(1.0 / fps).map_err(|_| ConfigError::InvalidFrameRate(fps))?;
    if period.is_zero() {
        return Err(ConfigError::InvalidFrameRate(fps));
    }
    Ok(period)
}

/// Outcome of a [`run_live`] session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LiveStats {
    pub processed: usize,
    pub skipped: usize,
}

/// Feed `frames` (cycled) through `processor`, one per tick, for `ticks`
/// ticks. `on_frame` receives the tick index and each processed frame.
pub async fn run_live<S, F>(
    processor: &LiveProcessor,
    frames: &[S],
    period: Duration,
    ticks: usize,
    mut on_frame: F,
) -> LiveStats
where
    S: FrameSource,
    F: FnMut(usize, &ProcessedFrame),
{
    let mut stats = LiveStats::default();
    if frames.is_empty() {
        return stats;
    }

    let mut interval = time::interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    for (tick, frame) in frames.iter().cycle().take(ticks).enumerate() {
        interval.tick().await;
        match processor.process_frame(frame) {
            Some(processed) => {
                stats.processed += 1;
                tracing::info!(
                    tick,
                    width = processed.filtered.width(),
                    height = processed.filtered.height(),
                    mean_in = processed.base.mean_gray(),
                    mean_out = processed.filtered.mean_gray(),
                    "Processed frame"
                );
                on_frame(tick, &processed);
            }
            None => stats.skipped += 1,
        }
    }

    tracing::info!(
        processed = stats.processed,
        skipped = stats.skipped,
        "Live session finished"
    );
    stats
}
