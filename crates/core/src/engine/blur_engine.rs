use log::{debug, warn};

use crate::config::{BlurConfig, ConfigError};
use crate::shared::frame::Frame;

use super::accumulator::Accumulator;
use super::history::HistoryWindow;
use super::reset::ResetPolicy;

/// `Warming` until the window first reaches capacity, `Steady` afterwards.
/// A reset event re-enters `Warming`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Warming,
    Steady,
}

/// Per-frame orchestration of the motion blur pipeline.
///
/// Each callback runs, in order: reset check, ingest, average, evict.
/// The order matters: the average for a callback always includes the
/// just-ingested frame, and eviction happens only after the average has
/// been written.
#[derive(Debug)]
pub struct BlurEngine {
    config: BlurConfig,
    window: HistoryWindow,
    policy: ResetPolicy,
    accumulator: Accumulator,
    state: EngineState,
}

impl BlurEngine {
    /// Fails fast on an invalid configuration so the caller decides on
    /// fallback instead of inheriting a silent default.
    pub fn new(config: BlurConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            window: HistoryWindow::new(config.history_size),
            policy: ResetPolicy::new(config.history_size, config.reset_always),
            accumulator: Accumulator::new(),
            state: EngineState::Warming,
            config,
        })
    }

    pub fn config(&self) -> &BlurConfig {
        &self.config
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Frames currently retained for the next callback.
    pub fn window_len(&self) -> usize {
        self.window.len()
    }

    /// Processes one frame and writes the averaged result into `out`.
    ///
    /// `out` is expected to be the same length as the frame; in the host
    /// adapter it is the very buffer the frame was copied from, which
    /// preserves the overwrite-in-place contract without aliasing the
    /// stored copy.
    pub fn process(&mut self, frame: Frame, out: &mut [u8]) {
        debug_assert_eq!(frame.len(), out.len(), "output length must match frame");

        if self.policy.should_reset(frame.len(), &self.window) {
            warn!(
                "frame resized ({} -> {} bytes), restarting blur history",
                self.window.reference_size().unwrap_or(0),
                frame.len()
            );
            self.window.clear();
            self.state = EngineState::Warming;
        }

        self.window.push(frame);
        self.accumulator.average_into(&self.window, out);
        let averaged = self.window.len();
        self.window.evict_oldest_if_full();

        if averaged >= self.window.capacity() {
            if self.state == EngineState::Warming {
                self.state = EngineState::Steady;
                debug!("blur history full ({averaged} frames), steady state");
            }
        } else {
            debug!(
                "building blur history ({averaged}/{} frames)",
                self.window.capacity()
            );
        }
    }

    /// Owned-output convenience over [`process`](Self::process).
    pub fn process_frame(&mut self, frame: Frame) -> Frame {
        let (width, height, depth) = (frame.width(), frame.height(), frame.depth());
        let mut out = vec![0u8; frame.len()];
        self.process(frame, &mut out);
        Frame::new(out, width, height, depth)
    }
}
