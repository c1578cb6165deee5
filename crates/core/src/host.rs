//! Boundary adapter for the host sensor/rendering framework.
//!
//! The host invokes one callback per rendered frame with a mutable raw
//! buffer and its declared shape, and expects the buffer to be overwritten
//! in place before it is consumed. Everything aliasing-sensitive stays
//! here; the engine itself works on an owned ingest copy and a separate
//! output slice.

use crate::config::{BlurConfig, ConfigError};
use crate::engine::blur_engine::BlurEngine;
use crate::shared::frame::Frame;

/// Builds an engine from host-supplied configuration. Stands in for the
/// host's plugin-registration mechanism: the host discovers this factory,
/// not the engine internals.
pub fn create_engine(config: BlurConfig) -> Result<BlurEngine, ConfigError> {
    BlurEngine::new(config)
}

/// Owns an engine and exposes the host's per-frame callback contract.
///
/// Calls must be serialized and non-reentrant for a given adapter, which
/// the host guarantees; there is no internal locking.
#[derive(Debug)]
pub struct SensorAdapter {
    engine: BlurEngine,
}

impl SensorAdapter {
    pub fn new(engine: BlurEngine) -> Self {
        Self { engine }
    }

    pub fn engine(&self) -> &BlurEngine {
        &self.engine
    }

    /// Per-frame callback: averages `buffer` against the history and
    /// overwrites it in place.
    ///
    /// `width * height * depth` is the declared frame length and is
    /// authoritative: a longer buffer only has that prefix processed, and
    /// a buffer shorter than its declared shape is left untouched rather
    /// than read past its end. `format` is an informational tag and is not
    /// interpreted.
    pub fn on_new_frame(
        &mut self,
        buffer: &mut [u8],
        width: u32,
        height: u32,
        depth: u8,
        format: &str,
    ) {
        let declared = (width as usize) * (height as usize) * (depth as usize);
        log::trace!("frame callback: {width}x{height}x{depth} {format} ({declared} bytes)");

        if buffer.len() < declared {
            log::warn!(
                "frame buffer shorter than declared shape ({} < {declared} bytes), skipping",
                buffer.len()
            );
            return;
        }

        let frame = Frame::from_raw(&buffer[..declared], width, height, depth);
        self.engine.process(frame, &mut buffer[..declared]);
    }
}
