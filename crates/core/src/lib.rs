//! Motion blur for a live frame stream, produced by averaging each incoming
//! frame with a bounded history of its predecessors.
//!
//! The host rendering loop hands the engine one raw frame per callback; the
//! engine keeps the most recent `history_size + 1` frames in a sliding
//! window and replaces the frame with the per-channel average of the
//! window's contents. Format conversion and I/O stay outside this crate;
//! pixel data is treated as opaque bytes.

pub mod config;
pub mod engine;
pub mod host;
pub mod shared;
