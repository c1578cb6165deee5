use std::collections::VecDeque;

use crate::shared::frame::Frame;

/// Sliding window over the most recent frames, oldest first.
///
/// Holds up to `history_size + 1` frames while an average is being
/// computed and `history_size` frames between callbacks. Backed by a
/// `VecDeque` pre-allocated to full capacity, so steady-state pushes and
/// evictions never reallocate.
#[derive(Debug)]
pub struct HistoryWindow {
    frames: VecDeque<Frame>,
    capacity: usize,
}

impl HistoryWindow {
    pub fn new(history_size: usize) -> Self {
        let capacity = history_size + 1;
        Self {
            frames: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, frame: Frame) {
        self.frames.push_back(frame);
    }

    /// Drops the oldest frame once the window has reached capacity, so the
    /// next push stays within bounds. No-op below capacity.
    pub fn evict_oldest_if_full(&mut self) {
        if self.frames.len() >= self.capacity {
            self.frames.pop_front();
        }
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Byte length of the oldest frame, the reference for resize
    /// detection. `None` when the window is empty.
    pub fn reference_size(&self) -> Option<usize> {
        self.frames.front().map(Frame::len)
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn frames(&self) -> impl Iterator<Item = &Frame> {
        self.frames.iter()
    }
}
