use super::history::HistoryWindow;

/// Per-position summation across the window, followed by truncating
/// division by the window length.
///
/// Sums are held in `u32`: the largest possible value is
/// `255 * window_len`, far below `u32::MAX` for any practical history.
/// The scratch buffer is reused across calls, so steady state performs no
/// allocation beyond the one ingest copy made by the engine.
#[derive(Debug, Default)]
pub struct Accumulator {
    sums: Vec<u32>,
}

impl Accumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes the per-position average of the window's frames into `out`.
    ///
    /// Declared lengths are authoritative: a frame shorter than `out`
    /// contributes zeros past its end rather than being read out of
    /// bounds. An empty window leaves `out` untouched.
    pub fn average_into(&mut self, window: &HistoryWindow, out: &mut [u8]) {
        let count = window.len() as u32;
        if count == 0 {
            return;
        }

        self.sums.clear();
        self.sums.resize(out.len(), 0);
        for frame in window.frames() {
            let data = frame.data();
            let n = data.len().min(out.len());
            for (sum, &sample) in self.sums[..n].iter_mut().zip(&data[..n]) {
                *sum += u32::from(sample);
            }
        }

        for (slot, &sum) in out.iter_mut().zip(self.sums.iter()) {
            *slot = (sum / count).min(255) as u8;
        }
    }
}
