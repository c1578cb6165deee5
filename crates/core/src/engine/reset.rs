use super::history::HistoryWindow;

/// Decides when a frame-size change must flush the history.
///
/// The legacy engine only compared sizes while the window was still
/// filling (`len < history_size`), so a resize arriving in steady state
/// went undetected. That behavior is preserved as the default;
/// `reset_always` compares on every frame instead. See `BlurConfig`.
#[derive(Debug, Clone, Copy)]
pub struct ResetPolicy {
    history_size: usize,
    reset_always: bool,
}

impl ResetPolicy {
    pub fn new(history_size: usize, reset_always: bool) -> Self {
        Self {
            history_size,
            reset_always,
        }
    }

    /// True when the window must be cleared before ingesting a frame of
    /// `incoming_len` bytes. An empty window never resets.
    pub fn should_reset(&self, incoming_len: usize, window: &HistoryWindow) -> bool {
        let Some(reference) = window.reference_size() else {
            return false;
        };
        if incoming_len == reference {
            return false;
        }
        self.reset_always || window.len() < self.history_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::frame::Frame;

    fn window_with_frames(history_size: usize, count: usize, frame_len: usize) -> HistoryWindow {
        let mut window = HistoryWindow::new(history_size);
        for _ in 0..count {
            window.push(Frame::new(vec![0; frame_len], frame_len as u32, 1, 1));
        }
        window
    }

    #[test]
    fn test_empty_window_never_resets() {
        let policy = ResetPolicy::new(3, false);
        let window = HistoryWindow::new(3);
        assert!(!policy.should_reset(10, &window));
    }

    #[test]
    fn test_matching_size_never_resets() {
        let policy = ResetPolicy::new(3, false);
        let window = window_with_frames(3, 2, 10);
        assert!(!policy.should_reset(10, &window));
    }

    #[test]
    fn test_mismatch_while_filling_resets() {
        let policy = ResetPolicy::new(3, false);
        let window = window_with_frames(3, 2, 10);
        assert!(policy.should_reset(20, &window));
    }

    #[test]
    fn test_mismatch_in_steady_state_ignored_by_default() {
        let policy = ResetPolicy::new(3, false);
        let window = window_with_frames(3, 3, 10);
        assert!(!policy.should_reset(20, &window));
    }

    #[test]
    fn test_mismatch_in_steady_state_resets_when_always() {
        let policy = ResetPolicy::new(3, true);
        let window = window_with_frames(3, 3, 10);
        assert!(policy.should_reset(20, &window));
    }

    #[test]
    fn test_default_policy_never_fires_with_history_of_one() {
        // With history_size = 1 the window holds one frame between
        // callbacks, so the filling-phase check can never trigger.
        let policy = ResetPolicy::new(1, false);
        let window = window_with_frames(1, 1, 10);
        assert!(!policy.should_reset(20, &window));
    }
}
