use itertools::Itertools as _;

use super::RangeSlider;

impl RangeSlider {
    pub(super) fn debug_log_event(&mut self, message: impl Into<String>) {
        if !self.options.debug_event_log {
            return;
        }
        self.push_debug_log_line(message.into());
    }

    fn push_debug_log_line(&mut self, message: String) {
        let cap = self.options.debug_capacity();
        while self.debug_log.len() >= cap {
            self.debug_log.pop_front();
        }
        self.debug_seq = self.debug_seq.wrapping_add(1);
        let seq = self.debug_seq;
        self.debug_log.push_back(format!("[{seq:>4}] {message}"));
    }

    /// The recorded session events, oldest first, one per line.
    ///
    /// Empty unless [`super::RangeSliderOptions::debug_event_log`] is set.
    pub fn debug_log_text(&self) -> String {
        self.debug_log.iter().join("\n")
    }

    pub fn debug_log_clear(&mut self) {
        self.debug_log.clear();
    }
}
