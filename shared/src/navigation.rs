//! Keyboard highlight for listboxes: combobox results, radio groups, menus.

/// Highlighted position within a list whose entries may be disabled.
///
/// Movement wraps around and skips disabled entries. A list with no enabled
/// entry never gets a highlight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCursor {
    highlighted: Option<usize>,
    disabled: Vec<bool>,
}

impl ListCursor {
    /// Cursor over `len` enabled entries, nothing highlighted.
    pub fn new(len: usize) -> Self {
        Self {
            highlighted: None,
            disabled: vec![false; len],
        }
    }

    /// Cursor over entries flagged as disabled or not.
    pub fn with_disabled(disabled: Vec<bool>) -> Self {
        Self {
            highlighted: None,
            disabled,
        }
    }

    pub fn len(&self) -> usize {
        self.disabled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disabled.is_empty()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Replace the entries, keeping the highlight only if it is still valid.
    pub fn reset(&mut self, disabled: Vec<bool>) {
        self.disabled = disabled;
        if let Some(idx) = self.highlighted {
            if !self.is_enabled(idx) {
                self.highlighted = None;
            }
        }
    }

    pub fn clear(&mut self) {
        self.highlighted = None;
    }

    /// Highlight `idx` if it exists and is enabled. Returns whether it moved.
    pub fn highlight(&mut self, idx: usize) -> bool {
        if self.is_enabled(idx) {
            self.highlighted = Some(idx);
            true
        } else {
            false
        }
    }

    pub fn next(&mut self) -> Option<usize> {
        let start = match self.highlighted {
            Some(idx) => idx + 1,
            None => 0,
        };
        self.highlighted = self.scan(start, 1).or(self.highlighted);
        self.highlighted
    }

    pub fn previous(&mut self) -> Option<usize> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        let start = match self.highlighted {
            Some(idx) => idx + len - 1,
            None => len - 1,
        };
        self.highlighted = self.scan(start, len - 1).or(self.highlighted);
        self.highlighted
    }

    fn is_enabled(&self, idx: usize) -> bool {
        self.disabled.get(idx).is_some_and(|disabled| !disabled)
    }

    /// First enabled index visited from `start`, advancing by `stride` modulo len.
    fn scan(&self, start: usize, stride: usize) -> Option<usize> {
        let len = self.len();
        (0..len)
            .map(|offset| (start + offset * stride) % len)
            .find(|idx| self.is_enabled(*idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_next_starts_at_first_entry_and_wraps() {
        let mut cursor = ListCursor::new(3);
        assert_eq!(cursor.next(), Some(0));
        assert_eq!(cursor.next(), Some(1));
        assert_eq!(cursor.next(), Some(2));
        assert_eq!(cursor.next(), Some(0));
    }

    #[test]
    fn test_previous_starts_at_last_entry_and_wraps() {
        let mut cursor = ListCursor::new(3);
        assert_eq!(cursor.previous(), Some(2));
        assert_eq!(cursor.previous(), Some(1));
        assert_eq!(cursor.previous(), Some(0));
        assert_eq!(cursor.previous(), Some(2));
    }

    #[test]
    fn test_skips_disabled_entries() {
        let mut cursor = ListCursor::with_disabled(vec![false, true, false]);
        assert_eq!(cursor.next(), Some(0));
        assert_eq!(cursor.next(), Some(2));
        assert_eq!(cursor.previous(), Some(0));
        assert!(!cursor.highlight(1));
        assert_eq!(cursor.highlighted(), Some(0));
    }

    #[test]
    fn test_empty_or_all_disabled_never_highlights() {
        let mut empty = ListCursor::new(0);
        assert_eq!(empty.next(), None);
        assert_eq!(empty.previous(), None);

        let mut disabled = ListCursor::with_disabled(vec![true, true]);
        assert_eq!(disabled.next(), None);
        assert_eq!(disabled.previous(), None);
    }

    #[test]
    fn test_reset_drops_stale_highlight() {
        let mut cursor = ListCursor::new(5);
        cursor.highlight(4);
        cursor.reset(vec![false, false]);
        assert_eq!(cursor.highlighted(), None);

        cursor.highlight(1);
        cursor.reset(vec![false, false, false]);
        assert_eq!(cursor.highlighted(), Some(1));
    }
}
