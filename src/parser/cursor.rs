//! Cursor over one line of entry text.

/// Where a [`InputCursor::scan_to`] call stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The requested delimiter was found and consumed
    Delimiter,
    /// A newline came first and was consumed
    Newline,
    /// The text ran out before either
    EndOfInput,
}

#[derive(Debug, Clone)]
pub struct InputCursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> InputCursor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Unconsumed text
    pub fn remaining(&self) -> &'a str {
        &self.text[self.pos..]
    }

    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.text.len()
    }

    /// Consume `len` bytes. Callers pass lengths taken from matches on
    /// [`remaining`](Self::remaining), so the position stays on a char boundary.
    pub fn advance(&mut self, len: usize) {
        self.pos = (self.pos + len).min(self.text.len());
    }

    /// Skip ahead through the first `delimiter` or newline, whichever comes first.
    pub fn scan_to(&mut self, delimiter: char) -> ScanOutcome {
        let rest = self.remaining();
        match rest.char_indices().find(|&(_, c)| c == delimiter || c == '\n') {
            Some((idx, c)) => {
                self.advance(idx + c.len_utf8());
                if c == delimiter {
                    ScanOutcome::Delimiter
                } else {
                    ScanOutcome::Newline
                }
            }
            None => {
                self.advance(rest.len());
                ScanOutcome::EndOfInput
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_to_delimiter() {
        let mut cursor = InputCursor::new("m - 5:00pm\n");
        assert_eq!(cursor.scan_to('-'), ScanOutcome::Delimiter);
        assert_eq!(cursor.remaining(), " 5:00pm\n");
    }

    #[test]
    fn test_scan_to_newline_first() {
        let mut cursor = InputCursor::new("m\n9:00am");
        assert_eq!(cursor.scan_to(','), ScanOutcome::Newline);
        assert_eq!(cursor.remaining(), "9:00am");
    }

    #[test]
    fn test_scan_to_end_of_input() {
        let mut cursor = InputCursor::new("pm trailing");
        assert_eq!(cursor.scan_to(','), ScanOutcome::EndOfInput);
        assert!(cursor.is_exhausted());
        assert_eq!(cursor.scan_to(','), ScanOutcome::EndOfInput);
    }

    #[test]
    fn test_scan_handles_multibyte_junk() {
        let mut cursor = InputCursor::new("→ é, 2:00pm");
        assert_eq!(cursor.scan_to(','), ScanOutcome::Delimiter);
        assert_eq!(cursor.remaining(), " 2:00pm");
    }
}
