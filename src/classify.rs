/// Byte-level state machine tracking whether the cursor is inside a JSON
/// string literal, with backslash-escape awareness. Shared by every stage
/// that must distinguish structural bytes from string content.
#[derive(Default, Clone, Copy)]
pub(crate) struct StringTracker {
    in_string: bool,
    escape: bool,
}

impl StringTracker {
    /// Feed one byte; returns whether that byte was string content or an
    /// enclosing quote (i.e. not structural).
    pub(crate) fn step(&mut self, b: u8) -> bool {
        if self.in_string {
            if self.escape {
                self.escape = false;
            } else if b == b'\\' {
                self.escape = true;
            } else if b == b'"' {
                self.in_string = false;
            }
            true
        } else if b == b'"' {
            self.in_string = true;
            true
        } else {
            false
        }
    }

    pub(crate) fn in_string(&self) -> bool {
        self.in_string
    }
}

#[inline]
pub(crate) fn is_closer(b: u8) -> bool {
    b == b'}' || b == b']'
}

#[inline]
pub(crate) fn is_ws(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}
