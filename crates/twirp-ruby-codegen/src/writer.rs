//! Line-oriented Ruby source buffer.

use std::fmt;

/// Block nesting level. Each level is two spaces of indentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Depth(pub usize);

impl Depth {
    pub const ROOT: Depth = Depth(0);

    pub fn deeper(self) -> Depth {
        Depth(self.0 + 1)
    }

    /// Saturates at [`Depth::ROOT`].
    pub fn shallower(self) -> Depth {
        Depth(self.0.saturating_sub(1))
    }
}

impl fmt::Display for Depth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.0 {
            f.write_str("  ")?;
        }
        Ok(())
    }
}

/// Append-only text buffer; every write ends with a newline.
#[derive(Debug, Default)]
pub struct RubyWriter {
    buf: String,
}

impl RubyWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `text` indented to `depth`.
    pub fn line(&mut self, depth: Depth, text: impl fmt::Display) {
        use fmt::Write as _;
        // Writing into a String cannot fail.
        let _ = writeln!(self.buf, "{depth}{text}");
    }

    /// Empty line, no indentation.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn finish(self) -> String {
        self.buf
    }
}
