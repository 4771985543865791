//! Output sinks: the per-render destination that accumulates fragments
//! in emission order.
//!
//! A sink is scoped to exactly one render pass and must never be shared
//! between concurrent renders. It is passed explicitly to the composer
//! rather than held in any global state.

/// Destination for rendered fragments.
pub trait OutputSink {
    fn append(&mut self, fragment: &str);
}

/// Sink backed by a growable string buffer.
#[derive(Debug, Default)]
pub struct StringSink {
    buf: String,
}

impl StringSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

impl OutputSink for StringSink {
    fn append(&mut self, fragment: &str) {
        self.buf.push_str(fragment);
    }
}

impl OutputSink for String {
    fn append(&mut self, fragment: &str) {
        self.push_str(fragment);
    }
}
