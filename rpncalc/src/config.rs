use crate::stack::DEFAULT_CAPACITY;

pub const DEFAULT_BUFFER_LEN: usize = 100;

/// Bounds and validation policy shared by the converter and the evaluator.
///
/// `buffer_len` counts characters including one terminator slot, so an
/// expression must be at most `buffer_len - 1` characters long and so must
/// the postfix text written for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub stack_capacity: usize,
    pub buffer_len: usize,
    /// Reject unknown characters, malformed literals and unknown postfix
    /// words instead of skipping or truncating them.
    pub strict: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            stack_capacity: DEFAULT_CAPACITY,
            buffer_len: DEFAULT_BUFFER_LEN,
            strict: false,
        }
    }
}

impl Config {
    pub fn strict() -> Self {
        Config{strict: true, ..Config::default()}
    }

    pub fn with_stack_capacity(mut self, capacity: usize) -> Self {
        self.stack_capacity = capacity;
        self
    }

    pub fn with_buffer_len(mut self, len: usize) -> Self {
        self.buffer_len = len;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
