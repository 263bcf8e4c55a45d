//! Decoding options
//!
//! The only knob is how a truncated header is treated: as a failure (the default), or as the end
//! of what can be learned about the binary.

/// What a header cut short by the end of the stream means
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// The decode fails with [`Error::ShortRead`](crate::error::Error::ShortRead)
    #[default]
    Strict,
    /// The decode succeeds with whatever was read before the stream ended
    Permissive,
}

impl ParseMode {
    pub(crate) fn is_permissive(self) -> bool {
        self == ParseMode::Permissive
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub parse_mode: ParseMode,
}

impl ParseOptions {
    pub fn new() -> Self {
        Default::default()
    }

    /// Shorthand for `ParseOptions::new().with_parse_mode(ParseMode::Permissive)`
    pub fn permissive() -> Self {
        Self::new().with_parse_mode(ParseMode::Permissive)
    }

    pub fn with_parse_mode(self, parse_mode: ParseMode) -> Self {
        ParseOptions { parse_mode }
    }
}

/// Helper trait to ease permissive decoding fallbacks.
///
/// When `permissive` is true, a short read is downgraded to a warning and a default value is
/// used instead; every other error, and every error in strict mode, is propagated.
pub(crate) trait Permissive<T> {
    fn or_permissive_and_default(self, permissive: bool, context: &str) -> crate::error::Result<T>;
}

impl<T: Default> Permissive<T> for crate::error::Result<T> {
    fn or_permissive_and_default(self, permissive: bool, context: &str) -> crate::error::Result<T> {
        self.or_else(|e| {
            if permissive && e.is_short_read() {
                log::warn!("{context}: {e}, continuing with what was decoded");
                Ok(T::default())
            } else {
                Err(e)
            }
        })
    }
}
