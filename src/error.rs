//! A custom binsniff error
//!

use core::result;
use std::io;

quick_error! {
    #[derive(Debug)]
    pub enum Error {
        /// The stream ended before a header field could be read in full.
        ///
        /// `wanted` is the number of bytes the read asked for, `offset` the stream
        /// position at which the read started.
        ShortRead { wanted: usize, offset: u64 } {
            display("Stream ended while reading {} byte(s) at offset {:#x}", wanted, offset)
        }
        /// An IO based error other than end-of-stream
        IO(err: io::Error) {
            from()
            source(err)
            display("{}", err)
        }
        /// An error emanating from reading and interpreting bytes
        Scroll(err: scroll::Error) {
            from()
            source(err)
            display("{}", err)
        }
    }
}

impl Error {
    /// Whether this error means the input was truncated, rather than unreadable
    pub fn is_short_read(&self) -> bool {
        matches!(self, Error::ShortRead { .. })
    }
}

/// An impish result
pub type Result<T> = result::Result<T, Error>;
