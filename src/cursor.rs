//! A forward-only, endian-aware reader over a byte stream.
//!
//! Every decoder in this crate consumes its input strictly in order: there is no seeking
//! backwards, and skipping ahead discards bytes rather than repositioning. A read that runs out
//! of input is reported as [`Error::ShortRead`](crate::error::Error::ShortRead), which callers
//! can tell apart from any other I/O failure.

use std::io::{self, Read};

use scroll::Pread;

use crate::error;

/// A sequential reader that remembers how many bytes it has consumed
#[derive(Debug)]
pub struct ByteCursor<R> {
    inner: R,
    position: u64,
}

impl<R: Read> ByteCursor<R> {
    /// Wrap `inner`; the current position of `inner` is treated as offset 0
    pub fn new(inner: R) -> Self {
        ByteCursor { inner, position: 0 }
    }

    /// Number of bytes consumed so far
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Give back the underlying reader, positioned right after the last consumed byte
    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Fill `buf` completely, or fail with `ShortRead`.
    ///
    /// Bytes consumed before a failure still count towards [`position`](Self::position).
    pub fn read_exact(&mut self, buf: &mut [u8]) -> error::Result<()> {
        let offset = self.position;
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => {
                    return Err(error::Error::ShortRead {
                        wanted: buf.len(),
                        offset,
                    });
                }
                Ok(read) => {
                    filled += read;
                    self.position += read as u64;
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }

    /// Read a fixed run of `N` raw bytes
    pub fn read_array<const N: usize>(&mut self) -> error::Result<[u8; N]> {
        let mut bytes = [0u8; N];
        self.read_exact(&mut bytes)?;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> error::Result<u8> {
        let [byte] = self.read_array::<1>()?;
        Ok(byte)
    }

    /// Read a `u16` in the byte order `le`
    pub fn read_u16(&mut self, le: scroll::Endian) -> error::Result<u16> {
        let bytes = self.read_array::<2>()?;
        Ok(bytes[..].pread_with::<u16>(0, le)?)
    }

    /// Read a `u32` in the byte order `le`
    pub fn read_u32(&mut self, le: scroll::Endian) -> error::Result<u32> {
        let bytes = self.read_array::<4>()?;
        Ok(bytes[..].pread_with::<u32>(0, le)?)
    }

    /// Discard the next `count` bytes; running out of input is a `ShortRead`
    pub fn skip(&mut self, count: u64) -> error::Result<()> {
        let offset = self.position;
        let skipped = io::copy(&mut (&mut self.inner).take(count), &mut io::sink())?;
        self.position += skipped;
        if skipped < count {
            return Err(error::Error::ShortRead {
                wanted: count as usize,
                offset,
            });
        }
        Ok(())
    }
}
