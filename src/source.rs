//! Input stream abstraction for [`Scanner`](crate::Scanner).

use std::fs::File;
use std::io::{self, Read};
use std::os::unix::io::{AsRawFd, RawFd};

/// A byte stream a [`Scanner`](crate::Scanner) can read lines from.
///
/// `terminal_fd` exposes the raw descriptor for streams that may be
/// attached to an interactive terminal; the scanner probes it with
/// `isatty` before suppressing echo for a secret read. The default of
/// `None` means secret reads behave like plain reads, which is the right
/// answer for pipes, buffers, and test doubles.
pub trait Source: Read + Send {
    /// Raw descriptor used for terminal probing and echo control.
    fn terminal_fd(&self) -> Option<RawFd> {
        None
    }
}

impl Source for io::Stdin {
    fn terminal_fd(&self) -> Option<RawFd> {
        Some(self.as_raw_fd())
    }
}

impl Source for File {
    fn terminal_fd(&self) -> Option<RawFd> {
        Some(self.as_raw_fd())
    }
}

impl Source for io::Empty {}

impl<T: AsRef<[u8]> + Send> Source for io::Cursor<T> {}

impl Source for &'static [u8] {}
