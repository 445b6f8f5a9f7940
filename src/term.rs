//! Terminal echo control for secret reads.
//!
//! Thin wrappers over termios. Callers hold the scanner lock while these
//! run, so attribute changes never interleave with another read.

use std::io;
use std::os::unix::io::RawFd;

pub(crate) fn is_terminal(fd: RawFd) -> bool {
    unsafe { libc::isatty(fd) == 1 }
}

/// Clear the ECHO flag on `fd`, returning the attributes to restore.
pub(crate) fn suppress_echo(fd: RawFd) -> io::Result<libc::termios> {
    unsafe {
        let mut attrs: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(fd, &mut attrs) != 0 {
            return Err(io::Error::last_os_error());
        }
        let saved = attrs;
        attrs.c_lflag &= !libc::ECHO;
        if libc::tcsetattr(fd, libc::TCSANOW, &attrs) != 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(saved)
    }
}

/// Reinstate previously saved attributes. Failures are swallowed: this
/// runs on every exit path, including unwinding, where there is nobody
/// left to report to.
pub(crate) fn restore(fd: RawFd, saved: libc::termios) {
    unsafe {
        let _ = libc::tcsetattr(fd, libc::TCSANOW, &saved);
    }
}
