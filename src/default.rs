//! The process-wide default scanner and its package-level mirrors.
//!
//! The default instance is bound to stdin/stderr and created lazily on
//! first use. It is a convenience layer over [`Scanner`]; anything that
//! needs custom I/O (tests, pipes) should construct its own instance.

use std::io::{self, Write};
use std::sync::LazyLock;

use tokio_util::sync::CancellationToken;

use crate::assign::Assign;
use crate::error::ScanError;
use crate::scanner::Scanner;
use crate::source::Source;

static DEFAULT: LazyLock<Scanner> = LazyLock::new(|| Scanner::new(io::stdin()));

/// A handle to the process-wide default scanner.
pub fn default_scanner() -> Scanner {
    DEFAULT.clone()
}

/// Rebind the default scanner's input stream.
pub fn set_default_reader<S: Source + 'static>(input: S) {
    DEFAULT.set_reader(input);
}

/// Rebind the default scanner's prompt writer.
pub fn set_default_writer<W: Write + Send + 'static>(writer: W) {
    DEFAULT.set_writer(writer);
}

/// [`Scanner::read_line`] on the default instance.
pub fn read_line() -> Result<String, ScanError> {
    DEFAULT.read_line()
}

/// [`Scanner::scan`] on the default instance.
pub fn scan<T: Assign>(dest: &mut T) -> Result<(), ScanError> {
    DEFAULT.scan(dest)
}

/// [`Scanner::scan_prompt`] on the default instance.
pub fn scan_prompt<T: Assign>(prompt: &str, dest: &mut T) -> Result<(), ScanError> {
    DEFAULT.scan_prompt(prompt, dest)
}

/// [`Scanner::scan_ctx`] on the default instance.
pub async fn scan_ctx<T: Assign>(
    token: &CancellationToken,
    dest: &mut T,
) -> Result<(), ScanError> {
    DEFAULT.scan_ctx(token, dest).await
}

/// [`Scanner::scan_secret`] on the default instance.
pub fn scan_secret<T: Assign>(dest: &mut T) -> Result<(), ScanError> {
    DEFAULT.scan_secret(dest)
}
