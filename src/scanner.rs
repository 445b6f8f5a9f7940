//! The scanner: a mutex-guarded line reader with typed assignment,
//! prompting, cancellation, and no-echo reads.

use std::io::{self, BufRead, BufReader, Write};
use std::os::unix::io::RawFd;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

use crate::assign::Assign;
use crate::error::ScanError;
use crate::source::Source;
use crate::term;

/// Reads lines from an input stream and converts them into typed
/// destinations.
///
/// A `Scanner` is a cheaply cloneable handle; clones share the same
/// buffered reader, prompt writer, and lock. The lock serializes every
/// operation, so no two reads interleave their byte consumption, and
/// bytes buffered past a returned line stay available to the next call.
///
/// The prompt writer defaults to stderr so prompts stay visible when
/// stdout is redirected.
#[derive(Clone)]
pub struct Scanner {
    inner: Arc<Mutex<ScannerInner>>,
}

struct ScannerInner {
    reader: BufReader<Box<dyn Source>>,
    writer: Box<dyn Write + Send>,
}

impl ScannerInner {
    /// Read one line, blocking until a terminator or end-of-stream.
    ///
    /// Strips exactly one trailing terminator: CR-LF if present, else LF.
    /// A final partial line (bytes but no terminator) is returned as-is;
    /// end-of-stream with nothing read is [`ScanError::Eof`].
    fn read_line(&mut self) -> Result<String, ScanError> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            return Err(ScanError::Eof);
        }
        trim_terminator(&mut line);
        Ok(line)
    }

    /// The source's descriptor, if it is attached to an interactive
    /// terminal right now.
    fn terminal_fd(&self) -> Option<RawFd> {
        self.reader
            .get_ref()
            .terminal_fd()
            .filter(|&fd| term::is_terminal(fd))
    }

    fn write_prompt(&mut self, prompt: &str) {
        // Best effort: a broken prompt writer must not block the read.
        let _ = self.writer.write_all(prompt.as_bytes());
        let _ = self.writer.flush();
    }
}

impl Scanner {
    /// Create a scanner over `input`, prompting to stderr.
    pub fn new<S: Source + 'static>(input: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ScannerInner {
                reader: BufReader::new(Box::new(input)),
                writer: Box::new(io::stderr()),
            })),
        }
    }

    /// Replace the prompt writer, builder-style.
    #[must_use]
    pub fn with_writer<W: Write + Send + 'static>(self, writer: W) -> Self {
        self.set_writer(writer);
        self
    }

    /// Swap the input stream. Takes the lock, so an in-flight read keeps
    /// its old stream and only subsequent calls observe the new one.
    pub fn set_reader<S: Source + 'static>(&self, input: S) {
        let mut inner = self.inner.lock();
        inner.reader = BufReader::new(Box::new(input));
        tracing::trace!("scanner input stream replaced");
    }

    /// Swap the prompt writer, under the same locking rule as
    /// [`set_reader`](Scanner::set_reader).
    pub fn set_writer<W: Write + Send + 'static>(&self, writer: W) {
        let mut inner = self.inner.lock();
        inner.writer = Box::new(writer);
        tracing::trace!("scanner prompt writer replaced");
    }

    /// Read one trimmed line: CR-LF or LF is stripped, other trailing
    /// whitespace survives, and a terminator-less final line is returned
    /// without error.
    pub fn read_line(&self) -> Result<String, ScanError> {
        self.inner.lock().read_line()
    }

    /// Read one line and assign it into `dest`.
    ///
    /// A failed read (including [`ScanError::Eof`]) returns before any
    /// dispatch; a failed parse leaves `dest` untouched.
    pub fn scan<T: Assign>(&self, dest: &mut T) -> Result<(), ScanError> {
        let line = self.inner.lock().read_line()?;
        dest.assign(&line)?;
        Ok(())
    }

    /// Write `prompt` verbatim (no terminator added) to the prompt
    /// writer, then behave like [`scan`](Scanner::scan).
    ///
    /// The prompt is written even if the read then fails or is never
    /// answered; there is no rollback.
    pub fn scan_prompt<T: Assign>(&self, prompt: &str, dest: &mut T) -> Result<(), ScanError> {
        let line = {
            let mut inner = self.inner.lock();
            inner.write_prompt(prompt);
            inner.read_line()
        }?;
        dest.assign(&line)?;
        Ok(())
    }

    /// Read one line, racing the blocking read against `token`.
    ///
    /// The read runs on a blocking worker; whichever resolves first wins.
    /// If the token wins, this returns [`ScanError::Cancelled`] and
    /// `dest` is untouched. The worker itself cannot be interrupted: it
    /// keeps holding the scanner lock until the stream yields a line or
    /// closes, and the line it eventually produces is discarded. A
    /// subsequent read on this scanner blocks behind that abandoned
    /// worker. One blocked worker leaks per cancellation; that is the
    /// cost of cancelling a stream with no interrupt primitive.
    pub async fn scan_ctx<T: Assign>(
        &self,
        token: &CancellationToken,
        dest: &mut T,
    ) -> Result<(), ScanError> {
        let scanner = self.clone();
        let mut read = tokio::task::spawn_blocking(move || scanner.read_line());
        tokio::select! {
            joined = &mut read => {
                let line = joined.map_err(|err| ScanError::Io(io::Error::other(err)))??;
                dest.assign(&line)?;
                Ok(())
            }
            () = token.cancelled() => {
                tracing::debug!("scan cancelled; blocking read stays pending until the stream yields");
                Err(ScanError::Cancelled)
            }
        }
    }

    /// Read one line with terminal echo suppressed, then assign into
    /// `dest`.
    ///
    /// Echo is suppressed only when the source is attached to an
    /// interactive terminal, and is restored before this returns on
    /// every path: success, parse error, read error, or panic. On a
    /// non-terminal source this is exactly [`scan`](Scanner::scan).
    pub fn scan_secret<T: Assign>(&self, dest: &mut T) -> Result<(), ScanError> {
        let line = {
            let mut inner = self.inner.lock();
            match inner.terminal_fd() {
                Some(fd) => {
                    let saved = term::suppress_echo(fd)?;
                    let _restore = scopeguard::guard(saved, move |saved| {
                        term::restore(fd, saved);
                        tracing::trace!(fd, "echo restored");
                    });
                    tracing::trace!(fd, "echo suppressed for secret read");
                    inner.read_line()?
                }
                None => inner.read_line()?,
            }
        };
        dest.assign(&line)?;
        Ok(())
    }
}

/// Strip one trailing CR-LF pair, or one trailing LF. Anything else
/// (interior CRs, a lone trailing CR, trailing spaces) is preserved.
fn trim_terminator(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}
