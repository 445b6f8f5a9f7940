//! Minimal helpers for line-based input in command-line programs.
//!
//! Reads a full line from an input stream (spaces included), trims the
//! trailing terminator, and assigns the result into a typed destination:
//! `String`, `bool`, any integer width, `f32`/`f64`, or any type
//! implementing [`Assign`].
//!
//! Helpers for interactive programs:
//!
//! - [`Scanner::scan_prompt`] prints a prompt (to stderr by default) and
//!   then reads a line.
//! - [`Scanner::scan_ctx`] races the read against a [`CancellationToken`].
//! - [`Scanner::scan_secret`] reads without echo when the input is an
//!   interactive terminal.
//!
//! Package-level functions operate on a default scanner wired to
//! stdin/stderr. For custom I/O, construct a [`Scanner`] directly:
//!
//! ```no_run
//! let mut age: u32 = 0;
//! scanline::scan_prompt("age: ", &mut age)?;
//! # Ok::<(), scanline::ScanError>(())
//! ```

mod assign;
mod default;
mod error;
mod scanner;
mod source;
mod term;

pub use assign::Assign;
pub use default::{
    default_scanner, read_line, scan, scan_ctx, scan_prompt, scan_secret, set_default_reader,
    set_default_writer,
};
pub use error::{AssignError, ScanError};
pub use scanner::Scanner;
pub use source::Source;
pub use tokio_util::sync::CancellationToken;
