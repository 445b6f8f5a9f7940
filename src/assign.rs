//! Type-directed assignment of a raw line into a caller's destination.

use crate::error::AssignError;

/// Destinations a scanned line can be converted into.
///
/// The supported set is intentionally closed and enumerated: `String`
/// (verbatim), `bool`, signed and unsigned integers at every width,
/// and both float precisions. Anything else is rejected at compile
/// time, with the offending type named in the rustc error:
///
/// ```compile_fail
/// let scanner = scanline::Scanner::new(&b"data\n"[..]);
/// let mut dest: Vec<u8> = Vec::new();
/// scanner.scan(&mut dest).unwrap(); // Vec<u8>: Assign is not satisfied
/// ```
///
/// Caller-defined types join the set by implementing the trait. This is
/// the sole extension point, in place of an open reflection-style
/// conversion table:
///
/// ```
/// use scanline::{Assign, AssignError, Scanner};
///
/// enum Mode {
///     Fast,
///     Safe,
/// }
///
/// impl Assign for Mode {
///     fn assign(&mut self, raw: &str) -> Result<(), AssignError> {
///         *self = match raw.trim() {
///             "fast" => Mode::Fast,
///             "safe" => Mode::Safe,
///             other => return Err(AssignError::parse("Mode", format!("unknown mode {other:?}"))),
///         };
///         Ok(())
///     }
/// }
///
/// let scanner = Scanner::new(&b"fast\n"[..]);
/// let mut mode = Mode::Safe;
/// scanner.scan(&mut mode)?;
/// assert!(matches!(mode, Mode::Fast));
/// # Ok::<(), scanline::ScanError>(())
/// ```
///
/// On failure the destination keeps its prior value.
pub trait Assign {
    /// Convert `raw` (one line, terminator already trimmed) into `self`.
    fn assign(&mut self, raw: &str) -> Result<(), AssignError>;
}

impl Assign for String {
    /// Assigned verbatim, whitespace and all. Never fails.
    fn assign(&mut self, raw: &str) -> Result<(), AssignError> {
        *self = raw.to_owned();
        Ok(())
    }
}

impl Assign for bool {
    /// Case-insensitive `1`/`t`/`true` and `0`/`f`/`false`, after
    /// trimming surrounding whitespace.
    fn assign(&mut self, raw: &str) -> Result<(), AssignError> {
        let trimmed = raw.trim();
        *self = match trimmed.to_ascii_lowercase().as_str() {
            "1" | "t" | "true" => true,
            "0" | "f" | "false" => false,
            _ => {
                return Err(AssignError::parse(
                    "bool",
                    format!("invalid boolean literal {trimmed:?}"),
                ))
            }
        };
        Ok(())
    }
}

macro_rules! assign_signed {
    ($($ty:ty),* $(,)?) => {$(
        impl Assign for $ty {
            fn assign(&mut self, raw: &str) -> Result<(), AssignError> {
                let value = raw
                    .trim()
                    .parse::<$ty>()
                    .map_err(|err| AssignError::parse(stringify!($ty), err))?;
                *self = value;
                Ok(())
            }
        }
    )*};
}

// Unsigned widths reject any leading sign before parsing; Rust's own
// parser would let a `+` through.
macro_rules! assign_unsigned {
    ($($ty:ty),* $(,)?) => {$(
        impl Assign for $ty {
            fn assign(&mut self, raw: &str) -> Result<(), AssignError> {
                let trimmed = raw.trim();
                if trimmed.starts_with('+') || trimmed.starts_with('-') {
                    return Err(AssignError::parse(
                        stringify!($ty),
                        "a leading sign is not accepted",
                    ));
                }
                let value = trimmed
                    .parse::<$ty>()
                    .map_err(|err| AssignError::parse(stringify!($ty), err))?;
                *self = value;
                Ok(())
            }
        }
    )*};
}

macro_rules! assign_float {
    ($($ty:ty),* $(,)?) => {$(
        impl Assign for $ty {
            fn assign(&mut self, raw: &str) -> Result<(), AssignError> {
                let value = raw
                    .trim()
                    .parse::<$ty>()
                    .map_err(|err| AssignError::parse(stringify!($ty), err))?;
                *self = value;
                Ok(())
            }
        }
    )*};
}

assign_signed!(i8, i16, i32, i64, isize);
assign_unsigned!(u8, u16, u32, u64, usize);
assign_float!(f32, f64);
