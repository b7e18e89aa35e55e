//! Error types for macro I/O and editing

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Which operand of a two-macro operation an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
    /// The single operand of a one-macro operation
    Input,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => f.write_str("first"),
            Side::Second => f.write_str("second"),
            Side::Input => f.write_str("input"),
        }
    }
}

/// A bounded frame argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    SliceStart,
    SliceEnd,
    TrimEnd,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::SliceStart => f.write_str("start frame"),
            Bound::SliceEnd => f.write_str("end frame"),
            Bound::TrimEnd => f.write_str("trim end frame"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MacroError {
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Seed-anchored operations need at least one seed event
    #[error("{side} macro does not have any saved rng seeds")]
    NoSeedData { side: Side },

    #[error("{field} {value} is larger than macro size {bound}")]
    OutOfRange { field: Bound, value: u32, bound: u32 },

    #[error("start frame {start} is greater than or equal to end frame {end}")]
    EmptyOrInvertedRange { start: u32, end: u32 },

    /// A splice anchor seed points outside its macro's inputs
    #[error("{side} macro has a seed at frame {frame} outside its {frame_count} input frames")]
    AnchorOutOfRange {
        side: Side,
        frame: i32,
        frame_count: usize,
    },

    #[error("frame index {frame} shifted by {shift} does not fit in 32 bits")]
    FrameIndexOverflow { frame: i64, shift: i64 },
}

pub type Result<T> = std::result::Result<T, MacroError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failed_precondition() {
        assert_eq!(
            MacroError::NoSeedData { side: Side::Second }.to_string(),
            "second macro does not have any saved rng seeds"
        );
        assert_eq!(
            MacroError::OutOfRange {
                field: Bound::SliceEnd,
                value: 12,
                bound: 10
            }
            .to_string(),
            "end frame 12 is larger than macro size 10"
        );
        assert_eq!(
            MacroError::EmptyOrInvertedRange { start: 5, end: 5 }.to_string(),
            "start frame 5 is greater than or equal to end frame 5"
        );
    }

    #[test]
    fn io_error_keeps_path_and_source() {
        let err = MacroError::Io {
            path: PathBuf::from("missing.gzm"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(err.to_string(), "I/O error on 'missing.gzm': no such file");
        assert!(std::error::Error::source(&err).is_some());
    }
}
