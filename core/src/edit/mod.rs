//! Structural edits over macros
//!
//! Every operation borrows its inputs and returns a new [`Macro`]; inputs are
//! never modified. Event streams are kept frame-consistent with the inputs:
//!
//! - [`trim`] - keep a prefix of the inputs
//! - [`concat`] - append one macro after another
//! - [`concat_at_seed`] - splice two macros at a shared RNG seed event
//! - [`slice`] - cut out a window around seed data
//!
//! Two scalars have no principled merge across recordings, `input_start` and
//! `last_recorded_frame`. The concatenations take a [`MergePolicy`] for them;
//! the default reproduces the recording tool's own behaviour and callers
//! should not attach meaning to either value after a merge.

mod concat;
mod events;
mod slice;
mod trim;

pub use concat::{check_concat_at_seed, concat, concat_at_seed};
pub use slice::{check_slice, slice};
pub use trim::trim;

use crate::container::Macro;
use crate::error::{MacroError, Result};
use crate::types::ControllerSample;

/// Which operand's starting controller state a merge keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputStartPolicy {
    #[default]
    First,
    Second,
}

/// How a merge sets `last_recorded_frame`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LastFramePolicy {
    /// Zero
    #[default]
    Reset,
    /// The first operand's marker, unchanged
    First,
    /// The second operand's marker, moved into the merged frame axis
    Second,
}

/// Resolution of the scalars a concatenation cannot merge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergePolicy {
    pub input_start: InputStartPolicy,
    pub last_recorded_frame: LastFramePolicy,
}

impl MergePolicy {
    fn input_start(&self, a: &Macro, b: &Macro) -> ControllerSample {
        match self.input_start {
            InputStartPolicy::First => a.input_start,
            InputStartPolicy::Second => b.input_start,
        }
    }

    /// `shift` is the offset applied to the second operand's frames
    fn last_recorded_frame(&self, a: &Macro, b: &Macro, shift: i64) -> Result<u32> {
        match self.last_recorded_frame {
            LastFramePolicy::Reset => Ok(0),
            LastFramePolicy::First => Ok(a.last_recorded_frame),
            LastFramePolicy::Second => {
                let frame = i64::from(b.last_recorded_frame);
                u32::try_from(frame + shift)
                    .map_err(|_| MacroError::FrameIndexOverflow { frame, shift })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_matches_recording_tool() {
        let policy = MergePolicy::default();
        let a = Macro {
            input_start: ControllerSample::new(0x8000, 1, 2),
            last_recorded_frame: 40,
            ..Macro::new()
        };
        let b = Macro {
            input_start: ControllerSample::new(0x4000, 3, 4),
            last_recorded_frame: 50,
            ..Macro::new()
        };
        assert_eq!(policy.input_start(&a, &b), a.input_start);
        assert_eq!(policy.last_recorded_frame(&a, &b, 10).unwrap(), 0);
    }

    #[test]
    fn second_last_frame_is_shifted() {
        let policy = MergePolicy {
            input_start: InputStartPolicy::Second,
            last_recorded_frame: LastFramePolicy::Second,
        };
        let a = Macro::new();
        let b = Macro {
            input_start: ControllerSample::new(1, 0, 0),
            last_recorded_frame: 5,
            ..Macro::new()
        };
        assert_eq!(policy.input_start(&a, &b), b.input_start);
        assert_eq!(policy.last_recorded_frame(&a, &b, 20).unwrap(), 25);
        assert!(policy.last_recorded_frame(&a, &b, -6).is_err());
    }
}
