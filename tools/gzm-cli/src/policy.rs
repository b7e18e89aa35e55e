//! Merge policy flags shared by the concatenation commands

use clap::{Args, ValueEnum};
use gzm_core::{InputStartPolicy, LastFramePolicy, MergePolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InputStartArg {
    First,
    Second,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LastFrameArg {
    /// Set to zero
    Reset,
    /// Keep the first macro's value
    First,
    /// Take the second macro's value, moved into the joined frame axis
    Second,
}

#[derive(Args, Debug, Clone)]
pub struct MergeArgs {
    /// Which macro's starting controller state to keep
    #[arg(long, value_enum, default_value_t = InputStartArg::First)]
    pub input_start: InputStartArg,

    /// How to set last_recorded_frame in the result
    #[arg(long, value_enum, default_value_t = LastFrameArg::Reset)]
    pub last_frame: LastFrameArg,
}

impl Default for MergeArgs {
    fn default() -> Self {
        Self {
            input_start: InputStartArg::First,
            last_frame: LastFrameArg::Reset,
        }
    }
}

impl From<&MergeArgs> for MergePolicy {
    fn from(args: &MergeArgs) -> Self {
        MergePolicy {
            input_start: match args.input_start {
                InputStartArg::First => InputStartPolicy::First,
                InputStartArg::Second => InputStartPolicy::Second,
            },
            last_recorded_frame: match args.last_frame {
                LastFrameArg::Reset => LastFramePolicy::Reset,
                LastFrameArg::First => LastFramePolicy::First,
                LastFrameArg::Second => LastFramePolicy::Second,
            },
        }
    }
}
