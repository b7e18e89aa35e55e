//! gzm core - gz macro codec and editing engine
//!
//! A gz macro records one controller sample per game frame plus four sparse,
//! frame-indexed event streams: RNG seed changes, adjusted-input overrides,
//! audio sync markers and room loads.
//!
//! # Architecture
//!
//! - [`Macro`] - the in-memory container
//! - [`binary`] - big-endian (de)serialization, tolerant of truncated files
//! - [`edit`] - trim, concatenate, seed-anchored splice and slice
//! - [`diagnostics`] - text summaries for the command line
//! - [`files`] - whole-file read/write with path-carrying errors
//!
//! # Usage
//!
//! ```ignore
//! use gzm_core::{MergePolicy, concat_at_seed, read_macro_file, write_macro_file};
//!
//! let a = read_macro_file("part1.gzm")?.macro_data;
//! let b = read_macro_file("part2.gzm")?.macro_data;
//! let joined = concat_at_seed(&a, &b, MergePolicy::default())?;
//! write_macro_file("joined.gzm", &joined)?;
//! ```

pub mod binary;
pub mod container;
pub mod diagnostics;
pub mod edit;
pub mod error;
pub mod files;
pub mod types;

pub use binary::{Completeness, Decoded, MacroReader, MacroWriter, Section, decode, encode};
pub use container::{EventKind, Macro};
pub use edit::{
    InputStartPolicy, LastFramePolicy, MergePolicy, check_concat_at_seed, check_slice, concat,
    concat_at_seed, slice, trim,
};
pub use error::{Bound, MacroError, Result, Side};
pub use files::{read_macro_file, write_macro_file};
pub use types::{
    Buttons, ControllerSample, FrameEvent, InputFrame, OcaInputEvent, OcaSyncEvent, RoomLoadEvent,
    SeedEvent,
};
