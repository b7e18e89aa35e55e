//! Binary macro format (.gzm)
//!
//! Big-endian, densely packed, no padding. Fields appear in this order:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │ input_count: u32                             │
//! │ seed_count: u32                              │
//! │ input_start: pad u16, x i8, y i8             │
//! │ input_count × InputFrame    (6 bytes each)   │
//! │ seed_count × SeedEvent      (12 bytes each)  │
//! ├──────────────────────────────────────────────┤
//! │ oca_input_count, oca_sync_count,             │
//! │ room_load_count: u32                         │
//! │ oca_input_count × OcaInputEvent (8 bytes)    │
//! │ oca_sync_count × OcaSyncEvent   (8 bytes)    │
//! │ room_load_count × RoomLoadEvent (4 bytes)    │
//! ├──────────────────────────────────────────────┤
//! │ rerecords: u32                               │
//! │ last_recorded_frame: u32                     │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Files written by older recorders stop at one of the two section
//! boundaries. Reading never fails on a short buffer: decoding stops at the
//! first field that does not fit and everything after it stays zero. The
//! [`Completeness`] of the result says where it stopped.

mod reader;
mod record;
mod writer;

use std::fmt;

use serde::Serialize;

use crate::container::Macro;
use crate::types::{
    ControllerSample, InputFrame, OcaInputEvent, OcaSyncEvent, RoomLoadEvent, SeedEvent,
};

pub use reader::MacroReader;
pub use record::Record;
pub use writer::MacroWriter;

/// Position of a field group in the file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Section {
    /// Input and seed counts
    Counts,
    InputStart,
    Inputs,
    Seeds,
    /// The three optional event counts
    EventCounts,
    OcaInputs,
    OcaSyncs,
    RoomLoads,
    Rerecords,
    LastRecordedFrame,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Counts => "counts",
            Section::InputStart => "input_start",
            Section::Inputs => "inputs",
            Section::Seeds => "seeds",
            Section::EventCounts => "event counts",
            Section::OcaInputs => "oca_input",
            Section::OcaSyncs => "oca_sync",
            Section::RoomLoads => "room_load",
            Section::Rerecords => "rerecords",
            Section::LastRecordedFrame => "last_recorded_frame",
        };
        f.write_str(name)
    }
}

/// How much of the schema a read covered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Completeness {
    /// All fields were present
    Full,
    /// The buffer ended cleanly where an older format version ends;
    /// `missing` is the first absent section
    Legacy { missing: Section },
    /// The buffer ended inside `section`
    Truncated { section: Section },
}

impl Completeness {
    pub fn is_full(&self) -> bool {
        matches!(self, Completeness::Full)
    }
}

/// Result of reading a macro
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub macro_data: Macro,
    pub completeness: Completeness,
}

/// Counts plus input_start
pub const HEADER_LEN: usize = 4 + 4 + ControllerSample::ENCODED_LEN;
/// The three optional event counts
pub const EVENT_COUNTS_LEN: usize = 4 + 4 + 4;
/// rerecords plus last_recorded_frame
pub const TRAILER_LEN: usize = 4 + 4;

/// Exact size of the serialized form of `m`
pub fn encoded_len(m: &Macro) -> usize {
    HEADER_LEN
        + m.inputs.len() * InputFrame::ENCODED_LEN
        + m.seeds.len() * SeedEvent::ENCODED_LEN
        + EVENT_COUNTS_LEN
        + m.oca_inputs.len() * OcaInputEvent::ENCODED_LEN
        + m.oca_syncs.len() * OcaSyncEvent::ENCODED_LEN
        + m.room_loads.len() * RoomLoadEvent::ENCODED_LEN
        + TRAILER_LEN
}

/// Serialize a macro into a new buffer
pub fn encode(m: &Macro) -> std::io::Result<Vec<u8>> {
    let mut buffer = Vec::with_capacity(encoded_len(m));
    MacroWriter::new(&mut buffer).write_macro(m)?;
    debug_assert_eq!(buffer.len(), encoded_len(m));
    Ok(buffer)
}

/// Deserialize a macro from a buffer, tolerating truncation
pub fn decode(bytes: &[u8]) -> Decoded {
    match MacroReader::new(bytes).read_macro() {
        Ok(decoded) => decoded,
        // A slice can only fail with UnexpectedEof, which read_macro absorbs.
        Err(err) => unreachable!("in-memory macro read failed: {err}"),
    }
}
