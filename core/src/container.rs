//! The macro container

use std::fmt;

use serde::Serialize;

use crate::types::{
    ControllerSample, InputFrame, OcaInputEvent, OcaSyncEvent, RoomLoadEvent, SeedEvent,
};

/// The four sparse event streams of a macro
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventKind {
    Seed,
    OcaInput,
    OcaSync,
    RoomLoad,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::Seed,
        EventKind::OcaInput,
        EventKind::OcaSync,
        EventKind::RoomLoad,
    ];
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EventKind::Seed => "seed",
            EventKind::OcaInput => "oca_input",
            EventKind::OcaSync => "oca_sync",
            EventKind::RoomLoad => "room_load",
        };
        f.write_str(name)
    }
}

/// A complete gz macro held in memory
///
/// Sequence counts are never stored separately; the on-disk counts are the
/// lengths of these vectors, so they cannot drift from their sequences.
///
/// `Clone` is a deep copy: the clone shares no storage with the original.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Macro {
    /// Controller state before the first frame
    pub input_start: ControllerSample,
    /// One entry per recorded frame, indexed by frame
    pub inputs: Vec<InputFrame>,
    pub seeds: Vec<SeedEvent>,
    pub oca_inputs: Vec<OcaInputEvent>,
    pub oca_syncs: Vec<OcaSyncEvent>,
    pub room_loads: Vec<RoomLoadEvent>,
    pub rerecords: u32,
    pub last_recorded_frame: u32,
}

impl Macro {
    /// Create an empty, zero-valued macro
    pub fn new() -> Self {
        Self::default()
    }

    /// Release every owned sequence and reset all scalars to zero.
    /// Safe to call on an already empty macro.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn input_frame_count(&self) -> usize {
        self.inputs.len()
    }

    /// Number of events in one stream
    pub fn count(&self, kind: EventKind) -> usize {
        match kind {
            EventKind::Seed => self.seeds.len(),
            EventKind::OcaInput => self.oca_inputs.len(),
            EventKind::OcaSync => self.oca_syncs.len(),
            EventKind::RoomLoad => self.room_loads.len(),
        }
    }

    /// Frame indices of one stream, in stored order
    pub fn event_frames(&self, kind: EventKind) -> Vec<i32> {
        match kind {
            EventKind::Seed => self.seeds.iter().map(|e| e.frame).collect(),
            EventKind::OcaInput => self.oca_inputs.iter().map(|e| e.frame).collect(),
            EventKind::OcaSync => self.oca_syncs.iter().map(|e| e.frame).collect(),
            EventKind::RoomLoad => self.room_loads.iter().map(|e| e.frame).collect(),
        }
    }

    pub fn first_seed(&self) -> Option<&SeedEvent> {
        self.seeds.first()
    }

    pub fn last_seed(&self) -> Option<&SeedEvent> {
        self.seeds.last()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty() && EventKind::ALL.iter().all(|&kind| self.count(kind) == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> Macro {
        Macro {
            input_start: ControllerSample::new(0x8000, 1, 1),
            inputs: vec![InputFrame::default(); 3],
            seeds: vec![SeedEvent {
                frame: 1,
                old_seed: 2,
                new_seed: 3,
            }],
            oca_inputs: vec![OcaInputEvent::default()],
            oca_syncs: vec![OcaSyncEvent::default(); 2],
            room_loads: vec![RoomLoadEvent { frame: 2 }],
            rerecords: 9,
            last_recorded_frame: 2,
        }
    }

    #[test]
    fn new_macro_is_empty() {
        let m = Macro::new();
        assert!(m.is_empty());
        assert_eq!(m.input_frame_count(), 0);
        for kind in EventKind::ALL {
            assert_eq!(m.count(kind), 0);
        }
        assert_eq!(m.rerecords, 0);
        assert_eq!(m.last_recorded_frame, 0);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut m = populated();
        m.clear();
        assert_eq!(m, Macro::new());
        m.clear();
        assert_eq!(m, Macro::new());
    }

    #[test]
    fn clone_shares_no_storage() {
        let original = populated();
        let mut copy = original.clone();
        copy.inputs[0].pad_delta = 0xFFFF;
        copy.seeds[0].new_seed = 42;
        copy.room_loads.push(RoomLoadEvent { frame: 7 });

        assert_eq!(original.inputs[0].pad_delta, 0);
        assert_eq!(original.seeds[0].new_seed, 3);
        assert_eq!(original.count(EventKind::RoomLoad), 1);
    }

    #[test]
    fn counts_follow_sequences() {
        let m = populated();
        assert_eq!(m.input_frame_count(), 3);
        assert_eq!(m.count(EventKind::Seed), 1);
        assert_eq!(m.count(EventKind::OcaSync), 2);
        assert_eq!(m.event_frames(EventKind::RoomLoad), vec![2]);
    }
}
