//! Human-readable macro summaries
//!
//! Display adapters over borrowed data; callers decide where text goes.

use std::fmt;

use serde::Serialize;

use crate::container::{EventKind, Macro};
use crate::types::{Buttons, ControllerSample, InputFrame, SeedEvent};

/// Counters of a macro
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub n_input: usize,
    pub n_seed: usize,
    pub n_oca_input: usize,
    pub n_oca_sync: usize,
    pub n_room_load: usize,
    pub rerecords: u32,
    pub last_recorded_frame: u32,
}

impl Stats {
    pub fn of(m: &Macro) -> Self {
        Self {
            n_input: m.input_frame_count(),
            n_seed: m.count(EventKind::Seed),
            n_oca_input: m.count(EventKind::OcaInput),
            n_oca_sync: m.count(EventKind::OcaSync),
            n_room_load: m.count(EventKind::RoomLoad),
            rerecords: m.rerecords,
            last_recorded_frame: m.last_recorded_frame,
        }
    }
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "n_input: {}", self.n_input)?;
        writeln!(f, "n_seed: {}", self.n_seed)?;
        writeln!(f, "n_oca_input: {}", self.n_oca_input)?;
        writeln!(f, "n_oca_sync: {}", self.n_oca_sync)?;
        writeln!(f, "n_room_load: {}", self.n_room_load)?;
        writeln!(f, "rerecords: {}", self.rerecords)?;
        writeln!(f, "last_recorded_frame: {}", self.last_recorded_frame)
    }
}

/// Seed events, one per line, seeds in hex
pub struct SeedList<'a>(pub &'a [SeedEvent]);

impl fmt::Display for SeedList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "gzm has {} seeds:", self.0.len())?;
        for seed in self.0 {
            writeln!(
                f,
                "  frame: {}, old: {:08x}, new: {:08x}",
                seed.frame, seed.old_seed, seed.new_seed
            )?;
        }
        Ok(())
    }
}

/// Button columns in display order
const PAD_COLUMNS: [(Buttons, &str); 14] = [
    (Buttons::A, "A "),
    (Buttons::B, "B "),
    (Buttons::Z, "Z "),
    (Buttons::START, "S "),
    (Buttons::D_UP, "DU"),
    (Buttons::D_DOWN, "DD"),
    (Buttons::D_LEFT, "DL"),
    (Buttons::D_RIGHT, "DR"),
    (Buttons::L, "L "),
    (Buttons::R, "R "),
    (Buttons::C_UP, "CU"),
    (Buttons::C_DOWN, "CD"),
    (Buttons::C_LEFT, "CL"),
    (Buttons::C_RIGHT, "CR"),
];

/// One controller sample: stick values then fixed-width button columns
pub struct PadDisplay<'a>(pub &'a ControllerSample);

impl fmt::Display for PadDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sample = self.0;
        write!(f, "{{ {:4}, {:4} }},", sample.x, sample.y)?;
        for (button, label) in PAD_COLUMNS {
            let shown = if sample.buttons.contains(button) { label } else { "  " };
            write!(f, " {shown}")?;
        }
        if sample.buttons.contains(Buttons::RESET) {
            f.write_str(" [RESET]")?;
        }
        Ok(())
    }
}

/// Every input frame with its pad delta
pub struct InputList<'a>(pub &'a [InputFrame]);

impl fmt::Display for InputList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "gzm has {} inputs:", self.0.len())?;
        for input in self.0 {
            writeln!(f, "{{ 0x{:04X} }}, {}", input.pad_delta, PadDisplay(&input.raw))?;
        }
        Ok(())
    }
}
