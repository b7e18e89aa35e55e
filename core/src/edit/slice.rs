//! Window extraction

use super::events::window_rebased;
use crate::container::Macro;
use crate::error::{Bound, MacroError, Result, Side};

/// Every reason `slice(m, start, end)` would fail, in check order
pub fn check_slice(m: &Macro, start: u32, end: u32) -> Vec<MacroError> {
    let frame_count = m.inputs.len();
    let bound = u32::try_from(frame_count).unwrap_or(u32::MAX);
    let mut problems = Vec::new();

    if m.seeds.is_empty() {
        problems.push(MacroError::NoSeedData { side: Side::Input });
    }
    if start as usize > frame_count {
        problems.push(MacroError::OutOfRange {
            field: Bound::SliceStart,
            value: start,
            bound,
        });
    }
    if end as usize > frame_count {
        problems.push(MacroError::OutOfRange {
            field: Bound::SliceEnd,
            value: end,
            bound,
        });
    }
    if end <= start {
        problems.push(MacroError::EmptyOrInvertedRange { start, end });
    }

    problems
}

/// Extract input frames `[start, end)` of `m` into a new macro.
///
/// Events with a frame in `[start, end]` are kept and rebased by `-start`.
/// Note the event window includes `end` while the frame range does not.
/// Rerecords are copied from `m` as is,
/// `input_start` is zero and `last_recorded_frame` is `end - start`.
///
/// The source needs at least one seed event.
pub fn slice(m: &Macro, start: u32, end: u32) -> Result<Macro> {
    if let Some(problem) = check_slice(m, start, end).into_iter().next() {
        return Err(problem);
    }

    let out = Macro {
        inputs: m.inputs[start as usize..end as usize].to_vec(),
        seeds: window_rebased(&m.seeds, start, end),
        oca_inputs: window_rebased(&m.oca_inputs, start, end),
        oca_syncs: window_rebased(&m.oca_syncs, start, end),
        room_loads: window_rebased(&m.room_loads, start, end),
        rerecords: m.rerecords,
        last_recorded_frame: end - start,
        ..Macro::new()
    };

    tracing::debug!(start, end, seeds = out.seeds.len(), "sliced macro");
    Ok(out)
}
