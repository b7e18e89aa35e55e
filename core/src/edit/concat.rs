//! Naive and seed-anchored concatenation

use super::MergePolicy;
use super::events::{shifted, splice};
use crate::container::Macro;
use crate::error::{MacroError, Result, Side};
use crate::types::SeedEvent;

/// Append `b` after `a`.
///
/// `b`'s frame axis is shifted by `a`'s input frame count. Each event stream
/// is `a`'s events followed by `b`'s shifted events, without re-sorting.
/// Rerecords are summed.
pub fn concat(a: &Macro, b: &Macro, policy: MergePolicy) -> Result<Macro> {
    let shift = a.inputs.len() as i64;

    let mut inputs = Vec::with_capacity(a.inputs.len() + b.inputs.len());
    inputs.extend_from_slice(&a.inputs);
    inputs.extend_from_slice(&b.inputs);

    let out = Macro {
        input_start: policy.input_start(a, b),
        inputs,
        seeds: [a.seeds.clone(), shifted(&b.seeds, shift)?].concat(),
        oca_inputs: [a.oca_inputs.clone(), shifted(&b.oca_inputs, shift)?].concat(),
        oca_syncs: [a.oca_syncs.clone(), shifted(&b.oca_syncs, shift)?].concat(),
        room_loads: [a.room_loads.clone(), shifted(&b.room_loads, shift)?].concat(),
        rerecords: a.rerecords.saturating_add(b.rerecords),
        last_recorded_frame: policy.last_recorded_frame(a, b, shift)?,
    };

    tracing::debug!(
        frames = out.inputs.len(),
        seeds = out.seeds.len(),
        "concatenated macros"
    );
    Ok(out)
}

/// The usable splice anchor of one operand, as an index into its inputs
fn anchor(side: Side, m: &Macro, seed: Option<&SeedEvent>) -> Result<(usize, SeedEvent)> {
    let seed = *seed.ok_or(MacroError::NoSeedData { side })?;
    match usize::try_from(seed.frame) {
        Ok(frame) if frame <= m.inputs.len() => Ok((frame, seed)),
        _ => Err(MacroError::AnchorOutOfRange {
            side,
            frame: seed.frame,
            frame_count: m.inputs.len(),
        }),
    }
}

/// Every reason `concat_at_seed(a, b)` would fail, first operand first
pub fn check_concat_at_seed(a: &Macro, b: &Macro) -> Vec<MacroError> {
    [
        anchor(Side::First, a, a.last_seed()).err(),
        anchor(Side::Second, b, b.first_seed()).err(),
    ]
    .into_iter()
    .flatten()
    .collect()
}

/// Splice `a` and `b` at the seed events where their RNG states meet.
///
/// The anchors are `a`'s last seed frame `L` and `b`'s first seed frame `F`.
/// The result plays `a`'s frames `[0, L)` then `b`'s frames `[F, end)`, so
/// everything from `b` moves by `L - F`. The two anchor seed events become one
/// that keeps `a`'s `old_seed` and takes `b`'s `new_seed`. For the other event
/// streams, `a`'s events at or after `L` and `b`'s events before `F` are
/// dropped so nothing contradicts at the seam.
///
/// Fails with [`MacroError::NoSeedData`] naming the side without seeds.
pub fn concat_at_seed(a: &Macro, b: &Macro, policy: MergePolicy) -> Result<Macro> {
    let (last, a_seed) = anchor(Side::First, a, a.last_seed())?;
    let (first, b_seed) = anchor(Side::Second, b, b.first_seed())?;
    let shift = last as i64 - first as i64;

    let head = &a.inputs[..last];
    let tail = &b.inputs[first..];
    let mut inputs = Vec::with_capacity(head.len() + tail.len());
    inputs.extend_from_slice(head);
    inputs.extend_from_slice(tail);

    let mut seeds = Vec::with_capacity(a.seeds.len() + b.seeds.len() - 1);
    seeds.extend_from_slice(&a.seeds);
    if let Some(boundary) = seeds.last_mut() {
        boundary.new_seed = b_seed.new_seed;
    }
    seeds.extend(shifted(&b.seeds[1..], shift)?);

    let out = Macro {
        input_start: policy.input_start(a, b),
        inputs,
        seeds,
        oca_inputs: splice(&a.oca_inputs, a_seed.frame, &b.oca_inputs, b_seed.frame, shift)?,
        oca_syncs: splice(&a.oca_syncs, a_seed.frame, &b.oca_syncs, b_seed.frame, shift)?,
        room_loads: splice(&a.room_loads, a_seed.frame, &b.room_loads, b_seed.frame, shift)?,
        rerecords: a.rerecords.saturating_add(b.rerecords),
        last_recorded_frame: policy.last_recorded_frame(a, b, shift)?,
    };

    tracing::debug!(
        anchor_first = last,
        anchor_second = first,
        shift,
        frames = out.inputs.len(),
        "spliced macros at seed"
    );
    Ok(out)
}
