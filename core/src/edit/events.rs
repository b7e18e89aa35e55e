//! Frame-window operations shared by every event stream

use crate::error::{MacroError, Result};
use crate::types::FrameEvent;

/// Move a frame index by `shift`, failing if it leaves the `i32` range
pub(crate) fn shift_frame(frame: i32, shift: i64) -> Result<i32> {
    let shifted = i64::from(frame) + shift;
    i32::try_from(shifted).map_err(|_| MacroError::FrameIndexOverflow {
        frame: i64::from(frame),
        shift,
    })
}

/// Copy of `events` with every frame index moved by `shift`
pub(crate) fn shifted<T: FrameEvent>(events: &[T], shift: i64) -> Result<Vec<T>> {
    events
        .iter()
        .map(|event| Ok(event.at_frame(shift_frame(event.frame(), shift)?)))
        .collect()
}

/// Frame index as an unsigned position; negative indices have none and
/// therefore fall outside every window.
fn position(frame: i32) -> Option<u32> {
    u32::try_from(frame).ok()
}

/// Keep events whose frame lies in `[0, end)`
pub(crate) fn retain_before<T: FrameEvent>(events: &mut Vec<T>, end: u32) {
    events.retain(|event| position(event.frame()).is_some_and(|pos| pos < end));
}

/// Events whose frame lies in `[start, end]`, rebased so `start` becomes 0.
///
/// The upper bound is inclusive, unlike the input-frame range of a slice.
pub(crate) fn window_rebased<T: FrameEvent>(events: &[T], start: u32, end: u32) -> Vec<T> {
    events
        .iter()
        .filter_map(|event| {
            let pos = position(event.frame())?;
            if pos < start || pos > end {
                return None;
            }
            // pos - start <= pos <= i32::MAX
            Some(event.at_frame((pos - start) as i32))
        })
        .collect()
}

/// Join two streams at a splice seam.
///
/// Trailing events of `head` at or after `head_anchor` are dropped (scanning
/// back from the end), as are leading events of `tail` before `tail_anchor`
/// (scanning from the start). The surviving tail is shifted by `shift`.
pub(crate) fn splice<T: FrameEvent>(
    head: &[T],
    head_anchor: i32,
    tail: &[T],
    tail_anchor: i32,
    shift: i64,
) -> Result<Vec<T>> {
    let dropped_head = head
        .iter()
        .rev()
        .take_while(|event| event.frame() >= head_anchor)
        .count();
    let skipped_tail = tail
        .iter()
        .take_while(|event| event.frame() < tail_anchor)
        .count();

    let kept_head = &head[..head.len() - dropped_head];
    let kept_tail = &tail[skipped_tail..];

    let mut out = Vec::with_capacity(kept_head.len() + kept_tail.len());
    out.extend_from_slice(kept_head);
    out.extend(shifted(kept_tail, shift)?);
    Ok(out)
}
