//! Prefix trimming

use super::events::retain_before;
use crate::container::Macro;
use crate::error::{Bound, MacroError, Result};

/// Keep the first `end` input frames of `m`.
///
/// Events at frame `end` or later are dropped; surviving events keep their
/// frame indices. `last_recorded_frame` becomes `end - 1` (0 when `end` is 0).
pub fn trim(m: &Macro, end: u32) -> Result<Macro> {
    let mut out = m.clone();
    out.trim_in_place(end)?;
    Ok(out)
}

impl Macro {
    /// In-place variant of [`trim`]
    pub fn trim_in_place(&mut self, end: u32) -> Result<()> {
        if end as usize > self.inputs.len() {
            return Err(MacroError::OutOfRange {
                field: Bound::TrimEnd,
                value: end,
                bound: u32::try_from(self.inputs.len()).unwrap_or(u32::MAX),
            });
        }

        self.inputs.truncate(end as usize);
        retain_before(&mut self.seeds, end);
        retain_before(&mut self.oca_inputs, end);
        retain_before(&mut self.oca_syncs, end);
        retain_before(&mut self.room_loads, end);
        self.last_recorded_frame = end.saturating_sub(1);

        tracing::debug!(
            end,
            seeds = self.seeds.len(),
            room_loads = self.room_loads.len(),
            "trimmed macro"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::EventKind;
    use crate::types::{InputFrame, OcaSyncEvent, RoomLoadEvent, SeedEvent};

    fn ten_frames() -> Macro {
        Macro {
            inputs: (0..10)
                .map(|i| InputFrame {
                    pad_delta: i,
                    ..InputFrame::default()
                })
                .collect(),
            seeds: [0, 4, 6, 9]
                .into_iter()
                .map(|frame| SeedEvent {
                    frame,
                    ..SeedEvent::default()
                })
                .collect(),
            oca_syncs: vec![
                OcaSyncEvent {
                    frame: 5,
                    audio_frames: 1,
                },
                OcaSyncEvent {
                    frame: 6,
                    audio_frames: 2,
                },
            ],
            room_loads: vec![RoomLoadEvent { frame: 2 }],
            rerecords: 4,
            last_recorded_frame: 9,
            ..Macro::new()
        }
    }

    #[test]
    fn trim_drops_events_at_and_after_end() {
        let m = ten_frames();
        let t = trim(&m, 6).unwrap();

        assert_eq!(t.input_frame_count(), 6);
        assert_eq!(t.inputs[5].pad_delta, 5);
        assert_eq!(t.event_frames(EventKind::Seed), vec![0, 4]);
        assert_eq!(t.event_frames(EventKind::OcaSync), vec![5]);
        assert_eq!(t.event_frames(EventKind::RoomLoad), vec![2]);
        assert_eq!(t.last_recorded_frame, 5);
        assert_eq!(t.rerecords, 4);
    }

    #[test]
    fn trim_leaves_source_unchanged() {
        let m = ten_frames();
        let _ = trim(&m, 3).unwrap();
        assert_eq!(m, ten_frames());
    }

    #[test]
    fn trim_to_full_length_keeps_everything_but_marker() {
        let m = ten_frames();
        let t = trim(&m, 10).unwrap();
        assert_eq!(t.inputs, m.inputs);
        assert_eq!(t.seeds, m.seeds);
        assert_eq!(t.last_recorded_frame, 9);
    }

    #[test]
    fn trim_to_zero() {
        let t = trim(&ten_frames(), 0).unwrap();
        assert!(t.is_empty());
        assert_eq!(t.last_recorded_frame, 0);
    }

    #[test]
    fn trim_past_end_fails() {
        let err = trim(&ten_frames(), 11).unwrap_err();
        assert!(matches!(
            err,
            MacroError::OutOfRange {
                field: Bound::TrimEnd,
                value: 11,
                bound: 10
            }
        ));
    }
}
