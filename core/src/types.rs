//! Record types stored in a gz macro
//!
//! Every record has a fixed big-endian layout on disk (see [`crate::binary`]).
//! Input frames carry no frame index: a frame's position in
//! [`Macro::inputs`](crate::Macro::inputs) is its index. The four sparse event
//! streams store an explicit `frame` and are kept ordered by it.

use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    /// Controller button mask, bit layout of the recording tool
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Buttons: u16 {
        const A = 1 << 15;
        const B = 1 << 14;
        const Z = 1 << 13;
        const START = 1 << 12;
        const D_UP = 1 << 11;
        const D_DOWN = 1 << 10;
        const D_LEFT = 1 << 9;
        const D_RIGHT = 1 << 8;
        /// Console reset signal, not a physical button
        const RESET = 1 << 7;
        const L = 1 << 5;
        const R = 1 << 4;
        const C_UP = 1 << 3;
        const C_DOWN = 1 << 2;
        const C_LEFT = 1 << 1;
        const C_RIGHT = 1 << 0;
    }
}

// Serialized as the raw mask so unnamed bits survive.
impl Serialize for Buttons {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Buttons {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u16::deserialize(deserializer)?;
        Ok(Buttons::from_bits_retain(bits))
    }
}

/// One controller state: button mask plus the analog stick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ControllerSample {
    pub buttons: Buttons,
    pub x: i8,
    pub y: i8,
}

impl ControllerSample {
    pub fn new(pad: u16, x: i8, y: i8) -> Self {
        Self {
            buttons: Buttons::from_bits_retain(pad),
            x,
            y,
        }
    }

    /// Raw 16-bit button mask
    pub fn pad(&self) -> u16 {
        self.buttons.bits()
    }
}

/// One recorded game frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct InputFrame {
    pub raw: ControllerSample,
    /// Button change relative to the previous frame; carried through untouched
    pub pad_delta: u16,
}

/// RNG reseed observed at `frame`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SeedEvent {
    pub frame: i32,
    pub old_seed: u32,
    pub new_seed: u32,
}

/// Adjusted-input override for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct OcaInputEvent {
    pub frame: i32,
    pub pad: u16,
    pub adjusted_x: i8,
    pub adjusted_y: i8,
}

/// Audio synchronisation marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct OcaSyncEvent {
    pub frame: i32,
    pub audio_frames: i32,
}

/// Room load marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RoomLoadEvent {
    pub frame: i32,
}

/// A sparse event tied to a frame index
///
/// The editing engine filters and rebases every event stream through this
/// trait, so the four kinds share one implementation of each algorithm.
pub trait FrameEvent: Copy {
    fn frame(&self) -> i32;

    /// Copy of this event moved to `frame`
    fn at_frame(self, frame: i32) -> Self;
}

macro_rules! impl_frame_event {
    ($($ty:ty),*) => {
        $(
            impl FrameEvent for $ty {
                fn frame(&self) -> i32 {
                    self.frame
                }

                fn at_frame(self, frame: i32) -> Self {
                    Self { frame, ..self }
                }
            }
        )*
    };
}

impl_frame_event!(SeedEvent, OcaInputEvent, OcaSyncEvent, RoomLoadEvent);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unnamed_button_bit_is_retained() {
        let sample = ControllerSample::new(0x0040 | 0x8000, 3, -4);
        assert_eq!(sample.pad(), 0x8040);
        assert!(sample.buttons.contains(Buttons::A));
        assert!(!sample.buttons.contains(Buttons::RESET));
    }

    #[test]
    fn at_frame_keeps_payload() {
        let event = OcaInputEvent {
            frame: 4,
            pad: 0x1234,
            adjusted_x: -7,
            adjusted_y: 9,
        };
        let moved = event.at_frame(40);
        assert_eq!(moved.frame(), 40);
        assert_eq!(moved.pad, 0x1234);
        assert_eq!(moved.adjusted_x, -7);
        assert_eq!(moved.adjusted_y, 9);
    }

    #[test]
    fn buttons_serialize_as_raw_mask() {
        let sample = ControllerSample::new(0x9001, 1, 2);
        let json = serde_json::to_string(&sample).unwrap();
        assert_eq!(json, r#"{"buttons":36865,"x":1,"y":2}"#);
        let back: ControllerSample = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample);
    }
}
