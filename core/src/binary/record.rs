//! Field layout of each record type
//!
//! Each impl lists its fields once; `ENCODED_LEN` is the sum of their widths
//! and is what [`super::encoded_len`] adds up.

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Read, Write};

use crate::types::{
    Buttons, ControllerSample, InputFrame, OcaInputEvent, OcaSyncEvent, RoomLoadEvent, SeedEvent,
};

/// A fixed-width big-endian record
pub trait Record: Default {
    const ENCODED_LEN: usize;

    /// Read fields in order into `self`.
    ///
    /// On a short read the fields decoded so far stay populated and the rest
    /// keep their previous (zero) value.
    fn decode_into<R: Read>(&mut self, reader: &mut R) -> io::Result<()>;

    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<()>;
}

impl Record for ControllerSample {
    const ENCODED_LEN: usize = 4;

    fn decode_into<R: Read>(&mut self, reader: &mut R) -> io::Result<()> {
        self.buttons = Buttons::from_bits_retain(reader.read_u16::<BigEndian>()?);
        self.x = reader.read_i8()?;
        self.y = reader.read_i8()?;
        Ok(())
    }

    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_u16::<BigEndian>(self.buttons.bits())?;
        writer.write_i8(self.x)?;
        writer.write_i8(self.y)?;
        Ok(())
    }
}

impl Record for InputFrame {
    const ENCODED_LEN: usize = ControllerSample::ENCODED_LEN + 2;

    fn decode_into<R: Read>(&mut self, reader: &mut R) -> io::Result<()> {
        self.raw.decode_into(reader)?;
        self.pad_delta = reader.read_u16::<BigEndian>()?;
        Ok(())
    }

    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        self.raw.encode(writer)?;
        writer.write_u16::<BigEndian>(self.pad_delta)?;
        Ok(())
    }
}

impl Record for SeedEvent {
    const ENCODED_LEN: usize = 12;

    fn decode_into<R: Read>(&mut self, reader: &mut R) -> io::Result<()> {
        self.frame = reader.read_i32::<BigEndian>()?;
        self.old_seed = reader.read_u32::<BigEndian>()?;
        self.new_seed = reader.read_u32::<BigEndian>()?;
        Ok(())
    }

    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_i32::<BigEndian>(self.frame)?;
        writer.write_u32::<BigEndian>(self.old_seed)?;
        writer.write_u32::<BigEndian>(self.new_seed)?;
        Ok(())
    }
}

impl Record for OcaInputEvent {
    const ENCODED_LEN: usize = 8;

    fn decode_into<R: Read>(&mut self, reader: &mut R) -> io::Result<()> {
        self.frame = reader.read_i32::<BigEndian>()?;
        self.pad = reader.read_u16::<BigEndian>()?;
        self.adjusted_x = reader.read_i8()?;
        self.adjusted_y = reader.read_i8()?;
        Ok(())
    }

    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_i32::<BigEndian>(self.frame)?;
        writer.write_u16::<BigEndian>(self.pad)?;
        writer.write_i8(self.adjusted_x)?;
        writer.write_i8(self.adjusted_y)?;
        Ok(())
    }
}

impl Record for OcaSyncEvent {
    const ENCODED_LEN: usize = 8;

    fn decode_into<R: Read>(&mut self, reader: &mut R) -> io::Result<()> {
        self.frame = reader.read_i32::<BigEndian>()?;
        self.audio_frames = reader.read_i32::<BigEndian>()?;
        Ok(())
    }

    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_i32::<BigEndian>(self.frame)?;
        writer.write_i32::<BigEndian>(self.audio_frames)?;
        Ok(())
    }
}

impl Record for RoomLoadEvent {
    const ENCODED_LEN: usize = 4;

    fn decode_into<R: Read>(&mut self, reader: &mut R) -> io::Result<()> {
        self.frame = reader.read_i32::<BigEndian>()?;
        Ok(())
    }

    fn encode<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_i32::<BigEndian>(self.frame)
    }
}
