//! Binary macro writer
//!
//! Always writes the newest layout, including the optional sections.

use byteorder::{BigEndian, WriteBytesExt};
use std::io::{self, Write};

use super::record::Record;
use crate::container::Macro;

/// Writer for the binary macro format
pub struct MacroWriter<W: Write> {
    writer: W,
}

impl<W: Write> MacroWriter<W> {
    /// Create a new macro writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write a complete macro to the output
    pub fn write_macro(&mut self, m: &Macro) -> io::Result<()> {
        self.write_count(m.inputs.len())?;
        self.write_count(m.seeds.len())?;
        m.input_start.encode(&mut self.writer)?;
        self.write_records(&m.inputs)?;
        self.write_records(&m.seeds)?;

        self.write_count(m.oca_inputs.len())?;
        self.write_count(m.oca_syncs.len())?;
        self.write_count(m.room_loads.len())?;
        self.write_records(&m.oca_inputs)?;
        self.write_records(&m.oca_syncs)?;
        self.write_records(&m.room_loads)?;

        self.writer.write_u32::<BigEndian>(m.rerecords)?;
        self.writer.write_u32::<BigEndian>(m.last_recorded_frame)?;
        Ok(())
    }

    fn write_count(&mut self, len: usize) -> io::Result<()> {
        let count = u32::try_from(len).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{len} records do not fit in a 32-bit count"),
            )
        })?;
        self.writer.write_u32::<BigEndian>(count)
    }

    fn write_records<T: Record>(&mut self, records: &[T]) -> io::Result<()> {
        for record in records {
            record.encode(&mut self.writer)?;
        }
        Ok(())
    }

    /// Consume the writer and return the inner writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}
