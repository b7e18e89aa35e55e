//! Binary macro reader
//!
//! Reads .gzm files, stopping quietly at the end of the input.

use byteorder::{BigEndian, ReadBytesExt};
use std::io::{self, BufRead};

use super::record::Record;
use super::{Completeness, Decoded, Section};
use crate::container::Macro;

/// Upper bound on records reserved ahead of reading them; a corrupt count
/// must not turn into a giant allocation.
const MAX_PREALLOC_BYTES: usize = 1 << 20;

/// Reader for the binary macro format
pub struct MacroReader<R: BufRead> {
    reader: R,
    section: Section,
}

impl<R: BufRead> MacroReader<R> {
    /// Create a new macro reader
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            section: Section::Counts,
        }
    }

    /// Read a complete macro from the input.
    ///
    /// Running out of input is not an error: the fields read so far are
    /// returned, the rest are zero, and [`Decoded::completeness`] records
    /// where decoding stopped. Other I/O errors are returned as is.
    pub fn read_macro(&mut self) -> io::Result<Decoded> {
        let mut macro_data = Macro::new();

        let completeness = match self.read_fields(&mut macro_data) {
            Ok(completeness) => completeness,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                tracing::debug!(section = %self.section, "macro input ended mid-field");
                Completeness::Truncated {
                    section: self.section,
                }
            }
            Err(e) => return Err(e),
        };

        if completeness.is_full() && !self.at_eof()? {
            tracing::debug!("ignoring trailing bytes after last_recorded_frame");
        }

        Ok(Decoded {
            macro_data,
            completeness,
        })
    }

    fn read_fields(&mut self, m: &mut Macro) -> io::Result<Completeness> {
        self.section = Section::Counts;
        let input_count = self.reader.read_u32::<BigEndian>()?;
        let seed_count = self.reader.read_u32::<BigEndian>()?;

        self.section = Section::InputStart;
        m.input_start.decode_into(&mut self.reader)?;

        self.section = Section::Inputs;
        self.read_records(input_count, &mut m.inputs)?;

        self.section = Section::Seeds;
        self.read_records(seed_count, &mut m.seeds)?;

        // Oldest format ends here
        if self.at_eof()? {
            return Ok(Completeness::Legacy {
                missing: Section::EventCounts,
            });
        }

        self.section = Section::EventCounts;
        let oca_input_count = self.reader.read_u32::<BigEndian>()?;
        let oca_sync_count = self.reader.read_u32::<BigEndian>()?;
        let room_load_count = self.reader.read_u32::<BigEndian>()?;

        self.section = Section::OcaInputs;
        self.read_records(oca_input_count, &mut m.oca_inputs)?;

        self.section = Section::OcaSyncs;
        self.read_records(oca_sync_count, &mut m.oca_syncs)?;

        self.section = Section::RoomLoads;
        self.read_records(room_load_count, &mut m.room_loads)?;

        // Files from before rerecord counting end here
        if self.at_eof()? {
            return Ok(Completeness::Legacy {
                missing: Section::Rerecords,
            });
        }

        self.section = Section::Rerecords;
        m.rerecords = self.reader.read_u32::<BigEndian>()?;

        self.section = Section::LastRecordedFrame;
        m.last_recorded_frame = self.reader.read_u32::<BigEndian>()?;

        Ok(Completeness::Full)
    }

    /// Read `count` records. A record cut short by the end of input is kept
    /// with its missing fields zeroed, then the read fails with
    /// `UnexpectedEof`.
    fn read_records<T: Record>(&mut self, count: u32, out: &mut Vec<T>) -> io::Result<()> {
        let reserve = (count as usize).min(MAX_PREALLOC_BYTES / T::ENCODED_LEN);
        out.reserve(reserve);

        for _ in 0..count {
            if self.at_eof()? {
                tracing::warn!(
                    section = %self.section,
                    declared = count,
                    decoded = out.len(),
                    "macro ends before all records were read"
                );
                return Err(io::ErrorKind::UnexpectedEof.into());
            }

            let mut record = T::default();
            let result = record.decode_into(&mut self.reader);
            out.push(record);
            result?;
        }

        Ok(())
    }

    fn at_eof(&mut self) -> io::Result<bool> {
        Ok(self.reader.fill_buf()?.is_empty())
    }

    /// Consume the reader and return the inner reader
    pub fn into_inner(self) -> R {
        self.reader
    }
}
