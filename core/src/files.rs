//! Whole-file macro I/O

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use crate::binary::{Completeness, Decoded, MacroReader, MacroWriter};
use crate::container::Macro;
use crate::error::{MacroError, Result};

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> MacroError + '_ {
    move |source| MacroError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Read a macro file. A short file is not an error; check
/// [`Decoded::completeness`].
pub fn read_macro_file(path: impl AsRef<Path>) -> Result<Decoded> {
    let path = path.as_ref();
    let file = File::open(path).map_err(io_error(path))?;
    let decoded = MacroReader::new(BufReader::new(file))
        .read_macro()
        .map_err(io_error(path))?;

    match decoded.completeness {
        Completeness::Full => {}
        Completeness::Legacy { missing } => {
            tracing::debug!(path = %path.display(), %missing, "old format macro");
        }
        Completeness::Truncated { section } => {
            tracing::warn!(path = %path.display(), %section, "macro file is truncated");
        }
    }
    tracing::debug!(
        path = %path.display(),
        frames = decoded.macro_data.input_frame_count(),
        seeds = decoded.macro_data.seeds.len(),
        "read macro"
    );
    Ok(decoded)
}

/// Write a macro file, replacing any existing file
pub fn write_macro_file(path: impl AsRef<Path>, m: &Macro) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(io_error(path))?;
    let mut writer = MacroWriter::new(BufWriter::new(file));
    writer.write_macro(m).map_err(io_error(path))?;
    writer.into_inner().flush().map_err(io_error(path))?;

    tracing::debug!(
        path = %path.display(),
        frames = m.input_frame_count(),
        "wrote macro"
    );
    Ok(())
}
