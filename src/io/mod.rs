/*!
# IO

Reading raw edge files and writing the flat text artifacts of the pipeline.

## Formats

- **Raw edge lines** ([`raw`]): input lines of unknown encoding carrying 3 or 4
  embedded integer tokens. Tokens are extracted as maximal digit runs, so commas,
  tabs, brackets and other punctuation all work as separators.
- **Weighted edge list** (`.wel`, [`wel`]): one `"<src> <dst> <timestamp>"` line per
  temporal edge, space-separated, line order = generation order. The canonical
  interchange format of the pipeline.
- **Label / split records** ([`wel`]): one `"<node_id> <label_index>"` line per
  record. The split files carry a `.tsv` extension for historical reasons; their
  content is space-separated like everything else.

## Atomicity

All output files go through [`write_atomic`]: content is written to a temporary file
in the destination directory and renamed into place only on success, so an aborted
run never leaves a partial artifact.
*/

pub mod raw;
pub mod wel;

use std::{
    io::{BufWriter, Write},
    path::Path,
};

use tempfile::NamedTempFile;

use crate::error::Result;

pub use raw::*;
pub use wel::*;

/// Writes a file atomically: the payload goes to a temporary file in the target's
/// directory which is renamed onto `path` only if `write` succeeds.
///
/// On error the temporary file is dropped and removed; `path` is left untouched.
pub fn write_atomic<P, F>(path: P, write: F) -> Result<()>
where
    P: AsRef<Path>,
    F: FnOnce(&mut dyn Write) -> Result<()>,
{
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        write(&mut writer)?;
        writer.flush()?;
    }
    tmp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
