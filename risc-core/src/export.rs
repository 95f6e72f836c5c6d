use crate::error::RiscError;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// Default destination of the exported report, relative to the working directory.
pub const DEFAULT_EXPORT_PATH: &str = "risc_results.csv";

/// Writes `text` verbatim to `path`, replacing any existing content.
///
/// The file handle is dropped on every return path.
pub fn export_report(text: &str, path: &str) -> Result<(), RiscError> {
    let io_err = |e| RiscError::FileIO(path.to_string(), e);

    let file = File::create(Path::new(path)).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(text.as_bytes()).map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    log::info!("Exported {} bytes to '{}'", text.len(), path);
    Ok(())
}
