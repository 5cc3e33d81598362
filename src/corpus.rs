//! Facilities for loading the source text from disk.

use std::fs;
use std::path::Path;

use crate::error::{Result, WfreqError};

/// Loads the input file into memory as a UTF-8 string.
///
/// File existence, readability, and encoding failures surface here as
/// [`WfreqError::Io`] with the offending path attached; an empty file is
/// rejected with [`WfreqError::EmptyCorpus`]. The counting pipeline itself
/// never touches the filesystem.
pub fn load_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|err| WfreqError::io(err, Some(path.to_path_buf())))?;
    if text.is_empty() {
        return Err(WfreqError::EmptyCorpus(path.to_path_buf()));
    }
    Ok(text)
}
