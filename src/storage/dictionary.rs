//! Word Dictionary Loader.
//!
//! A word is any run of non-whitespace characters; words are separated by
//! any whitespace, newlines included. An empty file is a valid, empty
//! dictionary.

use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;
use tracing::debug;

use crate::model::Dictionary;
use crate::{Error, Result};

/// Load the word list at `path`.
pub fn load_dictionary(path: impl AsRef<Path>) -> Result<Dictionary> {
    let path = path.as_ref();
    let file = super::open(path)?;
    let dictionary = read_dictionary(&mut BufReader::new(file))?;
    debug!(path = %path.display(), words = dictionary.len(), "dictionary loaded");
    Ok(dictionary)
}

/// Parse a word list from any reader.
pub fn read_dictionary<R: Read>(reader: &mut R) -> Result<Dictionary> {
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(|e| match e.kind() {
        ErrorKind::InvalidData => Error::MalformedData("word list is not valid UTF-8".into()),
        _ => Error::Io(e),
    })?;
    Ok(Dictionary::from_words(text.split_whitespace()))
}

/// Write one word per line, in identifier order.
pub fn save_words(path: impl AsRef<Path>, dictionary: &Dictionary) -> Result<()> {
    let mut writer = BufWriter::new(super::create(path.as_ref())?);
    for (_, word) in dictionary.iter() {
        writeln!(writer, "{word}")?;
    }
    writer.flush()?;
    Ok(())
}
