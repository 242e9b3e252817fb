//! Traits for format-agnostic parsing of string tables.

use std::{
    borrow::Cow,
    fs::File,
    io::{BufRead, Cursor, Read},
    path::Path,
};

use crate::error::Error;

/// A trait for parsing a localization resource from one file.
///
/// Tables are only ever read; nothing in this crate writes them back.
///
/// # Example
///
/// ```rust,no_run
/// use localized_enum::traits::Parser;
/// let format = localized_enum::formats::strings::Format::read_from("en.lproj/Options.strings")?;
/// println!("{} pairs", format.pairs.len());
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Parser {
    /// Parse from any reader. The reader must yield UTF-8.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error>
    where
        Self: Sized;

    /// Parse from file path, decoding UTF-16 or UTF-8 with a BOM when present.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let file = File::open(path).map_err(Error::Io)?;
        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .build(file);

        let mut decoded = String::new();
        decoder.read_to_string(&mut decoded).map_err(Error::Io)?;

        Self::from_str(&decoded)
    }

    /// Parse from a string.
    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(s))
    }

    /// Parse from bytes, with the same BOM handling as [`Parser::read_from`].
    fn from_bytes(bytes: &[u8]) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let decoded = decode_bytes(bytes)?;
        Self::from_str(&decoded)
    }
}

/// Decodes raw table bytes to UTF-8.
///
/// A byte order mark selects UTF-8, UTF-16LE or UTF-16BE; without one the
/// bytes must already be valid UTF-8.
pub fn decode_bytes(bytes: &[u8]) -> Result<Cow<'_, str>, Error> {
    match encoding_rs::Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => encoding
            .decode_without_bom_handling_and_without_replacement(&bytes[bom_len..])
            .ok_or_else(|| Error::Encoding(format!("malformed {} data", encoding.name()))),
        None => std::str::from_utf8(bytes)
            .map(Cow::Borrowed)
            .map_err(|e| Error::Encoding(e.to_string())),
    }
}
