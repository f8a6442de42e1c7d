// Chunk: docs/chunks/text_codec - Byte stream load/save with terminator normalization

//! Loading and serializing buffer content as plain bytes.
//!
//! Every line terminator variant (CR, LF, CRLF) collapses into one
//! [`Glyph::LineBreak`] on load, and every `LineBreak` is written back as a
//! single LF. Input that is valid UTF-8 is decoded to characters; anything
//! else is read one character per byte so that saving reproduces it exactly.

use std::io::{self, Read, Write};

use crate::text_buffer::TextBuffer;
use crate::types::Glyph;

/// How the document bytes map to characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// UTF-8 text.
    #[default]
    Utf8,
    /// One character per byte (U+0000..=U+00FF). Used for input that is not
    /// valid UTF-8.
    Latin1,
}

impl TextEncoding {
    /// Picks the encoding for a byte stream.
    pub fn detect(bytes: &[u8]) -> Self {
        if std::str::from_utf8(bytes).is_ok() {
            TextEncoding::Utf8
        } else {
            TextEncoding::Latin1
        }
    }
}

/// Splits decoded characters into glyphs, folding CR, LF and CRLF into one break.
fn normalize<I>(chars: I) -> Vec<Glyph>
where
    I: IntoIterator<Item = char>,
{
    let mut glyphs = Vec::new();
    let mut pending_cr = false;
    for ch in chars {
        if pending_cr && ch == '\n' {
            // Second half of a CRLF pair
            pending_cr = false;
            continue;
        }
        pending_cr = ch == '\r';
        glyphs.push(Glyph::from_char(ch));
    }
    glyphs
}

impl TextBuffer {
    /// Returns the encoding used when the buffer is serialized.
    pub fn encoding(&self) -> TextEncoding {
        self.encoding
    }

    /// Appends the content of `bytes` at the end of the buffer.
    ///
    /// The cursor is not moved. The buffer's encoding becomes the one detected
    /// for `bytes`.
    pub fn load_bytes(&mut self, bytes: &[u8]) {
        let encoding = TextEncoding::detect(bytes);
        let glyphs = match std::str::from_utf8(bytes) {
            Ok(text) => normalize(text.chars()),
            Err(_) => normalize(bytes.iter().map(|&b| char::from(b))),
        };
        let count = glyphs.len();
        for glyph in glyphs {
            self.append_glyph(glyph);
        }
        self.encoding = encoding;
        tracing::debug!(bytes = bytes.len(), chars = count, ?encoding, "loaded bytes");
    }

    /// Reads the whole stream and appends it to the buffer.
    ///
    /// The stream is read completely before anything is inserted, so a read
    /// error leaves the buffer unchanged.
    pub fn load_from_reader<R: Read>(&mut self, mut reader: R) -> io::Result<()> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        self.load_bytes(&bytes);
        Ok(())
    }

    /// Serializes the buffer: one LF per line break, other characters in the
    /// buffer's encoding.
    ///
    /// In a Latin-1 document, characters above U+00FF are written as `?`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.len());
        let mut utf8 = [0u8; 4];
        for (_, glyph) in self.store().iter() {
            let ch = glyph.to_char();
            match self.encoding {
                TextEncoding::Utf8 => {
                    bytes.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
                }
                TextEncoding::Latin1 => {
                    bytes.push(u8::try_from(u32::from(ch)).unwrap_or(b'?'));
                }
            }
        }
        bytes
    }

    /// Writes the serialized buffer to `writer`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(&self.to_bytes())?;
        writer.flush()
    }
}
