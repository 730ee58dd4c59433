//! Memory-mapped file reader and hex-dump helper.
//!
//! Native rendition of the utility module that `-u` ships as C text
//! (`templates/utility/`): the same mapping-handle semantics and the same
//! hex-dump row format, kept here so the contract stays executable and
//! under test. Release is ownership-scoped — dropping the handle unmaps and
//! closes the descriptor on every exit path.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use memmap2::Mmap;

use crate::error::Result;

/// Bytes shown per hex-dump row.
const ROW_WIDTH: usize = 16;

/// A read-only, private memory mapping of a file.
///
/// Unmapped until [`map`](Self::map) succeeds; a failed `map` leaves the
/// handle untouched. [`unmap`](Self::unmap) is an idempotent no-op when
/// nothing is mapped.
#[derive(Debug, Default)]
pub struct FileMapping {
    inner: Option<Mapping>,
}

#[derive(Debug)]
struct Mapping {
    // Keeps the descriptor open for the lifetime of the map.
    _file: File,
    map: Mmap,
}

impl FileMapping {
    pub fn new() -> Self {
        Self { inner: None }
    }

    /// Map `path` read-only in full.
    ///
    /// On any failure (open or mmap) the handle is left unmodified.
    pub fn map(&mut self, path: &Path) -> Result<()> {
        let file = File::open(path)?;
        // Safety: the mapping is read-only and private, and the file stays
        // open for as long as the map lives.
        let map = unsafe { Mmap::map(&file)? };
        self.inner = Some(Mapping { _file: file, map });
        Ok(())
    }

    pub fn is_mapped(&self) -> bool {
        self.inner.is_some()
    }

    /// Mapped length in bytes; 0 when unmapped.
    pub fn len(&self) -> usize {
        self.inner.as_ref().map_or(0, |m| m.map.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The mapped bytes, if any.
    pub fn data(&self) -> Option<&[u8]> {
        self.inner.as_ref().map(|m| &m.map[..])
    }

    /// Release the mapping and close the descriptor. Calling again when
    /// already unmapped is a no-op.
    pub fn unmap(&mut self) {
        self.inner = None;
    }
}

/// Write `buffer` to `out` in 16-byte rows.
///
/// Each row: the 0-based offset in 8-digit hex, two spaces, up to 16
/// space-separated 2-digit hex byte values (missing trailing slots render as
/// 3-space blanks), one further space, then the same 16 bytes as ASCII
/// (printable 0x20..=0x7E verbatim, everything else `.`, missing trailing
/// slots as a single space).
pub fn hexdump<W: Write>(out: &mut W, buffer: &[u8]) -> io::Result<()> {
    for (row, chunk) in buffer.chunks(ROW_WIDTH).enumerate() {
        write!(out, "{:08x}  ", row * ROW_WIDTH)?;
        for i in 0..ROW_WIDTH {
            match chunk.get(i) {
                Some(b) => write!(out, "{b:02x} ")?,
                None => write!(out, "   ")?,
            }
        }
        write!(out, " ")?;
        for i in 0..ROW_WIDTH {
            match chunk.get(i) {
                Some(&b) if (0x20..=0x7e).contains(&b) => write!(out, "{}", b as char)?,
                Some(_) => write!(out, ".")?,
                None => write!(out, " ")?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dump_to_string(buffer: &[u8]) -> String {
        let mut out = Vec::new();
        hexdump(&mut out, buffer).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_hexdump_row_count() {
        assert_eq!(dump_to_string(&[]).lines().count(), 0);
        assert_eq!(dump_to_string(&[0u8; 1]).lines().count(), 1);
        assert_eq!(dump_to_string(&[0u8; 16]).lines().count(), 1);
        assert_eq!(dump_to_string(&[0u8; 17]).lines().count(), 2);
        assert_eq!(dump_to_string(&[0u8; 33]).lines().count(), 3);
    }

    #[test]
    fn test_hexdump_exact_partial_row() {
        let out = dump_to_string(b"ABC");
        let expected = format!(
            "00000000  41 42 43 {} ABC{}\n",
            "   ".repeat(13),
            " ".repeat(13)
        );
        assert_eq!(out, expected);
    }

    #[test]
    fn test_hexdump_full_row_width() {
        let out = dump_to_string(&[0x41u8; 16]);
        // 8 offset + 2 + 16*3 hex + 1 + 16 ascii = 75 columns per row
        assert_eq!(out.lines().next().unwrap().len(), 75);
        assert!(out.ends_with("AAAAAAAAAAAAAAAA\n"));
    }

    #[test]
    fn test_hexdump_second_row_offset() {
        let out = dump_to_string(&[0u8; 17]);
        assert!(out.lines().nth(1).unwrap().starts_with("00000010  00 "));
    }

    #[test]
    fn test_hexdump_nonprintable_as_dots() {
        let out = dump_to_string(&[0x00, 0x1f, 0x20, 0x41, 0x7e, 0x7f]);
        assert!(out.contains(".. A~."));
    }

    #[test]
    fn test_map_populates_size_and_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        std::fs::write(&path, b"hello world").unwrap();

        let mut mapping = FileMapping::new();
        mapping.map(&path).unwrap();
        assert!(mapping.is_mapped());
        assert_eq!(mapping.len(), 11);
        assert_eq!(mapping.data().unwrap(), b"hello world");
    }

    #[test]
    fn test_unmap_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        std::fs::write(&path, b"x").unwrap();

        let mut mapping = FileMapping::new();
        mapping.map(&path).unwrap();

        mapping.unmap();
        assert!(!mapping.is_mapped());
        assert_eq!(mapping.len(), 0);
        assert!(mapping.data().is_none());

        mapping.unmap();
        assert!(!mapping.is_mapped());
    }

    #[test]
    fn test_map_nonexistent_leaves_handle_unmapped() {
        let dir = tempfile::tempdir().unwrap();
        let mut mapping = FileMapping::new();
        assert!(mapping.map(&dir.path().join("missing.bin")).is_err());
        assert!(!mapping.is_mapped());
    }
}
