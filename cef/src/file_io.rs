//! Memory-mapped access to CEF/CEB files on disk
//!
//! [`CefFile::open`] maps the file and probes its layout without decoding
//! anything else; [`CefFile::read`] decodes from the mapping.

use cef_core::format::constants::MAGIC_SIZE;
use cef_core::{BinaryHeader, CefError, FormatKind, MatrixDocument};
use memmap2::{Mmap, MmapOptions};
use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::{Path, PathBuf};

use crate::binary::encode_binary;
use crate::dispatch::{decode_with, DecodeOptions};
use crate::error::Result;
use crate::text::encode_text;

/// File handle for CEF/CEB files
pub struct CefFile {
    pub path: PathBuf,
    pub format: FormatKind,
    /// Binary preamble, present only for the binary layout
    pub header: Option<BinaryHeader>,
    mmap: Mmap,
}

impl CefFile {
    /// Open and probe an existing file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let file = File::open(&path_buf)?;

        // SAFETY: Read-only mapping; the file is not modified while mapped
        let mmap = unsafe { MmapOptions::new().map(&file)? };

        let format = probe_format(&mmap)?;
        let header = match format {
            FormatKind::Binary => Some(BinaryHeader::from_bytes(&mmap[MAGIC_SIZE..])?),
            FormatKind::Text => None,
        };

        tracing::debug!(
            path = %path_buf.display(),
            %format,
            bytes = mmap.len(),
            "opened matrix file"
        );

        Ok(Self {
            path: path_buf,
            format,
            header,
            mmap,
        })
    }

    /// Size of the mapped file in bytes
    pub fn len(&self) -> usize {
        self.mmap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mmap.is_empty()
    }

    /// Decode the whole document from the mapping
    pub fn read(&self, options: DecodeOptions) -> Result<MatrixDocument> {
        let mut cursor = Cursor::new(&self.mmap[..]);
        let doc = decode_with(&mut cursor, options)?;
        tracing::debug!(
            path = %self.path.display(),
            rows = doc.num_rows,
            columns = doc.num_columns,
            transpose = options.transpose,
            skip_matrix = options.skip_matrix,
            "decoded matrix file"
        );
        Ok(doc)
    }

    /// Write `doc` to `path` in the binary layout
    pub fn save_binary<P: AsRef<Path>>(doc: &MatrixDocument, path: P) -> Result<()> {
        Self::save(doc, path.as_ref(), FormatKind::Binary)
    }

    /// Write `doc` to `path` in the text layout
    pub fn save_text<P: AsRef<Path>>(doc: &MatrixDocument, path: P) -> Result<()> {
        Self::save(doc, path.as_ref(), FormatKind::Text)
    }

    /// Write `doc` to `path` in the given layout
    pub fn save(doc: &MatrixDocument, path: &Path, format: FormatKind) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        match format {
            FormatKind::Binary => encode_binary(doc, &mut writer)?,
            FormatKind::Text => encode_text(doc, &mut writer)?,
        }
        writer.flush()?;

        tracing::debug!(
            path = %path.display(),
            %format,
            rows = doc.num_rows,
            columns = doc.num_columns,
            "saved matrix file"
        );
        Ok(())
    }
}

fn probe_format(bytes: &[u8]) -> Result<FormatKind> {
    let tag: [u8; MAGIC_SIZE] = bytes
        .get(..MAGIC_SIZE)
        .and_then(|b| b.try_into().ok())
        .ok_or(CefError::UnknownFormat)?;
    Ok(FormatKind::from_magic(u32::from_le_bytes(tag)).ok_or(CefError::UnknownFormat)?)
}
