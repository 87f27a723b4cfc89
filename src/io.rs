//! Line input for names files.
//!
//! Small files go through a `BufReader`; files at or above the mmap threshold
//! are mapped and scanned for newlines. Either way the caller gets a boxed
//! iterator of lines with CRLF endings stripped.
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use memmap2::Mmap;

/// Files this large or larger are memory-mapped.
pub const DEFAULT_MMAP_THRESHOLD_BYTES: u64 = 16 * 1024 * 1024; // 16 MiB

pub type LineIter = Box<dyn Iterator<Item = io::Result<String>> + Send + 'static>;

pub fn should_use_mmap(file_size_bytes: u64, threshold_bytes: u64) -> bool {
    file_size_bytes >= threshold_bytes
}

pub fn iter_lines_bufread<P: AsRef<Path>>(path: P) -> Result<LineIter> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    // `lines()` rejects invalid UTF-8; scraped names are often latin-1, so
    // split on raw bytes and decode lossily instead.
    let lines = BufReader::new(file)
        .split(b'\n')
        .map(|chunk| chunk.map(|bytes| decode_line(&bytes)));
    Ok(Box::new(lines))
}

pub fn iter_lines_mmap<P: AsRef<Path>>(path: P) -> Result<LineIter> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mmap = unsafe { Mmap::map(&file) }.with_context(|| format!("mmap {}", path.display()))?;
    Ok(Box::new(MappedLines { mmap, pos: 0 }))
}

struct MappedLines {
    mmap: Mmap,
    pos: usize,
}

impl Iterator for MappedLines {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let data: &[u8] = &self.mmap;
        if self.pos >= data.len() {
            return None;
        }
        let start = self.pos;
        let end = match memchr::memchr(b'\n', &data[start..]) {
            Some(off) => start + off,
            None => data.len(),
        };
        self.pos = end + 1;
        Some(Ok(decode_line(&data[start..end])))
    }
}

fn decode_line(bytes: &[u8]) -> String {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
    String::from_utf8_lossy(bytes).into_owned()
}

/// Pick mmap or buffered reading based on the file size.
pub fn iter_lines_auto<P: AsRef<Path>>(path: P, threshold_bytes: u64) -> Result<LineIter> {
    let path = path.as_ref();
    let meta = std::fs::metadata(path).with_context(|| format!("stat {}", path.display()))?;
    if meta.is_file() && should_use_mmap(meta.len(), threshold_bytes) {
        iter_lines_mmap(path)
    } else {
        iter_lines_bufread(path)
    }
}
