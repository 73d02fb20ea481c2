//! In-memory HIP-number index over raw catalog lines.
//!
//! The Hipparcos main catalog is one fixed-width line per star. [`Catalog`]
//! keeps the raw lines keyed by HIP number and parses a line into a
//! [`RawStarRecord`] only when that star is looked up, so one malformed
//! record affects one query, not the whole load.
//!
//! Obtaining `hip_main.dat` (download, decompression, caching) is the
//! caller's concern; this type starts from a file or reader that already
//! holds the text.

use crate::record::RawStarRecord;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Map from HIP number to raw catalog line.
pub struct Catalog {
    stars: HashMap<u32, String>,
}

impl Catalog {
    /// Load a catalog from a `hip_main.dat`-format file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or read. Individual
    /// lines without a readable HIP field are skipped with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).with_context(|| format!("Failed to open catalog file: {:?}", path))?;
        Self::from_reader(BufReader::new(file))
    }

    /// Build a catalog from any line-oriented reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut stars = HashMap::new();
        for (line_num, line) in reader.lines().enumerate() {
            let line = line.context("Failed to read catalog line")?;
            match RawStarRecord::hip_of_line(&line) {
                Some(hip) => {
                    stars.insert(hip, line);
                }
                None if line.len() > 10 => {
                    eprintln!("Warning: no HIP number on line {}", line_num + 1);
                }
                None => {}
            }
        }
        Ok(Self { stars })
    }

    /// Look up a star by HIP number and parse its record.
    ///
    /// # Errors
    ///
    /// [`StarError::NotInCatalog`](starlore_core::StarError::NotInCatalog)
    /// for an absent id, or [`StarError::Record`](starlore_core::StarError::Record)
    /// if the stored line is malformed.
    pub fn get(&self, hip: u32) -> starlore_core::StarResult<RawStarRecord> {
        let line = self
            .stars
            .get(&hip)
            .ok_or(starlore_core::StarError::NotInCatalog { hip })?;
        RawStarRecord::parse_line(line)
    }

    /// Number of indexed stars.
    pub fn len(&self) -> usize {
        self.stars.len()
    }

    /// True when no star was indexed.
    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}
