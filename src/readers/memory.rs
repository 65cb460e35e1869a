use crate::errors::ScanReadError;
use crate::models::scan::RawScan;
use crate::traits::scan_source::{ScanIter, ScanSource};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Scans held in memory, keyed by the path they pretend to come from.
///
/// Opening a path that was never inserted fails like a missing file would.
#[derive(Debug, Default, Clone)]
pub struct InMemoryScanSource {
    files: HashMap<PathBuf, Vec<RawScan>>,
}

impl InMemoryScanSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<PathBuf>, scans: Vec<RawScan>) {
        self.files.insert(path.into(), scans);
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, scans: Vec<RawScan>) -> Self {
        self.insert(path, scans);
        self
    }

    /// Paths of all inserted files, sorted.
    pub fn paths(&self) -> Vec<PathBuf> {
        let mut out: Vec<PathBuf> = self.files.keys().cloned().collect();
        out.sort();
        out
    }
}

impl ScanSource for InMemoryScanSource {
    fn open<'a>(&'a self, path: &Path) -> Result<ScanIter<'a>, ScanReadError> {
        match self.files.get(path) {
            Some(scans) => Ok(Box::new(scans.iter().cloned().map(Ok))),
            None => Err(ScanReadError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} is not loaded", path.display()),
            ))),
        }
    }
}
