use super::mzml::MzMLScanSource;
use super::tdf::TdfScanSource;
use crate::errors::ScanReadError;
use crate::traits::scan_source::{ScanIter, ScanSource};
use std::path::Path;

/// Picks the reader for a path: Bruker `.d` directories go to timsrust,
/// everything else to mzdata.
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoScanSource {
    mzml: MzMLScanSource,
    tdf: TdfScanSource,
}

pub fn is_bruker_dir(path: &Path) -> bool {
    let has_d_extension = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("d"))
        .unwrap_or(false);
    has_d_extension || path.join("analysis.tdf").is_file()
}

impl ScanSource for AutoScanSource {
    fn open<'a>(&'a self, path: &Path) -> Result<ScanIter<'a>, ScanReadError> {
        if is_bruker_dir(path) {
            self.tdf.open(path)
        } else {
            self.mzml.open(path)
        }
    }
}
