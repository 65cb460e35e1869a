use crate::errors::ScanReadError;
use crate::models::scan::RawScan;
use std::path::Path;

pub type ScanIter<'a> = Box<dyn Iterator<Item = Result<RawScan, ScanReadError>> + 'a>;

/// Something that can open a spectral file and stream its scans.
///
/// The returned iterator is lazy and forward-only, scans come out in
/// file order. It is consumed once, so callers count scans as they go
/// instead of asking for a length up front.
pub trait ScanSource: Send + Sync {
    fn open<'a>(&'a self, path: &Path) -> Result<ScanIter<'a>, ScanReadError>;
}
