use crate::errors::Result;
use std::path::{Path, PathBuf};

/// Finds the spectral files a session should process.
///
/// The order of the returned paths is the processing order, so
/// implementations must return them in a deterministic order.
pub trait FileLister: Send + Sync {
    fn list(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

impl FileLister for Vec<PathBuf> {
    fn list(&self, _root: &Path) -> Result<Vec<PathBuf>> {
        Ok(self.clone())
    }
}
