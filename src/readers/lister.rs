use crate::errors::{MzTraceError, Result};
use crate::traits::file_lister::FileLister;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_EXTENSIONS: [&str; 4] = ["mzml", "mzxml", "mgf", "d"];

/// Lists the spectral files directly inside a directory (no recursion),
/// sorted by file name.
#[derive(Debug, Clone)]
pub struct SpectralFileLister {
    extensions: Vec<String>,
}

impl Default for SpectralFileLister {
    fn default() -> Self {
        Self::with_extensions(&DEFAULT_EXTENSIONS)
    }
}

impl SpectralFileLister {
    pub fn with_extensions(extensions: &[&str]) -> Self {
        Self {
            extensions: extensions.iter().map(|x| x.to_lowercase()).collect(),
        }
    }

    pub fn matches(&self, path: &Path) -> bool {
        match path.extension() {
            Some(ext) => {
                let ext = ext.to_string_lossy().to_lowercase();
                self.extensions.iter().any(|x| *x == ext)
            }
            None => false,
        }
    }
}

impl FileLister for SpectralFileLister {
    fn list(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(root).map_err(|e| {
            MzTraceError::config(format!("Unable to list {}: {}", root.display(), e))
        })?;

        let mut out = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if self.matches(&path) {
                out.push(path);
            } else {
                debug!("Skipping {}", path.display());
            }
        }
        out.sort_unstable_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_matching() {
        let lister = SpectralFileLister::default();
        assert!(lister.matches(Path::new("a_pos.mzML")));
        assert!(lister.matches(Path::new("a_pos.MZML")));
        assert!(lister.matches(Path::new("run.d")));
        assert!(!lister.matches(Path::new("notes.txt")));
        assert!(!lister.matches(Path::new("mzml")));
    }

    #[test]
    fn test_list_sorted_and_filtered() {
        let root = std::env::temp_dir().join(format!("mztrace_lister_{}", std::process::id()));
        std::fs::create_dir_all(&root).unwrap();
        for name in ["c_neg.mzML", "a_pos.mzML", "b.txt", "B_pos.mzML"] {
            std::fs::write(root.join(name), b"").unwrap();
        }

        let listed = SpectralFileLister::default().list(&root).unwrap();
        let names: Vec<String> = listed
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["B_pos.mzML", "a_pos.mzML", "c_neg.mzML"]);

        std::fs::remove_dir_all(&root).unwrap();
    }

    #[test]
    fn test_list_missing_root() {
        let out = SpectralFileLister::default().list(Path::new("/definitely/not/here"));
        assert!(matches!(out, Err(MzTraceError::ConfigError(_))));
    }
}
