pub mod auto;
pub mod lister;
pub mod memory;
pub mod mzml;
pub mod tdf;

pub use auto::AutoScanSource;
pub use lister::SpectralFileLister;
pub use memory::InMemoryScanSource;
pub use mzml::MzMLScanSource;
pub use tdf::TdfScanSource;
