// Re-export main structures
pub use crate::models::axis::MzAxis;
pub use crate::models::config::TraceConfig;
pub use crate::models::trace::FileResult;
pub use crate::pipeline::session::{Session, SessionSummary};

// Re-export traits
pub use crate::traits::aggregator::Aggregator;
pub use crate::traits::file_lister::FileLister;
pub use crate::traits::progress::ProgressReporter;
pub use crate::traits::render_sink::RenderSink;
pub use crate::traits::scan_source::ScanSource;

// Declare modules
pub mod errors;
pub mod models;
pub mod pipeline;
pub mod readers;
pub mod sinks;
pub mod traits;
pub mod utils;
