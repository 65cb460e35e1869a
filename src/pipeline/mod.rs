pub mod file_tracer;
pub mod progress;
pub mod session;

pub use file_tracer::FileTracer;
pub use progress::{BarProgress, LogProgress};
pub use session::{FileFailure, Session, SessionSummary};
