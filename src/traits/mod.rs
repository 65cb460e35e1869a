pub mod aggregator;
pub mod file_lister;
pub mod progress;
pub mod render_sink;
pub mod scan_source;
