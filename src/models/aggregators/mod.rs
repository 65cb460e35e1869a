pub mod trace_agg;

pub use trace_agg::FileTraceAggregator;
pub use trace_agg::ScanIntensities;
