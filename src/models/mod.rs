pub mod aggregators;
pub mod axis;
pub mod config;
pub mod feature;
pub mod scan;
pub mod trace;

pub use axis::MzAxis;
pub use config::{FailurePolicy, TraceConfig};
pub use feature::{Feature, FeatureSet, Polarity};
pub use scan::{RawScan, ResampledScan};
pub use trace::{FileResult, Trace};
