pub mod memory;
pub mod plot;
pub mod table;

pub use memory::MemorySink;
pub use plot::SvgPlotSink;
pub use table::SummaryTableSink;
