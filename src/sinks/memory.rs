use crate::errors::Result;
use crate::models::trace::FileResult;
use crate::traits::render_sink::RenderSink;

/// Keeps every rendered result around for the rest of the session.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub results: Vec<FileResult>,
}

impl RenderSink for MemorySink {
    fn render(&mut self, result: &FileResult) -> Result<()> {
        self.results.push(result.clone());
        Ok(())
    }
}
