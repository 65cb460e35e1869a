use crate::errors::Result;
use crate::models::trace::FileResult;

/// Receives the TIC and feature traces of each file once it is traced.
///
/// Results are handed over in processing order and are not kept by
/// the session afterwards.
pub trait RenderSink {
    fn render(&mut self, result: &FileResult) -> Result<()>;
}

impl<T: RenderSink + ?Sized> RenderSink for Box<T> {
    fn render(&mut self, result: &FileResult) -> Result<()> {
        (**self).render(result)
    }
}

/// Renders into both sinks, the first one first.
impl<A: RenderSink, B: RenderSink> RenderSink for (A, B) {
    fn render(&mut self, result: &FileResult) -> Result<()> {
        self.0.render(result)?;
        self.1.render(result)
    }
}
