use std::path::Path;

/// Observer for session progress. Called between files, in order.
pub trait ProgressReporter {
    fn begin(&mut self, _total: usize) {}
    /// `position` is 1-based.
    fn file_started(&mut self, position: usize, total: usize, path: &Path);
    fn file_finished(&mut self, _position: usize, _total: usize, _path: &Path) {}
    fn finish(&mut self) {}
}

impl<T: ProgressReporter + ?Sized> ProgressReporter for Box<T> {
    fn begin(&mut self, total: usize) {
        (**self).begin(total)
    }
    fn file_started(&mut self, position: usize, total: usize, path: &Path) {
        (**self).file_started(position, total, path)
    }
    fn file_finished(&mut self, position: usize, total: usize, path: &Path) {
        (**self).file_finished(position, total, path)
    }
    fn finish(&mut self) {
        (**self).finish()
    }
}

/// Does nothing, for sessions nobody watches.
impl ProgressReporter for () {
    fn file_started(&mut self, _position: usize, _total: usize, _path: &Path) {}
}
