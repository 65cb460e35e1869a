use crate::errors::{MzTraceError, Result};
use crate::models::axis::MzAxis;
use crate::models::config::{FailurePolicy, TraceConfig};
use crate::models::feature::{FeatureSet, Polarity};
use crate::models::trace::FileResult;
use crate::pipeline::file_tracer::FileTracer;
use crate::traits::file_lister::FileLister;
use crate::traits::progress::ProgressReporter;
use crate::traits::render_sink::RenderSink;
use crate::traits::scan_source::ScanSource;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct FileFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// What a finished session did.
#[derive(Debug, Clone, Default)]
pub struct SessionSummary {
    pub files_total: usize,
    pub files_traced: usize,
    /// Only ever filled when the failure policy skips files.
    pub failures: Vec<FileFailure>,
    pub elapsed: Duration,
}

/// One batch run over a directory of spectral files.
///
/// The axis is built once and shared by every file. Each file gets the
/// feature list of its polarity, is traced, and is handed to the sink
/// before the next one is started.
pub struct Session<S, L, R, P> {
    config: TraceConfig,
    axis: MzAxis,
    features: FeatureSet,
    source: S,
    lister: L,
    sink: R,
    progress: P,
}

impl<S, L, R, P> Session<S, L, R, P>
where
    S: ScanSource,
    L: FileLister,
    R: RenderSink,
    P: ProgressReporter,
{
    pub fn new(config: TraceConfig, source: S, lister: L, sink: R, progress: P) -> Result<Self> {
        let axis = config.build_axis()?;
        let features = config.feature_set();
        info!(
            "Built m/z axis with {} points from {} to {}",
            axis.len(),
            axis.mz_min(),
            axis.mz_max()
        );
        Ok(Self {
            config,
            axis,
            features,
            source,
            lister,
            sink,
            progress,
        })
    }

    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    pub fn axis(&self) -> &MzAxis {
        &self.axis
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    pub fn into_sink(self) -> R {
        self.sink
    }

    fn tracer(&self) -> FileTracer<'_, S> {
        FileTracer::new(&self.axis, &self.source, self.config.half_window)
            .with_ms_level(self.config.ms_level)
    }

    /// Traces a single file with the features of its polarity.
    pub fn trace_file(&self, path: &Path) -> Result<FileResult> {
        let polarity = Polarity::from_path(path);
        self.tracer().trace(path, self.features.for_polarity(polarity))
    }

    fn render_outcome(
        &mut self,
        path: &Path,
        outcome: Result<FileResult>,
        summary: &mut SessionSummary,
    ) -> Result<()> {
        let outcome = outcome.and_then(|res| self.sink.render(&res));
        match (outcome, self.config.failure_policy) {
            (Ok(()), _) => {
                summary.files_traced += 1;
                Ok(())
            }
            (Err(e), FailurePolicy::Abort) => Err(e),
            (Err(e), FailurePolicy::SkipFile) => {
                warn!("Skipping {}: {:?}", path.display(), e);
                summary.failures.push(FileFailure {
                    path: path.to_path_buf(),
                    reason: format!("{:?}", e),
                });
                Ok(())
            }
        }
    }

    fn list_files(&self, root_path: &Path) -> Result<Vec<PathBuf>> {
        let files = self.lister.list(root_path)?;
        info!(
            "Found {} spectral files under {}",
            files.len(),
            root_path.display()
        );
        Ok(files)
    }

    /// Traces and renders every file under `root_path`, one after the other.
    pub fn run(&mut self, root_path: &Path) -> Result<SessionSummary> {
        let st = Instant::now();
        let files = self.list_files(root_path)?;
        let total = files.len();
        let mut summary = SessionSummary {
            files_total: total,
            ..Default::default()
        };

        self.progress.begin(total);
        for (i, path) in files.iter().enumerate() {
            self.progress.file_started(i + 1, total, path);
            let outcome = self.trace_file(path);
            self.render_outcome(path, outcome, &mut summary)?;
            self.progress.file_finished(i + 1, total, path);
        }
        self.progress.finish();

        summary.elapsed = st.elapsed();
        info!("Execution time: {:?}", summary.elapsed);
        Ok(summary)
    }

    /// Same as [`Session::run`], but the files are traced on the rayon
    /// pool. Rendering and progress still happen in listing order once
    /// all files are traced.
    pub fn run_parallel(&mut self, root_path: &Path) -> Result<SessionSummary> {
        let st = Instant::now();
        let files = self.list_files(root_path)?;
        let total = files.len();
        let mut summary = SessionSummary {
            files_total: total,
            ..Default::default()
        };

        self.progress.begin(total);
        let outcomes: Vec<Result<FileResult>> = {
            let tracer = self.tracer();
            let features = &self.features;
            files
                .par_iter()
                .map(|path| {
                    let polarity = Polarity::from_path(path);
                    tracer.trace(path, features.for_polarity(polarity))
                })
                .collect()
        };

        for (i, (path, outcome)) in files.iter().zip(outcomes).enumerate() {
            self.progress.file_started(i + 1, total, path);
            self.render_outcome(path, outcome, &mut summary)?;
            self.progress.file_finished(i + 1, total, path);
        }
        self.progress.finish();

        summary.elapsed = st.elapsed();
        info!("Execution time: {:?}", summary.elapsed);
        Ok(summary)
    }
}

impl SessionSummary {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && self.files_traced == self.files_total
    }

    /// Turns skipped files back into an error, for callers that want a
    /// non-zero exit after a lenient run.
    pub fn into_result(self) -> Result<SessionSummary> {
        match self.failures.first() {
            None => Ok(self),
            Some(first) => Err(MzTraceError::custom(format!(
                "{} of {} files failed, first was {}: {}",
                self.failures.len(),
                self.files_total,
                first.path.display(),
                first.reason
            ))),
        }
    }
}
