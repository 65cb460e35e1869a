use crate::errors::ScanReadError;
use crate::models::scan::RawScan;
use crate::traits::scan_source::{ScanIter, ScanSource};
use std::collections::BTreeMap;
use std::path::Path;
use timsrust::converters::ConvertableDomain;
use timsrust::readers::{FrameReader, MetadataReader};
use timsrust::{Frame, MSLevel, TimsRustError};
use tracing::{info, instrument, trace};

/// Reads Bruker timsTOF `.d` directories frame by frame.
///
/// Each frame becomes one scan: peaks of all mobility scans are summed
/// per TOF index and the TOF indices are converted to m/z with the
/// converter stored in `analysis.tdf`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TdfScanSource;

impl ScanSource for TdfScanSource {
    #[instrument(name = "TdfScanSource::open", skip(self))]
    fn open<'a>(&'a self, path: &Path) -> Result<ScanIter<'a>, ScanReadError> {
        let frame_reader = FrameReader::new(path).map_err(TimsRustError::from)?;
        let sql_path = path.join("analysis.tdf");
        let meta_converters = MetadataReader::new(&sql_path).map_err(TimsRustError::from)?;
        let mz_converter = meta_converters.mz_converter;

        let num_frames = frame_reader.len();
        info!("Opened {} with {} frames", path.display(), num_frames);

        let iter = (0..num_frames).map(move |i| -> Result<RawScan, ScanReadError> {
            let frame = frame_reader.get(i).map_err(TimsRustError::from)?;
            Ok(collapse_frame(&frame, i, |tof| mz_converter.convert(tof)))
        });
        Ok(Box::new(iter))
    }
}

pub fn ms_level_number(ms_level: MSLevel) -> Option<u8> {
    match ms_level {
        MSLevel::MS1 => Some(1),
        MSLevel::MS2 => Some(2),
        _ => None,
    }
}

/// Squashes the mobility dimension of a frame into a single spectrum.
///
/// `tof_to_mz` has to be monotonically increasing so the m/z values come
/// out sorted.
pub fn collapse_frame<F>(frame: &Frame, index: usize, tof_to_mz: F) -> RawScan
where
    F: Fn(u32) -> f64,
{
    let mut tof_tree: BTreeMap<u32, u64> = BTreeMap::new();
    for (tof, intensity) in frame.tof_indices.iter().zip(frame.intensities.iter()) {
        let u64_intensity = *intensity as u64;
        tof_tree
            .entry(*tof)
            .and_modify(|curr| *curr += u64_intensity)
            .or_insert(u64_intensity);
    }
    trace!(
        "Frame {} collapsed from {} peaks to {} tof bins",
        frame.index,
        frame.tof_indices.len(),
        tof_tree.len()
    );

    let mut mz_values = Vec::with_capacity(tof_tree.len());
    let mut intensity_values = Vec::with_capacity(tof_tree.len());
    let mut tic = 0u64;
    for (tof, intensity) in tof_tree {
        mz_values.push(tof_to_mz(tof));
        intensity_values.push(intensity as f64);
        tic += intensity;
    }

    let scan = RawScan::new(index, mz_values, intensity_values, tic as f64);
    match ms_level_number(frame.ms_level) {
        Some(level) => scan.with_ms_level(level),
        None => scan,
    }
}
