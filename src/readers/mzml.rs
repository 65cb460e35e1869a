use crate::errors::ScanReadError;
use crate::models::scan::RawScan;
use crate::traits::scan_source::{ScanIter, ScanSource};
use mzdata::prelude::*;
use mzdata::spectrum::MultiLayerSpectrum;
use mzdata::MZReader;
use std::path::Path;
use tracing::{debug, instrument};

/// Name of the controlled vocabulary parameter holding the instrument TIC.
const TIC_PARAM_NAME: &str = "total ion current";

/// Reads mzML and MGF (anything `mzdata` can sniff) one spectrum at a time.
///
/// Spectra are fetched through the offset index `mzdata` builds when
/// opening the file, so non-indexed files read the same as indexed ones
/// and a spectrum that fails to parse surfaces as an error instead of
/// ending the file early.
#[derive(Debug, Default, Clone, Copy)]
pub struct MzMLScanSource;

impl ScanSource for MzMLScanSource {
    #[instrument(name = "MzMLScanSource::open", skip(self))]
    fn open<'a>(&'a self, path: &Path) -> Result<ScanIter<'a>, ScanReadError> {
        let mut reader = MZReader::open_path(path).map_err(|e| ScanReadError::MzData {
            path: path.to_path_buf(),
            message: format!("Unable to open file: {}", e),
        })?;
        let num_spectra = reader.len();
        debug!("Opened {} with mzdata, {} spectra", path.display(), num_spectra);

        let path = path.to_path_buf();
        let iter = (0..num_spectra).map(move |i| -> Result<RawScan, ScanReadError> {
            let spectrum =
                reader
                    .get_spectrum_by_index(i)
                    .ok_or_else(|| ScanReadError::MzData {
                        path: path.clone(),
                        message: format!("Unable to read spectrum {} of {}", i, num_spectra),
                    })?;
            raw_scan_from_spectrum(&path, i, &spectrum)
        });
        Ok(Box::new(iter))
    }
}

/// TIC as reported by the file, falling back to the sum of the peak list.
fn spectrum_tic(spectrum: &MultiLayerSpectrum) -> f64 {
    spectrum
        .description()
        .get_param_by_name(TIC_PARAM_NAME)
        .and_then(|p| p.to_f64().ok())
        .unwrap_or_else(|| spectrum.peaks().tic() as f64)
}

/// Pulls (m/z, intensity) pairs out of whichever layer the spectrum carries.
///
/// mzML fills the binary arrays. Peak-list formats (MGF) fill the centroid
/// layer, or the deconvoluted one when the peaks declare a charge.
fn spectrum_peaks(spectrum: &MultiLayerSpectrum) -> Option<(Vec<f64>, Vec<f64>)> {
    if let Some(arrays) = spectrum.raw_arrays() {
        if let (Ok(mzs), Ok(intensities)) = (arrays.mzs(), arrays.intensities()) {
            return Some((
                mzs.iter().copied().collect(),
                intensities.iter().map(|x| *x as f64).collect(),
            ));
        }
    }

    if let Some(peaks) = &spectrum.peaks {
        return Some(
            peaks
                .iter()
                .map(|p| (p.mz, p.intensity as f64))
                .unzip(),
        );
    }

    if let Some(peaks) = &spectrum.deconvoluted_peaks {
        // Stored by neutral mass, so m/z order has to be restored.
        let mut pairs: Vec<(f64, f64)> = peaks
            .iter()
            .map(|p| (p.mz(), p.intensity as f64))
            .collect();
        pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
        return Some(pairs.into_iter().unzip());
    }

    None
}

fn raw_scan_from_spectrum(
    path: &Path,
    index: usize,
    spectrum: &MultiLayerSpectrum,
) -> Result<RawScan, ScanReadError> {
    let (mz_values, intensity_values) =
        spectrum_peaks(spectrum).ok_or_else(|| ScanReadError::MissingArrays {
            path: path.to_path_buf(),
            scan_index: index,
        })?;

    Ok(RawScan::new(index, mz_values, intensity_values, spectrum_tic(spectrum))
        .with_ms_level(spectrum.ms_level()))
}
