use crate::pam::{PamError, PamResult};
use crate::utils::consts::{WAV_BITS_PER_SAMPLE, WAV_PEAK};
use std::fs;
use std::path::Path;

/// Scales `signal` so its peak magnitude is `WAV_PEAK`.
/// An all-zero signal is returned unchanged.
pub fn normalize_peak(signal: &[f64]) -> Vec<f64> {
    let peak = signal.iter().fold(0.0f64, |acc, &x| acc.max(x.abs()));
    if peak == 0.0 {
        return signal.to_vec();
    }
    signal.iter().map(|&x| WAV_PEAK * x / peak).collect()
}

/// Writes a mono 16-bit PCM WAV file, peak-normalized below full scale.
pub fn write_wav(
    filename: &Path,
    sample_rate: u32,
    signal: &[f64],
) -> PamResult<()> {
    if let Some(non_finite) = signal.iter().position(|x| !x.is_finite()) {
        return Err(PamError::malformed(format!(
            "sample {non_finite} is not finite"
        )));
    }
    if let Some(parent) = filename.parent() {
        fs::create_dir_all(parent)?;
    }
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: WAV_BITS_PER_SAMPLE,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(filename, spec)?;
    let amplitude = i16::MAX as f64;
    for sample in normalize_peak(signal) {
        writer.write_sample((sample * amplitude).round() as i16)?;
    }
    writer.finalize()?;
    Ok(())
}

/// Reads a WAV file as `(sample_rate, samples)` with samples in [-1, 1).
/// Multi-channel files keep only the first channel.
pub fn read_wav(filename: &Path) -> PamResult<(u32, Vec<f64>)> {
    let reader = hound::WavReader::open(filename)?;
    let spec = reader.spec();
    let channels = usize::from(spec.channels.max(1));

    let samples: Vec<f64> = match spec.sample_format {
        hound::SampleFormat::Float => reader
            .into_samples::<f32>()
            .step_by(channels)
            .map(|sample| sample.map(f64::from))
            .collect::<Result<Vec<f64>, _>>()?,
        hound::SampleFormat::Int => {
            let amplitude =
                (1i64 << spec.bits_per_sample.saturating_sub(1)) as f64;
            reader
                .into_samples::<i32>()
                .step_by(channels)
                .map(|sample| sample.map(|value| value as f64 / amplitude))
                .collect::<Result<Vec<f64>, _>>()?
        }
    };

    Ok((spec.sample_rate, samples))
}
