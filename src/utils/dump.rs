use crate::pam::{PamError, PamResult, PamSignal};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Plot data for an external viewer: the waveform drawn as a "post" step
/// function plus markers at the true sample instants `t = n*Tb`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotDump {
    pub title: String,
    pub bit_rate: f64,
    pub sample_rate: f64,
    pub num_samples: usize,
    /// Step corners; level `step_level[i]` holds from `step_time[i]` on
    pub step_time: Vec<f64>,
    pub step_level: Vec<f64>,
    pub marker_time: Vec<f64>,
    pub marker_level: Vec<f64>,
}

impl PlotDump {
    pub fn from_signal(signal: &PamSignal, bits: &[u8], title: &str) -> Self {
        let tb = 1.0 / signal.bit_rate;

        // each bit becomes two half-period corners, shifted back by Tb/2
        let mut step_time = Vec::with_capacity(2 * bits.len());
        let mut step_level = Vec::with_capacity(2 * bits.len());
        for (n, &bit) in bits.iter().enumerate() {
            for half in 0..2 {
                step_time.push((2 * n + half) as f64 * 0.5 * tb - 0.5 * tb);
                step_level.push(f64::from(bit));
            }
        }

        Self {
            title: title.to_string(),
            bit_rate: signal.bit_rate,
            sample_rate: signal.sample_rate,
            num_samples: signal.len(),
            step_time,
            step_level,
            marker_time: (0..bits.len()).map(|n| n as f64 * tb).collect(),
            marker_level: bits.iter().map(|&b| f64::from(b)).collect(),
        }
    }

    pub fn write_json(&self, path: &Path) -> PamResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(PamError::from)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Default plot title, e.g. `Unipolar Binary Flat-top PAM for 'Hi', Fb=100 bits/sec, Fs=44100 Hz`
pub fn plot_title(text: &str, bit_rate: f64, sample_rate: f64) -> String {
    format!(
        "Unipolar Binary Flat-top PAM for '{text}', Fb={bit_rate} bits/sec, Fs={sample_rate} Hz"
    )
}
