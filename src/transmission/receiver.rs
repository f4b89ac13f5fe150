/// PAM receiver: WAV -> samples -> bit decisions -> text
use crate::acoustic::io::read_wav;
use crate::pam::decision::{hard_decisions, sign_slice, threshold_decisions};
use crate::pam::modulator::receive_axis;
use crate::pam::{PamConfig, PamResult, ReceiverParams, SampledBits, sample};
use crate::pam::text_codec::{self, CodecConfig};
use crate::utils::consts::DEFAULT_BIT_RATE;
use std::path::Path;
use tracing::{debug, info};

/// How receiver samples become bits
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Decision {
    /// sign, then floor
    SignFloor,
    /// `rn >= level` is a 1
    Threshold(f64),
}

/// Configuration for the PAM receiver
#[derive(Clone, Debug)]
pub struct ReceiverConfig {
    pub params: ReceiverParams,
    pub codec: CodecConfig,
    pub decision: Decision,
}

impl Default for ReceiverConfig {
    fn default() -> Self {
        Self {
            params: ReceiverParams::new(DEFAULT_BIT_RATE),
            codec: CodecConfig::default(),
            decision: Decision::SignFloor,
        }
    }
}

/// Result of a reception
#[derive(Debug)]
pub struct Reception {
    pub sampled: SampledBits,
    pub bits: Vec<u8>,
    pub text: String,
}

pub struct PamReceiver {
    config: ReceiverConfig,
}

impl PamReceiver {
    pub fn new(config: ReceiverConfig) -> PamResult<Self> {
        config.params.validate()?;
        Ok(Self { config })
    }

    pub fn new_default() -> Self {
        Self {
            config: ReceiverConfig::default(),
        }
    }

    /// Sample, slice and decode a waveform on its own time axis
    pub fn receive_waveform(
        &self,
        time_axis: &[f64],
        waveform: &[f64],
    ) -> PamResult<Reception> {
        let sampled = sample(time_axis, waveform, &self.config.params)?;
        let bits = match self.config.decision {
            Decision::SignFloor => hard_decisions(&sign_slice(&sampled.samples)),
            Decision::Threshold(level) => {
                threshold_decisions(&sampled.samples, level)
            }
        };
        let text = text_codec::decode(&bits, &self.config.codec)?;

        debug!(
            "Sampled {} bits at Fs = {:.1} Hz, first indices {:?}",
            sampled.len(),
            sampled.sample_rate,
            &sampled.indices[..sampled.indices.len().min(4)]
        );
        info!("Received {} bits -> {} symbols", bits.len(), text.chars().count());

        Ok(Reception {
            sampled,
            bits,
            text,
        })
    }

    /// Rebuilds the time axis `k/Fs - Tb/2` for samples read back from a
    /// file and receives them.
    pub fn receive_samples(
        &self,
        sample_rate: f64,
        samples: &[f64],
    ) -> PamResult<Reception> {
        let pam = PamConfig::new(self.config.params.bit_rate, sample_rate)?;
        let time_axis = receive_axis(samples.len(), &pam)?;
        self.receive_waveform(&time_axis, samples)
    }

    pub fn receive_wav(&self, wav_path: &Path) -> PamResult<Reception> {
        let (sample_rate, samples) = read_wav(wav_path)?;
        info!(
            "Read {} samples at {} Hz from {}",
            samples.len(),
            sample_rate,
            wav_path.display()
        );
        self.receive_samples(f64::from(sample_rate), &samples)
    }
}
