/// PAM sender: text -> bits -> flat-top waveform -> WAV
use crate::acoustic::io::write_wav;
use crate::pam::{PamConfig, PamError, PamResult, PamSignal, modulate_bits};
use crate::pam::text_codec::{self, CodecConfig};
use std::path::Path;
use tracing::{debug, info};

/// Configuration for the PAM sender
#[derive(Clone, Debug, Default)]
pub struct SenderConfig {
    pub pam: PamConfig,
    pub codec: CodecConfig,
}

/// What went out on the wire
#[derive(Clone, Debug)]
pub struct Transmission {
    pub bits: Vec<u8>,
    pub signal: PamSignal,
}

pub struct PamSender {
    config: SenderConfig,
}

impl PamSender {
    pub fn new(config: SenderConfig) -> PamResult<Self> {
        config.pam.validate()?;
        Ok(Self { config })
    }

    pub fn new_default() -> Self {
        Self {
            config: SenderConfig::default(),
        }
    }

    /// Transmit text data
    pub fn transmit_text(&self, text: &str) -> PamResult<Transmission> {
        info!("Text to transmit: {}", text);

        let bits = text_codec::encode(text, &self.config.codec)?;
        let signal = modulate_bits(&bits, &self.config.pam)?;

        info!(
            "Text length: {} symbols, {} bits, {} samples ({:.3} s)",
            text.chars().count(),
            bits.len(),
            signal.len(),
            signal.duration()
        );
        debug!(
            "Time axis starts at index {} (t0 = {:.6} s)",
            signal.first_index,
            signal.time_axis.first().copied().unwrap_or_default()
        );

        Ok(Transmission { bits, signal })
    }

    /// Modulate `text` and write the waveform to `wav_path`
    pub fn transmit_to_wav(
        &self,
        text: &str,
        wav_path: &Path,
    ) -> PamResult<Transmission> {
        let sample_rate = wav_sample_rate(self.config.pam.sample_rate)?;
        let transmission = self.transmit_text(text)?;
        write_wav(wav_path, sample_rate, &transmission.signal.samples)?;
        info!("Waveform written to: {}", wav_path.display());
        Ok(transmission)
    }
}

/// WAV headers carry an integer rate
fn wav_sample_rate(sample_rate: f64) -> PamResult<u32> {
    if sample_rate.fract() != 0.0 || sample_rate > f64::from(u32::MAX) {
        return Err(PamError::invalid(format!(
            "sample rate {sample_rate} cannot be stored in a WAV header"
        )));
    }
    Ok(sample_rate as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transmit_hi() {
        let sender = PamSender::new_default();
        let tx = sender.transmit_text("Hi").unwrap();
        assert_eq!(tx.bits.len(), 16);
        assert_eq!(tx.signal.first_index, -221);
        assert_eq!(tx.signal.len(), tx.signal.time_axis.len());
    }

    #[test]
    fn test_rejects_bad_config() {
        let config = SenderConfig {
            pam: PamConfig {
                bit_rate: 100.0,
                sample_rate: 50.0,
            },
            ..SenderConfig::default()
        };
        assert!(matches!(
            PamSender::new(config),
            Err(PamError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_fractional_rate_not_writable() {
        assert!(wav_sample_rate(44100.0).is_ok());
        assert!(matches!(
            wav_sample_rate(44100.5),
            Err(PamError::InvalidParameter(_))
        ));
    }
}
