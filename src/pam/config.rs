use super::error::{PamError, PamResult};
use crate::utils::consts::{DEFAULT_BIT_RATE, DEFAULT_SAMPLE_RATE};
use serde::{Deserialize, Serialize};

/// Bit rate / sample rate pair shared by the transmitter and the receiver
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PamConfig {
    pub bit_rate: f64,    // Fb [bits/s]
    pub sample_rate: f64, // Fs [Hz]
}

impl Default for PamConfig {
    fn default() -> Self {
        Self {
            bit_rate: DEFAULT_BIT_RATE,
            sample_rate: DEFAULT_SAMPLE_RATE,
        }
    }
}

impl PamConfig {
    pub fn new(bit_rate: f64, sample_rate: f64) -> PamResult<Self> {
        let config = Self {
            bit_rate,
            sample_rate,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks `Fs > Fb > 0` with both rates finite.
    pub fn validate(&self) -> PamResult<()> {
        validate_bit_rate(self.bit_rate)?;
        if !self.sample_rate.is_finite() || self.sample_rate <= self.bit_rate {
            return Err(PamError::invalid(format!(
                "sample rate {} must be finite and greater than bit rate {}",
                self.sample_rate, self.bit_rate
            )));
        }
        Ok(())
    }

    /// Tb = 1/Fb
    pub fn bit_period(&self) -> f64 {
        1.0 / self.bit_rate
    }

    /// Fs/Fb, not necessarily an integer
    pub fn samples_per_bit(&self) -> f64 {
        self.sample_rate / self.bit_rate
    }
}

/// Receiver timing: sampling instants are `t = n*Tb + delay_fraction*Tb`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReceiverParams {
    pub bit_rate: f64,
    pub delay_fraction: f64,
}

impl ReceiverParams {
    pub fn new(bit_rate: f64) -> Self {
        Self {
            bit_rate,
            delay_fraction: 0.0,
        }
    }

    pub fn with_delay(bit_rate: f64, delay_fraction: f64) -> Self {
        Self {
            bit_rate,
            delay_fraction,
        }
    }

    /// Builds parameters from `[Fb]` or `[Fb, dly]`.
    pub fn from_slice(params: &[f64]) -> PamResult<Self> {
        let params = match *params {
            [bit_rate] => Self::new(bit_rate),
            [bit_rate, delay_fraction] => {
                Self::with_delay(bit_rate, delay_fraction)
            }
            _ => {
                return Err(PamError::invalid(format!(
                    "receiver parameters must be [Fb] or [Fb, dly], got {} values",
                    params.len()
                )));
            }
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> PamResult<()> {
        validate_bit_rate(self.bit_rate)?;
        if !(0.0..1.0).contains(&self.delay_fraction) {
            return Err(PamError::invalid(format!(
                "delay fraction {} outside [0, 1)",
                self.delay_fraction
            )));
        }
        Ok(())
    }

    pub fn bit_period(&self) -> f64 {
        1.0 / self.bit_rate
    }
}

fn validate_bit_rate(bit_rate: f64) -> PamResult<()> {
    if !bit_rate.is_finite() || bit_rate <= 0.0 {
        return Err(PamError::invalid(format!(
            "bit rate {bit_rate} must be finite and positive"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PamConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.samples_per_bit(), 441.0);
        assert_eq!(config.bit_period(), 0.01);
    }

    #[test]
    fn test_rejects_bad_rates() {
        assert!(matches!(
            PamConfig::new(0.0, 44100.0),
            Err(PamError::InvalidParameter(_))
        ));
        assert!(matches!(
            PamConfig::new(-5.0, 44100.0),
            Err(PamError::InvalidParameter(_))
        ));
        assert!(matches!(
            PamConfig::new(100.0, 100.0),
            Err(PamError::InvalidParameter(_))
        ));
        assert!(matches!(
            PamConfig::new(f64::NAN, 44100.0),
            Err(PamError::InvalidParameter(_))
        ));
        assert!(matches!(
            PamConfig::new(100.0, f64::INFINITY),
            Err(PamError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_receiver_params_shapes() {
        let only_rate = ReceiverParams::from_slice(&[100.0]).unwrap();
        assert_eq!(only_rate.delay_fraction, 0.0);

        let pair = ReceiverParams::from_slice(&[100.0, 0.25]).unwrap();
        assert_eq!(pair, ReceiverParams::with_delay(100.0, 0.25));

        assert!(matches!(
            ReceiverParams::from_slice(&[]),
            Err(PamError::InvalidParameter(_))
        ));
        assert!(matches!(
            ReceiverParams::from_slice(&[100.0, 0.1, 0.2]),
            Err(PamError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_receiver_params_delay_range() {
        assert!(ReceiverParams::with_delay(100.0, 0.0).validate().is_ok());
        assert!(ReceiverParams::with_delay(100.0, 0.99).validate().is_ok());
        assert!(ReceiverParams::with_delay(100.0, 1.0).validate().is_err());
        assert!(ReceiverParams::with_delay(100.0, -0.1).validate().is_err());
        assert!(ReceiverParams::with_delay(100.0, f64::NAN).validate().is_err());
        assert!(ReceiverParams::new(0.0).validate().is_err());
    }
}
