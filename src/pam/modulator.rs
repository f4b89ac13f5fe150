use super::config::PamConfig;
use super::error::{PamError, PamResult};
use super::text_codec::{self, CodecConfig};

/// Flat-top PAM waveform with its time axis
#[derive(Clone, Debug, PartialEq)]
pub struct PamSignal {
    pub time_axis: Vec<f64>,
    pub samples: Vec<f64>,
    pub bit_rate: f64,
    pub sample_rate: f64,
    /// Integer index of the first sample, `round(-0.5*Fs*Tb)`
    pub first_index: i64,
}

impl PamSignal {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration(&self) -> f64 {
        self.samples.len() as f64 / self.sample_rate
    }
}

/// Axis index bounds `[ixL, ixR)` for `num_bits` bits.
fn axis_bounds(num_bits: usize, config: &PamConfig) -> (i64, i64) {
    let spb = config.samples_per_bit();
    let left = (-0.5 * spb).round() as i64;
    let right = ((num_bits as f64 - 0.5) * spb).round() as i64;
    (left, right.max(left))
}

/// Time axis of a `num_bits` long transmission, starting near -Tb/2.
pub fn time_axis(num_bits: usize, config: &PamConfig) -> PamResult<Vec<f64>> {
    config.validate()?;
    let (left, right) = axis_bounds(num_bits, config);
    Ok((left..right)
        .map(|ix| ix as f64 / config.sample_rate)
        .collect())
}

/// Time axis for `len` received samples: `k/Fs - Tb/2`.
pub fn receive_axis(len: usize, config: &PamConfig) -> PamResult<Vec<f64>> {
    config.validate()?;
    let offset = 0.5 * config.bit_period();
    Ok((0..len)
        .map(|k| k as f64 / config.sample_rate - offset)
        .collect())
}

/// Generates the unipolar flat-top PAM signal for a bitstream.
///
/// Sample `ix` (time `ix/Fs`) carries bit `floor(ix/spb + 1/2)`, i.e. the
/// bit whose interval `[(n-1/2)Tb, (n+1/2)Tb)` contains it. The couple of
/// samples that the axis rounding places outside the first or last
/// interval take the nearest bit.
pub fn modulate_bits(bits: &[u8], config: &PamConfig) -> PamResult<PamSignal> {
    config.validate()?;
    if let Some(pos) = bits.iter().position(|&b| b > 1) {
        return Err(PamError::malformed(format!(
            "bit {pos} has value {}, expected 0 or 1",
            bits[pos]
        )));
    }

    let spb = config.samples_per_bit();
    let (left, right) = axis_bounds(bits.len(), config);
    let last_bit = bits.len().saturating_sub(1) as i64;

    let mut time_axis = Vec::with_capacity((right - left) as usize);
    let mut samples = Vec::with_capacity((right - left) as usize);
    for ix in left..right {
        let n = ((ix as f64 / spb) + 0.5).floor() as i64;
        let n = n.clamp(0, last_bit) as usize;
        time_axis.push(ix as f64 / config.sample_rate);
        samples.push(f64::from(bits[n]));
    }

    Ok(PamSignal {
        time_axis,
        samples,
        bit_rate: config.bit_rate,
        sample_rate: config.sample_rate,
        first_index: left,
    })
}

/// Encodes `text` at 8 bits/symbol, LSB first, and modulates it.
pub fn modulate_text(
    text: &str,
    bit_rate: f64,
    sample_rate: f64,
) -> PamResult<PamSignal> {
    let config = PamConfig::new(bit_rate, sample_rate)?;
    let bits = text_codec::encode(text, &CodecConfig::default())?;
    modulate_bits(&bits, &config)
}
