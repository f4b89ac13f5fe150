use super::config::ReceiverParams;
use super::error::{PamError, PamResult};

/// Output of the sampling receiver
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampledBits {
    /// rn: one waveform sample per bit period
    pub samples: Vec<f64>,
    /// ixn: waveform index each sample was taken from
    pub indices: Vec<usize>,
    /// Fs recovered from the time axis (0 for empty input)
    pub sample_rate: f64,
}

impl SampledBits {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Fs = (len(tt) - 1) / (tt[last] - tt[first])
pub fn recover_sample_rate(time_axis: &[f64]) -> PamResult<f64> {
    let (first, last) = match time_axis {
        [first, .., last] => (*first, *last),
        _ => {
            return Err(PamError::malformed(format!(
                "need at least two time samples to recover Fs, got {}",
                time_axis.len()
            )));
        }
    };
    let span = last - first;
    if !span.is_finite() || span <= 0.0 {
        return Err(PamError::malformed(format!(
            "time axis must be increasing, spans {first}..{last}"
        )));
    }
    Ok((time_axis.len() - 1) as f64 / span)
}

/// Positions closer than this to an integer sample index count as on it
const INDEX_TOLERANCE: f64 = 1e-6;

/// Snaps `x` to the nearest multiple of 1/2 when within tolerance.
fn snap_half(x: f64) -> f64 {
    let doubled = 2.0 * x;
    if (doubled - doubled.round()).abs() < INDEX_TOLERANCE {
        doubled.round() / 2.0
    } else {
        x
    }
}

fn ceil_tol(x: f64) -> f64 {
    if (x - x.round()).abs() < INDEX_TOLERANCE {
        x.round()
    } else {
        x.ceil()
    }
}

/// Number of bits on an axis whose first sample sits at `first` (in
/// samples) and that holds `len` samples.
///
/// Inverts the transmitter's `[round(-spb/2), round((N-1/2)spb))` bounds,
/// exact for any spb > 1.
fn bits_on_axis(first: f64, len: usize, spb: f64) -> usize {
    let right = snap_half(first).round() + len as f64;
    (right / spb + 0.5).round().max(0.0) as usize
}

/// Samples a flat-top PAM waveform once per bit period.
///
/// Bit `n` is read at `t_n = n*Tb + dly*Tb` from the waveform sample
/// nearest to that instant, kept inside the bit interval
/// `[(m-1/2)Tb, (m+1/2)Tb)` that holds the instant (`m = n` for dly < 1/2,
/// `m = n + 1` otherwise). Rounding therefore never crosses into the next
/// bit.
pub fn sample(
    time_axis: &[f64],
    waveform: &[f64],
    params: &ReceiverParams,
) -> PamResult<SampledBits> {
    params.validate()?;
    if time_axis.len() != waveform.len() {
        return Err(PamError::malformed(format!(
            "time axis has {} samples but waveform has {}",
            time_axis.len(),
            waveform.len()
        )));
    }
    if let Some(pos) = time_axis.iter().position(|t| !t.is_finite()) {
        return Err(PamError::malformed(format!(
            "time axis value at {pos} is not finite"
        )));
    }
    if let Some(pos) = waveform.iter().position(|v| !v.is_finite()) {
        return Err(PamError::malformed(format!(
            "waveform value at {pos} is not finite"
        )));
    }
    if waveform.is_empty() {
        return Ok(SampledBits::default());
    }

    let fs = recover_sample_rate(time_axis)?;
    if fs <= params.bit_rate {
        return Err(PamError::invalid(format!(
            "recovered sample rate {fs} must exceed bit rate {}",
            params.bit_rate
        )));
    }

    let tb = params.bit_period();
    let spb = fs / params.bit_rate;
    // axis position of sample 0, in samples
    let first = time_axis[0] * fs;
    let num_bits = bits_on_axis(first, waveform.len(), spb);
    let slot_offset = usize::from(params.delay_fraction >= 0.5);
    let last = waveform.len() - 1;

    let indices: Vec<usize> = (0..num_bits)
        .map(|n| {
            let t_n = n as f64 * tb + params.delay_fraction * tb;
            let nearest = ((t_n - time_axis[0]) * fs).round();

            let m = (n + slot_offset) as f64;
            let lo = ceil_tol((m - 0.5) * spb - first);
            let hi = ceil_tol((m + 0.5) * spb - first) - 1.0;
            let ix = nearest.min(hi).max(lo);
            (ix.max(0.0) as usize).min(last)
        })
        .collect();
    let samples = indices.iter().map(|&ix| waveform[ix]).collect();

    Ok(SampledBits {
        samples,
        indices,
        sample_rate: fs,
    })
}
