//! Bit decisions on receiver samples

/// Sign slicer: each sample maps to -1, 0 or 1.
///
/// For a unipolar 0/1 signal a positive sample is a "1", an exact zero
/// stays zero.
pub fn sign_slice(samples: &[f64]) -> Vec<f64> {
    samples
        .iter()
        .map(|&x| {
            if x > 0.0 {
                1.0
            } else if x < 0.0 {
                -1.0
            } else {
                0.0
            }
        })
        .collect()
}

/// Hard-decision quantizer: floor, then clamp into {0, 1}.
pub fn hard_decisions(values: &[f64]) -> Vec<u8> {
    values
        .iter()
        .map(|&x| x.floor().clamp(0.0, 1.0) as u8)
        .collect()
}

/// Slices at an explicit level: `x >= threshold` is a 1.
pub fn threshold_decisions(samples: &[f64], threshold: f64) -> Vec<u8> {
    samples.iter().map(|&x| u8::from(x >= threshold)).collect()
}
