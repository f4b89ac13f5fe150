use crate::pam::PamConfig;

pub fn print_banner(config: &PamConfig) {
    eprintln!(
        "ftpam: unipolar flat-top PAM, Fb = {} bits/s, Fs = {} Hz ({:.1} samples/bit)",
        config.bit_rate,
        config.sample_rate,
        config.samples_per_bit()
    );
}
