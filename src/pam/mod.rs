// Flat-top unipolar PAM core
// Pure functions only: no I/O, no logging

pub mod config;
pub mod decision;
pub mod error;
pub mod modulator;
pub mod receiver;
pub mod text_codec;

pub use config::{PamConfig, ReceiverParams};
pub use error::{PamError, PamResult};
pub use modulator::{PamSignal, modulate_bits, modulate_text};
pub use receiver::{SampledBits, sample};
