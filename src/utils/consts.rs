/// Default bit rate Fb (bits/s)
pub const DEFAULT_BIT_RATE: f64 = 100.0;

/// Default sample rate Fs (Hz)
pub const DEFAULT_SAMPLE_RATE: f64 = 44100.0;

/// Bits per ASCII symbol
pub const BITS_PER_SYMBOL: usize = 8;

/// Widest symbol the text codec accepts
pub const MAX_BITS_PER_SYMBOL: usize = 16;

/// Peak amplitude of a waveform written to a WAV file
pub const WAV_PEAK: f64 = 0.99;

/// Bits per sample of written WAV files
pub const WAV_BITS_PER_SAMPLE: u16 = 16;

/// Default WAV file used by the CLI
pub const DEFAULT_WAV_PATH: &str = "MyTest.wav";

/// Log level (overridable via RUST_LOG)
pub const LOG_LEVEL: &str = "info";
