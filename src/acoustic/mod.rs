// Waveform persistence in WAV containers
pub mod io;
