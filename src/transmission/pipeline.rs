/// End-to-end loopback: sender -> (WAV file) -> receiver -> comparison
use crate::pam::PamResult;
use crate::transmission::{
    PamReceiver, PamSender, Reception, TextComparisonResult, TextProcessor,
    Transmission,
};
use std::path::Path;
use tracing::info;

#[derive(Debug)]
pub struct LoopbackReport {
    pub transmission: Transmission,
    pub reception: Reception,
    pub comparison: TextComparisonResult,
}

/// Sends `text` through the identity channel, or through `wav_path` when
/// given, and compares what comes out.
pub fn loopback(
    text: &str,
    sender: &PamSender,
    receiver: &PamReceiver,
    wav_path: Option<&Path>,
) -> PamResult<LoopbackReport> {
    let (transmission, reception) = match wav_path {
        Some(path) => {
            let transmission = sender.transmit_to_wav(text, path)?;
            (transmission, receiver.receive_wav(path)?)
        }
        None => {
            let transmission = sender.transmit_text(text)?;
            let reception = receiver.receive_waveform(
                &transmission.signal.time_axis,
                &transmission.signal.samples,
            )?;
            (transmission, reception)
        }
    };

    info!("Recovered text: {}", reception.text);
    let comparison = TextProcessor::compare_texts(text, &reception.text);
    TextProcessor::log_comparison(&comparison);

    Ok(LoopbackReport {
        transmission,
        reception,
        comparison,
    })
}
