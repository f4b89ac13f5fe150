use ftpam::pam::decision::{hard_decisions, sign_slice};
use ftpam::pam::modulator::time_axis;
use ftpam::pam::{
    PamConfig, ReceiverParams, modulate_bits, modulate_text, sample,
};
use ftpam::pam::text_codec::{self, CodecConfig};
use ftpam::transmission::{
    PamReceiver, PamSender, SenderConfig, TextProcessor, loopback,
};
use rand::Rng;

fn random_message(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| rng.random_range(0x20u8..0x7f) as char)
        .collect()
}

fn decode_waveform(tt: &[f64], rt: &[f64], params: &ReceiverParams) -> Vec<u8> {
    let rn = sample(tt, rt, params).unwrap();
    hard_decisions(&sign_slice(&rn.samples))
}

#[test]
fn round_trip_integer_samples_per_bit() {
    for spb in [2.0, 3.0, 4.0, 10.0, 441.0] {
        let fb = 100.0;
        let message = random_message(24);
        let signal = modulate_text(&message, fb, fb * spb).unwrap();

        let bits =
            decode_waveform(&signal.time_axis, &signal.samples, &ReceiverParams::new(fb));
        let text = text_codec::decode(&bits, &CodecConfig::default()).unwrap();
        assert_eq!(text, message, "samples per bit = {spb}");
    }
}

#[test]
fn axis_length_formula() {
    for (fb, fs) in [(100.0, 44100.0), (100.0, 8000.0), (300.0, 1000.0)] {
        let config = PamConfig::new(fb, fs).unwrap();
        for n in [1usize, 8, 16, 57] {
            let spb = fs / fb;
            let expected = ((n as f64 - 0.5) * spb).round() - (-0.5 * spb).round();
            let tt = time_axis(n, &config).unwrap();
            assert_eq!(tt.len(), expected as usize, "Fb={fb} Fs={fs} N={n}");
        }
    }
}

#[test]
fn flat_top_within_bit_intervals() {
    let config = PamConfig::new(100.0, 44100.0).unwrap();
    let bits = text_codec::encode("Flat", &CodecConfig::default()).unwrap();
    let signal = modulate_bits(&bits, &config).unwrap();
    let spb = config.samples_per_bit();

    for (k, &value) in signal.samples.iter().enumerate() {
        let ix = signal.first_index + k as i64;
        // bit n covers (n - 1/2)*spb <= ix < (n + 1/2)*spb
        let n = ((ix as f64 + 0.5 * spb) / spb).floor() as i64;
        if n < 0 || n >= bits.len() as i64 {
            continue;
        }
        assert_eq!(value, f64::from(bits[n as usize]), "sample {k}");
    }
}

#[test]
fn delay_fraction_recovers_same_bits() {
    let fb = 100.0;
    let message = random_message(12);

    for spb in [2, 4, 10, 80, 441] {
        let fs = fb * spb as f64;
        let signal = modulate_text(&message, fb, fs).unwrap();
        let reference = decode_waveform(
            &signal.time_axis,
            &signal.samples,
            &ReceiverParams::new(fb),
        );
        assert_eq!(
            text_codec::decode(&reference, &CodecConfig::default()).unwrap(),
            message,
            "spb = {spb}"
        );

        for dly in [0.0, 0.25, 0.49] {
            // same waveform, sampled later within each bit
            let params = ReceiverParams::with_delay(fb, dly);
            assert_eq!(
                decode_waveform(&signal.time_axis, &signal.samples, &params),
                reference,
                "undelayed waveform, spb = {spb}, dly = {dly}"
            );

            // waveform delayed by dly*Tb through the channel
            let shift = (dly * spb as f64).round() as usize;
            let mut delayed = vec![signal.samples[0]; shift];
            delayed.extend_from_slice(&signal.samples[..signal.len() - shift]);
            assert_eq!(
                decode_waveform(&signal.time_axis, &delayed, &params),
                reference,
                "delayed waveform, spb = {spb}, dly = {dly}"
            );
        }
    }
}

#[test]
fn empty_text_is_empty_everywhere() {
    let signal = modulate_text("", 100.0, 44100.0).unwrap();
    assert!(signal.is_empty());
    assert!(signal.time_axis.is_empty());
    let rn = sample(&signal.time_axis, &signal.samples, &ReceiverParams::new(100.0))
        .unwrap();
    assert!(rn.is_empty());
    let bits = hard_decisions(&sign_slice(&rn.samples));
    assert_eq!(text_codec::decode(&bits, &CodecConfig::default()).unwrap(), "");
}

#[test]
fn hi_example() {
    let bits = text_codec::encode("Hi", &CodecConfig::default()).unwrap();
    assert_eq!(bits.len(), 16);
    assert_eq!(text_codec::decode(&bits, &CodecConfig::default()).unwrap(), "Hi");

    let signal = modulate_text("Hi", 100.0, 44100.0).unwrap();
    assert_eq!(signal.first_index, -221);
    assert_eq!(signal.time_axis[0], -221.0 / 44100.0);
}

#[test]
fn wav_loopback_recovers_text() {
    let path = std::env::temp_dir()
        .join(format!("ftpam-loopback-{}.wav", std::process::id()));
    let message = "jjjkk8789gikui8iuy987987898h..//??k";

    let sender = PamSender::new(SenderConfig::default()).unwrap();
    let receiver = PamReceiver::new_default();
    let report = loopback(message, &sender, &receiver, Some(&path)).unwrap();

    assert!(report.comparison.is_perfect_match);
    assert_eq!(report.reception.text, message);
    assert_eq!(report.reception.bits, report.transmission.bits);
    assert!((report.reception.sampled.sample_rate - 44100.0).abs() < 1e-3);
    let _ = std::fs::remove_file(&path);
}

#[test]
fn identity_loopback_recovers_text() {
    let message = random_message(40);
    let sender = PamSender::new_default();
    let receiver = PamReceiver::new_default();
    let report = loopback(&message, &sender, &receiver, None).unwrap();
    assert!(report.comparison.is_perfect_match);
}

#[test]
fn text_file_through_wav_and_back() {
    let dir = std::env::temp_dir();
    let input = dir.join(format!("ftpam-send-{}.txt", std::process::id()));
    let wav = dir.join(format!("ftpam-send-{}.wav", std::process::id()));
    TextProcessor::save_text_file(&input, "flat top\n").unwrap();

    // what `ftpam send --input` does
    let text = TextProcessor::read_text_file(&input).unwrap();
    let sent = PamSender::new_default().transmit_to_wav(&text, &wav).unwrap();
    let reception = PamReceiver::new_default().receive_wav(&wav).unwrap();

    assert_eq!(reception.bits, sent.bits);
    assert_eq!(reception.text, "flat top");
    let _ = std::fs::remove_file(&input);
    let _ = std::fs::remove_file(&wav);
}
