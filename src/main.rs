use clap::{Args, Parser, Subcommand};
use ftpam::pam::{PamConfig, PamResult, ReceiverParams};
use ftpam::transmission::{
    PamReceiver, PamSender, ReceiverConfig, SenderConfig, TextProcessor,
    loopback,
};
use ftpam::ui::print_banner;
use ftpam::utils::consts::{
    DEFAULT_BIT_RATE, DEFAULT_SAMPLE_RATE, DEFAULT_WAV_PATH,
};
use ftpam::utils::dump::{PlotDump, plot_title};
use ftpam::utils::logging::init_logging;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(author, version, about = "Flat-top PAM text modem", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Copy)]
struct RateArgs {
    /// Bit rate Fb [bits/s]
    #[arg(short = 'b', long, default_value_t = DEFAULT_BIT_RATE)]
    bit_rate: f64,
    /// Sample rate Fs [Hz]
    #[arg(short = 's', long, default_value_t = DEFAULT_SAMPLE_RATE)]
    sample_rate: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Modulate text into a WAV file
    Send {
        #[arg(short, long, conflicts_with = "input")]
        text: Option<String>,
        /// Read the message from a text file
        #[arg(short, long)]
        input: Option<PathBuf>,
        #[arg(short, long, default_value = DEFAULT_WAV_PATH)]
        output: PathBuf,
        #[command(flatten)]
        rates: RateArgs,
    },
    /// Recover text from a WAV file
    Recv {
        #[arg(short, long, default_value = DEFAULT_WAV_PATH)]
        input: PathBuf,
        #[arg(short = 'b', long, default_value_t = DEFAULT_BIT_RATE)]
        bit_rate: f64,
        /// Sampling delay as a fraction of Tb, in [0, 1)
        #[arg(short, long, default_value_t = 0.0)]
        delay: f64,
        /// Save the recovered text here
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Send and receive in one go, optionally through a WAV file
    Loopback {
        #[arg(short, long)]
        text: String,
        #[arg(short, long)]
        wav: Option<PathBuf>,
        #[arg(short, long, default_value_t = 0.0)]
        delay: f64,
        #[command(flatten)]
        rates: RateArgs,
    },
    /// Dump step-plot data of the waveform as JSON
    Plot {
        #[arg(short, long)]
        text: String,
        #[arg(short, long, default_value = "plot.json")]
        output: PathBuf,
        #[command(flatten)]
        rates: RateArgs,
    },
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn sender_for(rates: RateArgs) -> PamResult<PamSender> {
    let pam = PamConfig::new(rates.bit_rate, rates.sample_rate)?;
    print_banner(&pam);
    PamSender::new(SenderConfig {
        pam,
        ..SenderConfig::default()
    })
}

fn receiver_for(bit_rate: f64, delay: f64) -> PamResult<PamReceiver> {
    PamReceiver::new(ReceiverConfig {
        params: ReceiverParams::from_slice(&[bit_rate, delay])?,
        ..ReceiverConfig::default()
    })
}

fn run(command: Commands) -> PamResult<()> {
    match command {
        Commands::Send {
            text,
            input,
            output,
            rates,
        } => {
            let sender = sender_for(rates)?;
            let message = match (text, input) {
                (Some(text), _) => text,
                (None, Some(path)) => TextProcessor::read_text_file(&path)?,
                (None, None) => {
                    return Err(ftpam::pam::PamError::invalid(
                        "either --text or --input is required",
                    ));
                }
            };
            sender.transmit_to_wav(&message, &output)?;
        }
        Commands::Recv {
            input,
            bit_rate,
            delay,
            output,
        } => {
            let receiver = receiver_for(bit_rate, delay)?;
            let reception = receiver.receive_wav(&input)?;
            println!("{}", reception.text);
            if let Some(path) = output {
                TextProcessor::save_text_file(&path, &reception.text)?;
            }
        }
        Commands::Loopback {
            text,
            wav,
            delay,
            rates,
        } => {
            let sender = sender_for(rates)?;
            let receiver = receiver_for(rates.bit_rate, delay)?;
            let report = loopback(&text, &sender, &receiver, wav.as_deref())?;
            println!("{}", report.reception.text);
        }
        Commands::Plot {
            text,
            output,
            rates,
        } => {
            let sender = sender_for(rates)?;
            let tx = sender.transmit_text(&text)?;
            let title = plot_title(&text, rates.bit_rate, rates.sample_rate);
            PlotDump::from_signal(&tx.signal, &tx.bits, &title)
                .write_json(&output)?;
            tracing::info!("Plot data written to: {}", output.display());
        }
    }
    Ok(())
}
