//! Command-line front end for the diphone synthesiser.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use diphone_tts::{
    AudioBuffer, CmudictLexicon, DiphoneLibrary, PhoneSequencer, SAMPLE_RATE, SynthError,
    SynthesisConfig, TextNormalizer, UnitConcatenator, to_diphones,
};

/// A basic text-to-speech app that synthesises an input phrase using
/// diphone unit selection.
#[derive(Debug, Parser)]
#[command(name = "diphone-tts", version, about)]
struct Cli {
    /// The phrase to be synthesised
    phrase: String,

    /// Folder containing diphone wavs
    #[arg(long, default_value = "./diphones")]
    diphones: PathBuf,

    /// Pronunciation dictionary in CMUdict format
    #[arg(long, default_value = "./cmudict.dict")]
    lexicon: PathBuf,

    /// Play the output audio
    #[arg(short, long)]
    play: bool,

    /// Save the output audio to a file
    #[arg(short, long)]
    outfile: Option<PathBuf>,

    /// Spell the phrase instead of pronouncing it
    #[arg(short, long)]
    spell: bool,

    /// Speak backwards
    #[arg(short, long)]
    reverse: bool,

    /// Enable slightly smoother concatenation by cross-fading between
    /// diphone units
    #[arg(short, long)]
    crossfade: bool,

    /// An int between 0 and 100 representing the desired volume
    #[arg(short, long)]
    volume: Option<i32>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run(&Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), SynthError> {
    let config = SynthesisConfig {
        spell: cli.spell,
        crossfade: cli.crossfade,
        volume: cli.volume.map(clamp_volume),
    };
    if cli.reverse {
        // TODO: decide whether --reverse should flip word or diphone
        // order; until then it is accepted but has no effect.
        warn!("--reverse is not implemented; the phrase is spoken forwards");
    }

    let lexicon = CmudictLexicon::load(&cli.lexicon)?;
    let library = DiphoneLibrary::scan(&cli.diphones)?;

    let tokens = TextNormalizer::new(&config).tokenize(&cli.phrase);
    let phones = PhoneSequencer::new(&lexicon).sequence(&tokens);
    let units = to_diphones(&phones);
    let mut signal = UnitConcatenator::new(&library, &config).assemble(&units)?;

    if let Some(level) = config.volume {
        signal.rescale(level);
    }
    info!(samples = signal.len(), "synthesis finished");

    if cli.play {
        play(&signal)?;
    }
    if let Some(path) = &cli.outfile {
        signal.write_wav(path)?;
    }
    Ok(())
}

fn clamp_volume(requested: i32) -> u8 {
    if !(0..=100).contains(&requested) {
        warn!("the volume needs to be between 0 and 100, clamping {requested}");
    }
    requested.clamp(0, 100) as u8
}

fn play(signal: &AudioBuffer) -> Result<(), SynthError> {
    let stream = rodio::OutputStreamBuilder::open_default_stream()
        .map_err(|e| SynthError::Playback(e.to_string()))?;
    let sink = rodio::Sink::connect_new(stream.mixer());
    let samples: Vec<f32> = signal
        .samples()
        .iter()
        .map(|&s| f32::from(s) / 32768.0)
        .collect();
    sink.append(rodio::buffer::SamplesBuffer::new(1, SAMPLE_RATE, samples));
    sink.sleep_until_end();
    Ok(())
}
