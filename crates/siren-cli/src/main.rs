//! Siren CLI - Command-line interface for two-tone siren synthesis
//!
//! This binary provides commands for listing presets, inspecting their
//! parameters, and synthesizing siren audio to WAV files or the speakers.

use clap::{Args, Parser, Subcommand};
use std::process::ExitCode;

use siren_cli::commands::{self, SynthOptions};

/// Siren - Two-Tone Emergency Siren Synthesizer
#[derive(Parser)]
#[command(name = "siren")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Synthesis flags shared by `info`, `write` and `play`.
#[derive(Args)]
struct SynthArgs {
    /// Duration in seconds
    #[arg(long, default_value_t = 10.0)]
    duration: f64,

    /// Enable night mode (caps the perceived level at 90 dB)
    #[arg(long)]
    night: bool,

    /// Traffic density controlling the burst pattern
    #[arg(long, default_value = "medium", value_parser = ["light", "medium", "heavy"])]
    traffic: String,

    /// Distance from the listener in meters
    #[arg(long, default_value_t = 10.0)]
    distance: f64,

    /// RNG seed for reproducible output
    #[arg(long)]
    seed: Option<u32>,

    /// JSON file of custom presets to register before dispatch
    #[arg(long)]
    presets: Option<String>,
}

impl SynthArgs {
    fn options(&self) -> SynthOptions {
        SynthOptions {
            duration: self.duration,
            night: self.night,
            traffic: self.traffic.clone(),
            distance: self.distance,
            seed: self.seed,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List available siren presets
    List {
        /// JSON file of custom presets to include
        #[arg(long)]
        presets: Option<String>,
    },

    /// Show a preset's parameters and the estimated dB at the listener
    Info {
        /// Preset name (e.g., police, firefighter, samu, hi_lo)
        name: String,

        #[command(flatten)]
        synth: SynthArgs,
    },

    /// Synthesize a siren and write it to a WAV file
    Write {
        /// Preset name (e.g., police, firefighter, samu, hi_lo)
        name: String,

        /// Output filename (default: siren_<timestamp>.wav)
        #[arg(long)]
        outfile: Option<String>,

        #[command(flatten)]
        synth: SynthArgs,
    },

    /// Synthesize a siren and play it through the system player
    Play {
        /// Preset name (e.g., police, firefighter, samu, hi_lo)
        name: String,

        #[command(flatten)]
        synth: SynthArgs,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::List { presets } => commands::list::run(presets.as_deref()),
        Commands::Info { name, synth } => {
            commands::info::run(name, &synth.options(), synth.presets.as_deref())
        }
        Commands::Write {
            name,
            outfile,
            synth,
        } => commands::write::run(
            name,
            &synth.options(),
            outfile.as_deref(),
            synth.presets.as_deref(),
        ),
        Commands::Play { name, synth } => {
            commands::play::run(name, &synth.options(), synth.presets.as_deref())
        }
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
