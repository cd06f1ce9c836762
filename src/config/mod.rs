//! Runtime configuration: TOML file plus command-line overrides.
//!
//! Precedence, lowest to highest: built-in defaults, the config file, CLI flags.

pub mod loader;

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::core::{Randomizer, RotationPolicy};

/// Log file used when nothing else is configured.
pub const DEFAULT_LOG_FILE: &str = "tetris-cli.log";

/// Which random piece source to play with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RandomizerKind {
    /// Every kind equally likely on every draw.
    #[default]
    Uniform,
    /// Shuffled bags of all seven kinds.
    Bag,
}

impl RandomizerKind {
    pub fn build(self, seed: u32) -> Randomizer {
        match self {
            RandomizerKind::Uniform => Randomizer::uniform(seed),
            RandomizerKind::Bag => Randomizer::bag(seed),
        }
    }
}

/// How blocked rotations are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum RotationKind {
    /// Rotate in place or not at all.
    #[default]
    NoKick,
    /// Try a short list of sideways and upward shifts.
    Kick,
}

impl From<RotationKind> for RotationPolicy {
    fn from(kind: RotationKind) -> Self {
        match kind {
            RotationKind::NoKick => RotationPolicy::NoKick,
            RotationKind::Kick => RotationPolicy::Kick,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fixed RNG seed; a time-based seed is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    pub randomizer: RandomizerKind,
    pub rotation: RotationKind,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            randomizer: RandomizerKind::default(),
            rotation: RotationKind::default(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    /// Overlay any flags given on the command line.
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(seed) = cli.seed {
            self.seed = Some(seed);
        }
        if let Some(randomizer) = cli.randomizer {
            self.randomizer = randomizer;
        }
        if let Some(rotation) = cli.rotation {
            self.rotation = rotation;
        }
        if let Some(log_file) = &cli.log_file {
            self.log_file = log_file.clone();
        }
    }

    /// Configured seed, or one derived from the clock.
    pub fn effective_seed(&self) -> u32 {
        self.seed.unwrap_or_else(time_seed)
    }

    pub fn rotation_policy(&self) -> RotationPolicy {
        self.rotation.into()
    }

    pub fn piece_source(&self, seed: u32) -> Randomizer {
        self.randomizer.build(seed)
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| (d.as_secs() as u32) ^ d.subsec_nanos())
        .unwrap_or(1)
}

/// Falling-block puzzle game for the terminal.
#[derive(Parser, Debug, Default, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file to read instead of the default location.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Seed for the piece randomizer.
    #[arg(short, long)]
    pub seed: Option<u32>,

    /// Piece randomizer.
    #[arg(long, value_enum)]
    pub randomizer: Option<RandomizerKind>,

    /// Rotation policy for blocked rotations.
    #[arg(long, value_enum)]
    pub rotation: Option<RotationKind>,

    /// Where log records are written.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Write the effective configuration to the config path and exit.
    #[arg(long)]
    pub save_config: bool,
}
