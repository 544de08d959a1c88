use std::num::ParseIntError;
use std::str::FromStr;

use thiserror::Error;

use crate::render::BYTES_PER_PIXEL;

pub const DEFAULT_WIDTH: usize = 320;
pub const DEFAULT_HEIGHT: usize = 240;

/// Largest board the host will allocate, in cells (4096x4096)
pub const MAX_CELLS: usize = 1 << 24;

/// Generations per second
pub const DEFAULT_TICK_RATE: u32 = 30;

pub const USAGE: &str = "\
usage: bounded-life [--width N] [--height N] [--live N] [--tick-rate N] [--seed N]

  --width N      board columns (default 320)
  --height N     board rows (default 240)
  --live N       random seed placements (default width * height / 10)
  --tick-rate N  generations per second (default 30)
  --seed N       seed the random placement, for reproducible runs";

/// Everything the host needs to set up a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeConfig {
    /// Board columns
    pub width: usize,

    /// Board rows
    pub height: usize,

    /// Number of random placements when seeding the board. Placements may land on the same cell
    /// twice, so this is an upper bound on the starting population.
    pub initial_live: usize,

    /// Generations per second
    pub tick_rate: u32,

    /// Seed for the placement RNG. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            initial_live: default_live(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            tick_rate: DEFAULT_TICK_RATE,
            seed: None,
        }
    }
}

/// A tenth of the board
fn default_live(width: usize, height: usize) -> usize {
    width.saturating_mul(height) / 10
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown flag '{flag}'")]
    UnknownFlag { flag: String },

    #[error("Flag '{flag}' expects a value")]
    MissingValue { flag: String },

    #[error("Invalid value '{value}' for '{flag}': {source}")]
    InvalidNumber {
        flag: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("'{flag}' must be positive")]
    ZeroDimension { flag: String },

    #[error("A {width}x{height} board is too large, at most {} cells are allowed", MAX_CELLS)]
    BoardTooLarge { width: usize, height: usize },

    #[error("Tick rate must be positive")]
    ZeroTickRate,
}

impl LifeConfig {
    /// Build a config from command line flags, program name excluded.
    ///
    /// Flags not given keep their defaults. When `--live` is absent, the seed count follows the
    /// (possibly overridden) board size.
    pub fn from_args<I, S>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        let mut live = None;

        let mut args = args.into_iter();

        while let Some(flag) = args.next() {
            let flag = flag.as_ref();

            let Some(value) = args.next() else {
                return Err(match flag {
                    "--width" | "--height" | "--live" | "--tick-rate" | "--seed" => {
                        ConfigError::MissingValue { flag: flag.into() }
                    }
                    _ => ConfigError::UnknownFlag { flag: flag.into() },
                });
            };
            let value = value.as_ref();

            match flag {
                "--width" => config.width = parse_num(flag, value)?,
                "--height" => config.height = parse_num(flag, value)?,
                "--live" => live = Some(parse_num(flag, value)?),
                "--tick-rate" => config.tick_rate = parse_num(flag, value)?,
                "--seed" => config.seed = Some(parse_num(flag, value)?),
                _ => return Err(ConfigError::UnknownFlag { flag: flag.into() }),
            }
        }

        config.initial_live = live.unwrap_or_else(|| default_live(config.width, config.height));
        config.validate()?;

        Ok(config)
    }

    /// Check the values the engine treats as preconditions
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroDimension {
                flag: "--width".into(),
            });
        }

        if self.height == 0 {
            return Err(ConfigError::ZeroDimension {
                flag: "--height".into(),
            });
        }

        // the RGBA frame is the largest allocation
        let frame_len = self
            .width
            .checked_mul(self.height)
            .filter(|&cells| cells <= MAX_CELLS)
            .and_then(|cells| cells.checked_mul(BYTES_PER_PIXEL));

        if frame_len.is_none() {
            return Err(ConfigError::BoardTooLarge {
                width: self.width,
                height: self.height,
            });
        }

        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }

        Ok(())
    }
}

fn parse_num<T>(flag: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr<Err = ParseIntError>,
{
    value.parse().map_err(|source| ConfigError::InvalidNumber {
        flag: flag.into(),
        value: value.into(),
        source,
    })
}
