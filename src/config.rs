//! Command-line configuration.

use crate::{Error, Result};
use pico_args::Arguments;
use std::fmt::{self, Display, Formatter};
use std::num::NonZeroUsize;
use std::str::FromStr;

pub const USAGE: &str = "\
USAGE:
  ccsgen scheduler --N <N> [--report text|json]
  ccsgen ring --N <N>
  ccsgen states --N <N>

`-n` is an alias of `--N`, and N may also be passed as a free argument.
Set `RUST_LOG=debug` (or `trace`) to log the enumeration.";

/// The number of processes in the ring. Always at least one, so `i mod N` is defined.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct RingSize(NonZeroUsize);

impl RingSize {
    pub fn new(n: usize) -> Result<Self> {
        NonZeroUsize::new(n)
            .map(RingSize)
            .ok_or(Error::RingSizeTooSmall(0))
    }

    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl FromStr for RingSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let n: i64 = s
            .trim()
            .parse()
            .map_err(|_| Error::InvalidRingSize(s.to_string()))?;
        if n < 1 {
            return Err(Error::RingSizeTooSmall(n));
        }
        let n = usize::try_from(n).map_err(|_| Error::InvalidRingSize(s.to_string()))?;
        RingSize::new(n)
    }
}

impl Display for RingSize {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How emission statistics are written to stderr.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ReportFormat {
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(Error::InvalidReportFormat(s.to_string())),
        }
    }
}

/// A parsed invocation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    /// Print the scheduler specification.
    Scheduler {
        ring_size: RingSize,
        report: Option<ReportFormat>,
    },
    /// Print the token ring specification.
    Ring { ring_size: RingSize },
    /// Print the number of reachable scheduler states.
    States { ring_size: RingSize },
    Help,
}

impl Command {
    /// Parses a subcommand and its options, rejecting anything left over.
    pub fn from_args(mut args: Arguments) -> Result<Command> {
        if args.contains(["-h", "--help"]) {
            return Ok(Command::Help);
        }
        let command = match args.subcommand()?.as_deref() {
            Some("scheduler") => {
                let report = args
                    .opt_value_from_str::<_, String>("--report")?
                    .map(|s| s.parse::<ReportFormat>())
                    .transpose()?;
                Command::Scheduler {
                    ring_size: ring_size(&mut args)?,
                    report,
                }
            }
            Some("ring") => Command::Ring {
                ring_size: ring_size(&mut args)?,
            },
            Some("states") => Command::States {
                ring_size: ring_size(&mut args)?,
            },
            Some(other) => return Err(Error::UnknownCommand(other.to_string())),
            None => return Err(Error::MissingCommand),
        };
        let remaining = args.finish();
        if !remaining.is_empty() {
            return Err(Error::UnexpectedArguments(remaining));
        }
        Ok(command)
    }
}

fn ring_size(args: &mut Arguments) -> Result<RingSize> {
    let raw = match args.opt_value_from_str::<_, String>(["-n", "--N"])? {
        Some(raw) => raw,
        None => args
            .opt_free_from_str::<String>()?
            .ok_or(Error::MissingRingSize)?,
    };
    raw.parse()
}
