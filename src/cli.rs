//! Argument parsing for the headless `life-board` driver.

use thiserror::Error;

use crate::board::{BoardConfig, BorderPolicy, Topology};
use crate::session::SessionConfig;

pub const USAGE: &str = "usage: life-board [--size N] [--generations N] \
[--topology bounded|toroidal] [--full-border] [--history N] [--print]";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    #[error("{0} requires a value")]
    MissingValue(&'static str),
    #[error("{flag} expects an integer, got {value:?}")]
    InvalidNumber { flag: &'static str, value: String },
    #[error("unknown topology {0:?} (expected bounded or toroidal)")]
    UnknownTopology(String),
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

#[derive(Clone, Debug)]
pub struct CliArgs {
    pub session: SessionConfig,
    pub generations: u64,
    /// Print the board as text after the run.
    pub print: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            session: SessionConfig::default().size(64),
            generations: 100,
            print: false,
        }
    }
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I>(args: I) -> Result<CliArgs, CliError>
where
    I: IntoIterator<Item = String>,
{
    let mut out = CliArgs::default();
    let mut border = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--size" => {
                let size = parse_number(&mut args, "--size")?;
                out.session = out.session.size(size);
            }
            "--generations" => {
                let n: i64 = parse_number(&mut args, "--generations")?;
                out.generations = n.max(0) as u64;
            }
            "--topology" => {
                let value = args.next().ok_or(CliError::MissingValue("--topology"))?;
                let topology =
                    Topology::from_name(&value).ok_or(CliError::UnknownTopology(value))?;
                out.session = out.session.topology(topology);
            }
            "--history" => {
                let n: i64 = parse_number(&mut args, "--history")?;
                out.session = out.session.history_capacity(n.max(0) as usize);
            }
            "--full-border" => border = Some(BorderPolicy::Full),
            "--print" => out.print = true,
            other => return Err(CliError::UnknownArgument(other.to_string())),
        }
    }

    if let Some(policy) = border {
        out.session = out
            .session
            .board(BoardConfig::default().border_policy(policy));
    }
    Ok(out)
}

fn parse_number<I>(args: &mut I, flag: &'static str) -> Result<i64, CliError>
where
    I: Iterator<Item = String>,
{
    let value = args.next().ok_or(CliError::MissingValue(flag))?;
    value
        .trim()
        .parse()
        .map_err(|_| CliError::InvalidNumber { flag, value })
}

#[cfg(test)]
mod tests {
    use super::{CliError, parse_args};
    use crate::board::{BorderPolicy, Topology};

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn defaults_without_flags() {
        let parsed = parse_args(Vec::new()).expect("empty args parse");
        assert_eq!(parsed.session.size, 64);
        assert_eq!(parsed.session.topology, Topology::Toroidal);
        assert_eq!(parsed.generations, 100);
        assert!(!parsed.print);
        assert_eq!(parsed.session.board.border, None);
    }

    #[test]
    fn all_flags() {
        let parsed = parse_args(args(&[
            "--size",
            "32",
            "--generations",
            "7",
            "--topology",
            "bounded",
            "--history",
            "4",
            "--full-border",
            "--print",
        ]))
        .expect("valid args");
        assert_eq!(parsed.session.size, 32);
        assert_eq!(parsed.generations, 7);
        assert_eq!(parsed.session.topology, Topology::Bounded);
        assert_eq!(parsed.session.history_capacity, 4);
        assert_eq!(parsed.session.board.border, Some(BorderPolicy::Full));
        assert!(parsed.print);
    }

    #[test]
    fn negative_size_is_passed_through() {
        // Board construction is where sizes are validated.
        let parsed = parse_args(args(&["--size", "-3"])).expect("parses");
        assert_eq!(parsed.session.size, -3);
    }

    #[test]
    fn errors() {
        assert_eq!(
            parse_args(args(&["--size"])).unwrap_err(),
            CliError::MissingValue("--size")
        );
        assert_eq!(
            parse_args(args(&["--generations", "lots"])).unwrap_err(),
            CliError::InvalidNumber {
                flag: "--generations",
                value: "lots".to_string()
            }
        );
        assert_eq!(
            parse_args(args(&["--topology", "klein"])).unwrap_err(),
            CliError::UnknownTopology("klein".to_string())
        );
        assert_eq!(
            parse_args(args(&["--fast"])).unwrap_err(),
            CliError::UnknownArgument("--fast".to_string())
        );
    }
}
