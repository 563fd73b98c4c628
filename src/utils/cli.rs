//! Command-line argument parsing and help for mls.
//!
//! `mls [OPTIONS] [TARGET...]` lists targets of the tree rooted at `--root` (the current
//! directory by default). Informational flags print and exit.

use crate::config::Config;
use crate::utils::parse_width;

use std::path::PathBuf;

/// What the binary should do after parsing its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    List(ListArgs),
    Init,
    Help,
    ConfigHelp,
    Version,
}

/// Arguments of a listing run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListArgs {
    pub root: Option<PathBuf>,
    pub width: Option<usize>,
    pub single_column: bool,
    pub targets: Vec<String>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CliError {
    #[error("unknown option: {0}")]
    UnknownOption(String),

    #[error("option {0} requires a value")]
    MissingValue(String),

    #[error("invalid width: {0}")]
    InvalidWidth(String),
}

/// Parses the process arguments.
pub fn handle_args() -> Result<CliAction, CliError> {
    parse_args(std::env::args().skip(1))
}

/// Parses arguments, program name excluded.
pub fn parse_args<I, S>(args: I) -> Result<CliAction, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut list = ListArgs::default();
    let mut args = args.into_iter().map(Into::into);
    let mut options_done = false;

    while let Some(arg) = args.next() {
        if options_done || !arg.starts_with('-') || arg == "-" {
            list.targets.push(arg);
            continue;
        }

        let (flag, inline_value) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => {
                (flag.to_string(), Some(value.to_string()))
            }
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--" => options_done = true,
            "-h" | "--help" => return Ok(CliAction::Help),
            "-v" | "--version" => return Ok(CliAction::Version),
            "--config-help" => return Ok(CliAction::ConfigHelp),
            "--init" => return Ok(CliAction::Init),
            "-1" => list.single_column = true,
            "-C" | "--root" => {
                let value = inline_value
                    .or_else(|| args.next())
                    .ok_or_else(|| CliError::MissingValue(flag.clone()))?;
                list.root = Some(PathBuf::from(value));
            }
            "-w" | "--width" => {
                let value = inline_value
                    .or_else(|| args.next())
                    .ok_or_else(|| CliError::MissingValue(flag.clone()))?;
                let width = parse_width(&value).ok_or(CliError::InvalidWidth(value))?;
                list.width = Some(width);
            }
            _ => return Err(CliError::UnknownOption(arg)),
        }
    }

    Ok(CliAction::List(list))
}

pub fn print_version() {
    println!("mls {}", env!("CARGO_PKG_VERSION"));
}

pub fn print_help() {
    println!(
        r#"mls - list the contents of a metadata tree in columns

USAGE:
  mls [OPTIONS] [TARGET...]

TARGET:
  Tree paths to list (defaults to "."). Directories show their children,
  files show their own name.

OPTIONS:
  -C, --root <DIR>        Directory acting as the root of the tree [default: .]
  -w, --width <N>         Lay out for N columns instead of the terminal width
  -1                      One entry per line
      --init              Generate the default configuration
      --config-help       Display all the configuration options
  -h, --help              Print help information
  -v, --version           Display the installed version of mls

ENVIRONMENT:
  META_LS_CONFIG          Override the default config path
  RUST_LOG                Log filter for diagnostics on stderr (e.g. "meta_ls=trace")
"#
    );
}

pub fn print_config_help() {
    println!(
        r#"
mls - Configuration Guide (meta-ls.toml)

Config file: {}

[general]
  show_hidden                List children starting with '.' [default: true]
  sort                       Sort children by name [default: true]
  case_insensitive           Ignore case when sorting [default: true]

[layout]
  min_entry_width            Narrowest entry assumed when bounding the column count
                             (columns <= width / min_entry_width) [default: 4, 1..=64]
  columns                    Use columns on a terminal; false prints one per line [default: true]
"#,
        Config::default_path().display()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_args(args: &[&str]) -> ListArgs {
        match parse_args(args.iter().copied()) {
            Ok(CliAction::List(list)) => list,
            other => panic!("expected a listing, got {:?}", other),
        }
    }

    #[test]
    fn no_args_lists_current_directory() {
        assert_eq!(list_args(&[]), ListArgs::default());
    }

    #[test]
    fn targets_keep_their_order() {
        let list = list_args(&["brokers", "topics", "brokers"]);
        assert_eq!(list.targets, vec!["brokers", "topics", "brokers"]);
    }

    #[test]
    fn options_and_values() {
        let list = list_args(&["-C", "/snap", "--width=100", "-1", "topics"]);
        assert_eq!(list.root, Some(PathBuf::from("/snap")));
        assert_eq!(list.width, Some(100));
        assert!(list.single_column);
        assert_eq!(list.targets, vec!["topics"]);
    }

    #[test]
    fn double_dash_ends_options() {
        let list = list_args(&["--", "-odd-name"]);
        assert_eq!(list.targets, vec!["-odd-name"]);
    }

    #[test]
    fn informational_flags() {
        assert_eq!(parse_args(["--help"]), Ok(CliAction::Help));
        assert_eq!(parse_args(["-v"]), Ok(CliAction::Version));
        assert_eq!(parse_args(["--init"]), Ok(CliAction::Init));
        assert_eq!(parse_args(["--config-help"]), Ok(CliAction::ConfigHelp));
    }

    #[test]
    fn errors() {
        assert_eq!(
            parse_args(["--bogus"]),
            Err(CliError::UnknownOption("--bogus".into()))
        );
        assert_eq!(
            parse_args(["--width"]),
            Err(CliError::MissingValue("--width".into()))
        );
        assert_eq!(
            parse_args(["-w", "abc"]),
            Err(CliError::InvalidWidth("abc".into()))
        );
    }
}
