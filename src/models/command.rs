//! Shell command parsing
//!
//! Defines the commands accepted by the line-oriented cache shell.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

/// A single shell command, parsed from one input line.
///
/// Command words are case-insensitive; keys and values are taken verbatim.
/// For `SET`/`SETNX` the value is the rest of the line after the key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Get { key: String },
    Set { key: String, value: String },
    SetIfAbsent { key: String, value: String },
    Delete { key: String },
    Clear,
    Capacity(u64),
    Stats,
    Keys,
    Save(Option<PathBuf>),
    Load(Option<PathBuf>),
    Quit,
}

/// Reasons a line is not a valid command.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("{command} requires a {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("{0} takes no extra arguments")]
    UnexpectedArgument(&'static str),

    #[error("Invalid capacity: {0}")]
    InvalidCapacity(String),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = split_word(line);
        if word.is_empty() {
            return Err(CommandError::Empty);
        }

        match word.to_ascii_uppercase().as_str() {
            "GET" => Ok(Command::Get {
                key: single_arg("GET", rest)?,
            }),
            "SET" => {
                let (key, value) = key_value("SET", rest)?;
                Ok(Command::Set { key, value })
            }
            "SETNX" => {
                let (key, value) = key_value("SETNX", rest)?;
                Ok(Command::SetIfAbsent { key, value })
            }
            "DEL" => Ok(Command::Delete {
                key: single_arg("DEL", rest)?,
            }),
            "CAPACITY" => {
                let raw = single_arg("CAPACITY", rest)?;
                raw.parse()
                    .map(Command::Capacity)
                    .map_err(|_| CommandError::InvalidCapacity(raw))
            }
            "SAVE" => Ok(Command::Save(optional_path(rest))),
            "LOAD" => Ok(Command::Load(optional_path(rest))),
            "CLEAR" => no_args("CLEAR", rest, Command::Clear),
            "STATS" => no_args("STATS", rest, Command::Stats),
            "KEYS" => no_args("KEYS", rest, Command::Keys),
            "QUIT" | "EXIT" => no_args("QUIT", rest, Command::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}

/// Splits off the first whitespace-delimited word.
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(idx) => (&s[..idx], s[idx..].trim_start()),
        None => (s, ""),
    }
}

fn single_arg(command: &'static str, rest: &str) -> Result<String, CommandError> {
    let (key, extra) = split_word(rest);
    if key.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            argument: "key",
        });
    }
    if !extra.is_empty() {
        return Err(CommandError::UnexpectedArgument(command));
    }
    Ok(key.to_string())
}

fn key_value(command: &'static str, rest: &str) -> Result<(String, String), CommandError> {
    let (key, value) = split_word(rest);
    if key.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            argument: "key",
        });
    }
    if value.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            argument: "value",
        });
    }
    Ok((key.to_string(), value.to_string()))
}

fn optional_path(rest: &str) -> Option<PathBuf> {
    let rest = rest.trim();
    (!rest.is_empty()).then(|| PathBuf::from(rest))
}

fn no_args(name: &'static str, rest: &str, command: Command) -> Result<Command, CommandError> {
    if rest.trim().is_empty() {
        Ok(command)
    } else {
        Err(CommandError::UnexpectedArgument(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_get() {
        assert_eq!(
            "GET user:1".parse(),
            Ok(Command::Get {
                key: "user:1".to_string()
            })
        );
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("stats".parse(), Ok(Command::Stats));
        assert_eq!("  Keys  ".parse(), Ok(Command::Keys));
    }

    #[test]
    fn test_parse_set_keeps_rest_of_line() {
        assert_eq!(
            "SET greeting hello   world".parse(),
            Ok(Command::Set {
                key: "greeting".to_string(),
                value: "hello   world".to_string()
            })
        );
    }

    #[test]
    fn test_parse_setnx() {
        assert_eq!(
            "setnx k v".parse(),
            Ok(Command::SetIfAbsent {
                key: "k".to_string(),
                value: "v".to_string()
            })
        );
    }

    #[test]
    fn test_parse_set_missing_value() {
        assert_eq!(
            "SET onlykey".parse::<Command>(),
            Err(CommandError::MissingArgument {
                command: "SET",
                argument: "value"
            })
        );
    }

    #[test]
    fn test_parse_del_extra_argument() {
        assert_eq!(
            "DEL a b".parse::<Command>(),
            Err(CommandError::UnexpectedArgument("DEL"))
        );
    }

    #[test]
    fn test_parse_capacity() {
        assert_eq!("CAPACITY 4096".parse(), Ok(Command::Capacity(4096)));
        assert_eq!(
            "CAPACITY lots".parse::<Command>(),
            Err(CommandError::InvalidCapacity("lots".to_string()))
        );
    }

    #[test]
    fn test_parse_save_and_load_paths() {
        assert_eq!("SAVE".parse(), Ok(Command::Save(None)));
        assert_eq!(
            "LOAD /tmp/snap.bin".parse(),
            Ok(Command::Load(Some(PathBuf::from("/tmp/snap.bin"))))
        );
    }

    #[test]
    fn test_parse_empty_and_unknown() {
        assert_eq!("   ".parse::<Command>(), Err(CommandError::Empty));
        assert_eq!(
            "FLUSHALL".parse::<Command>(),
            Err(CommandError::Unknown("FLUSHALL".to_string()))
        );
    }
}
