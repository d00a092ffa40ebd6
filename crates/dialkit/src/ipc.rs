use crate::settings::SettingsChange;
use crate::style::{DialStyle, HandPalette, Theme};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const SOCKET_PATH: &str = "/tmp/clockface.sock";

/// One line of the widget's control protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    Show,
    Hide,
    Reload,
    Change(SettingsChange),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RequestError {
    #[error("Empty request")]
    Empty,
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Command '{0}' expects a value")]
    MissingValue(&'static str),
    #[error("Command '{command}' takes no value, got '{value}'")]
    UnexpectedValue { command: &'static str, value: String },
    #[error("Invalid value '{value}' for '{command}'")]
    InvalidValue { command: &'static str, value: String },
}

fn parse_value<T: FromStr>(command: &'static str, value: Option<&str>) -> Result<T, RequestError> {
    let value = value.ok_or(RequestError::MissingValue(command))?;
    value.parse().map_err(|_| RequestError::InvalidValue {
        command,
        value: value.to_string(),
    })
}

fn no_value(
    command: &'static str,
    value: Option<&str>,
    request: Request,
) -> Result<Request, RequestError> {
    match value {
        None => Ok(request),
        Some(v) => Err(RequestError::UnexpectedValue {
            command,
            value: v.to_string(),
        }),
    }
}

impl FromStr for Request {
    type Err = RequestError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = words.next().ok_or(RequestError::Empty)?;
        let value = words.next();

        match command.to_ascii_lowercase().as_str() {
            "show" => no_value("show", value, Request::Show),
            "hide" => no_value("hide", value, Request::Hide),
            "reload" => no_value("reload", value, Request::Reload),
            "settings" => no_value(
                "settings",
                value,
                Request::Change(SettingsChange::ToggleSettings),
            ),
            "theme" => Ok(Request::Change(SettingsChange::Theme(
                parse_value::<Theme>("theme", value)?,
            ))),
            "style" => Ok(Request::Change(SettingsChange::DialStyle(
                parse_value::<DialStyle>("style", value)?,
            ))),
            "palette" => Ok(Request::Change(SettingsChange::HandPalette(
                parse_value::<HandPalette>("palette", value)?,
            ))),
            other => Err(RequestError::UnknownCommand(other.to_string())),
        }
    }
}

impl fmt::Display for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Request::Show => write!(f, "show"),
            Request::Hide => write!(f, "hide"),
            Request::Reload => write!(f, "reload"),
            Request::Change(SettingsChange::ToggleSettings) => write!(f, "settings"),
            Request::Change(SettingsChange::Theme(theme)) => write!(f, "theme {theme}"),
            Request::Change(SettingsChange::DialStyle(style)) => write!(f, "style {style}"),
            Request::Change(SettingsChange::HandPalette(palette)) => {
                write!(f, "palette {palette}")
            }
        }
    }
}
