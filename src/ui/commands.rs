/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of e-range.
 *
 * e-range is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * e-range is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with e-range. If not, see <https://www.gnu.org/licenses/>.
 */


use crate::ui::{CalculateMessage, Message, Route, StationsMessage};

pub const HELP_TEXT: &str = "\
Commands:
  weight <kg>          set your weight
  select <n>           choose the n-th battery capacity
  capacity <Wh>        enter a battery capacity
  flat <on|off>        flat tour profile
  fetch                fetch capacities from the web
  calc                 calculate the range
  location <place>     set your location
  seek                 search charging stations near your location
  home | info | map    go to a screen
  back                 go back
  show                 show the current screen
  help                 show this help
  quit                 exit";

#[derive(Debug, Clone)]
pub enum Command {
    Dispatch(Message),
    Show,
    Help,
    Quit
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error("Unknown command `{0}`. Type `help` for a list of commands")]
    Unknown(String),
    #[error("`{0}` needs a value")]
    MissingArgument(&'static str),
    #[error("Invalid value `{1}` for `{0}`")]
    InvalidArgument(&'static str, String),
}

/// Turns a line of interactive input into a command
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (name, argument) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, "")
    };
    let command = match name.to_lowercase().as_str() {
        "" | "show" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        "home" => Command::Dispatch(Message::Navigate(Route::Home)),
        "info" => Command::Dispatch(Message::Navigate(Route::Info)),
        "map" => Command::Dispatch(Message::Navigate(Route::Map)),
        "back" => Command::Dispatch(Message::Back),
        "fetch" => calculate(CalculateMessage::FetchCapacitiesPressed),
        "calc" | "calculate" => calculate(CalculateMessage::CalculatePressed),
        "seek" => Command::Dispatch(Message::Stations(StationsMessage::SeekPressed)),
        "weight" => {
            calculate(CalculateMessage::WeightChanged(required("weight", argument)?.to_string()))
        }
        "location" => {
            let location = required("location", argument)?;
            Command::Dispatch(Message::Stations(StationsMessage::LocationChanged(location.to_string())))
        }
        "select" => {
            let value = required("select", argument)?;
            match value.parse::<usize>() {
                Ok(n) if n > 0 => calculate(CalculateMessage::CapacitySelected(n - 1)),
                _ => return Err(CommandError::InvalidArgument("select", value.to_string()))
            }
        }
        "capacity" => {
            let value = required("capacity", argument)?;
            match utils::units::strip_watt_hour_suffix(value).parse::<u32>() {
                Ok(watt_hours) => calculate(CalculateMessage::CapacityEntered(watt_hours)),
                Err(_) => return Err(CommandError::InvalidArgument("capacity", value.to_string()))
            }
        }
        "flat" => {
            match argument.to_lowercase().as_str() {
                "" | "on" | "yes" | "true" => calculate(CalculateMessage::FlatTourToggled(true)),
                "off" | "no" | "false" => calculate(CalculateMessage::FlatTourToggled(false)),
                other => return Err(CommandError::InvalidArgument("flat", other.to_string()))
            }
        }
        other => return Err(CommandError::Unknown(other.to_string()))
    };
    Ok(command)
}

fn calculate(message: CalculateMessage) -> Command {
    Command::Dispatch(Message::Calculate(message))
}

fn required<'a>(name: &'static str, argument: &'a str) -> Result<&'a str, CommandError> {
    match argument.is_empty() {
        true => Err(CommandError::MissingArgument(name)),
        false => Ok(argument)
    }
}

#[cfg(test)]
mod tests {
    use crate::ui::commands::{parse_command, required, Command, CommandError};
    use crate::ui::{CalculateMessage, Message, Route, StationsMessage};

    fn dispatched(line: &str) -> Message {
        match parse_command(line) {
            Ok(Command::Dispatch(message)) => message,
            other => panic!("`{}` gave {:?}", line, other)
        }
    }

    #[test]
    fn form_commands() {
        assert!(matches!(dispatched("weight 72,5"),
                         Message::Calculate(CalculateMessage::WeightChanged(w)) if w == "72,5"));
        assert!(matches!(dispatched("select 2"),
                         Message::Calculate(CalculateMessage::CapacitySelected(1))));
        assert!(matches!(dispatched("capacity 625 Wh"),
                         Message::Calculate(CalculateMessage::CapacityEntered(625))));
        assert!(matches!(dispatched("flat off"),
                         Message::Calculate(CalculateMessage::FlatTourToggled(false))));
        assert!(matches!(dispatched("FLAT"),
                         Message::Calculate(CalculateMessage::FlatTourToggled(true))));
        assert!(matches!(dispatched("calc"),
                         Message::Calculate(CalculateMessage::CalculatePressed)));
    }

    #[test]
    fn navigation_commands() {
        assert!(matches!(dispatched("map"), Message::Navigate(Route::Map)));
        assert!(matches!(dispatched(" info "), Message::Navigate(Route::Info)));
        assert!(matches!(dispatched("back"), Message::Back));
        assert!(matches!(dispatched("location Bad Iburg"),
                         Message::Stations(StationsMessage::LocationChanged(l)) if l == "Bad Iburg"));
    }

    #[test]
    fn control_commands() {
        assert!(matches!(parse_command(""), Ok(Command::Show)));
        assert!(matches!(parse_command("help"), Ok(Command::Help)));
        assert!(matches!(parse_command("quit"), Ok(Command::Quit)));
    }

    #[test]
    fn arguments_keep_inner_spaces() {
        assert_eq!(required("location", "Bad Iburg"), Ok("Bad Iburg"));
        assert_eq!(required("location", ""), Err(CommandError::MissingArgument("location")));
        assert!(matches!(dispatched("weight   72.5  "),
                         Message::Calculate(CalculateMessage::WeightChanged(w)) if w == "72.5"));
    }

    #[test]
    fn bad_commands() {
        assert_eq!(parse_command("fly").unwrap_err(), CommandError::Unknown(String::from("fly")));
        assert_eq!(parse_command("weight").unwrap_err(), CommandError::MissingArgument("weight"));
        assert_eq!(parse_command("select 0").unwrap_err(), CommandError::InvalidArgument("select", String::from("0")));
        assert_eq!(parse_command("capacity big").unwrap_err(), CommandError::InvalidArgument("capacity", String::from("big")));
        assert_eq!(parse_command("flat maybe").unwrap_err(), CommandError::InvalidArgument("flat", String::from("maybe")));
    }
}
