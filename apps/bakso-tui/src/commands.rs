//! Command parsing
//!
//! Turns a `:` command line into a [`Command`]. Applying it to the session is
//! left to the app.

use bakso_core::config::check_fraction;
use bakso_core::Unit;
use chrono::NaiveDate;
use thiserror::Error;

use crate::views::ViewKind;

/// A parsed command line
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `add <name> <unit> <cost> <amount>`
    Add {
        name: String,
        unit: Unit,
        cost_per_unit: f64,
        amount_per_portion: f64,
    },
    /// `edit <name> <unit> <cost> <amount>` on the selected ingredient
    Edit {
        name: String,
        unit: Unit,
        cost_per_unit: f64,
        amount_per_portion: f64,
    },
    /// `del` the selected ingredient
    Delete,
    /// `calc <portions>`
    Calculate(i64),
    /// `save [YYYY-MM-DD]`, today when no date is given
    Save(Option<NaiveDate>),
    /// `support <0..1>`
    MinSupport(f64),
    /// `confidence <0..1>`
    MinConfidence(f64),
    /// `rules`
    ShowRules,
    /// `view <1-5>`
    View(ViewKind),
    /// `q` / `quit`
    Quit,
}

/// Command line errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Not a number: {0}")]
    InvalidNumber(String),

    #[error("Not a date (YYYY-MM-DD): {0}")]
    InvalidDate(String),

    #[error("{0}")]
    InvalidValue(String),
}

/// Result of applying a command
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResult {
    Success(String),
    Error(String),
    Quit,
}

const ADD_USAGE: &str = "add <name> <unit> <cost> <amount>";
const EDIT_USAGE: &str = "edit <name> <unit> <cost> <amount>";

/// Parse a command line (without the leading `:`)
pub fn parse_command(input: &str) -> Result<Command, CommandError> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let Some((&name, args)) = parts.split_first() else {
        return Err(CommandError::Empty);
    };

    match name {
        "q" | "quit" => Ok(Command::Quit),
        "add" => {
            let (name, unit, cost_per_unit, amount_per_portion) = ingredient_args(args, ADD_USAGE)?;
            Ok(Command::Add {
                name,
                unit,
                cost_per_unit,
                amount_per_portion,
            })
        }
        "edit" => {
            let (name, unit, cost_per_unit, amount_per_portion) =
                ingredient_args(args, EDIT_USAGE)?;
            Ok(Command::Edit {
                name,
                unit,
                cost_per_unit,
                amount_per_portion,
            })
        }
        "del" | "delete" => Ok(Command::Delete),
        "calc" => match args {
            [portions] => portions
                .parse::<i64>()
                .map(Command::Calculate)
                .map_err(|_| CommandError::InvalidNumber(portions.to_string())),
            _ => Err(CommandError::Usage("calc <portions>")),
        },
        "save" => match args {
            [] => Ok(Command::Save(None)),
            [date] => NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map(|d| Command::Save(Some(d)))
                .map_err(|_| CommandError::InvalidDate(date.to_string())),
            _ => Err(CommandError::Usage("save [YYYY-MM-DD]")),
        },
        "support" => match args {
            [value] => Ok(Command::MinSupport(threshold("min_support", value)?)),
            _ => Err(CommandError::Usage("support <0..1>")),
        },
        "confidence" => match args {
            [value] => Ok(Command::MinConfidence(threshold("min_confidence", value)?)),
            _ => Err(CommandError::Usage("confidence <0..1>")),
        },
        "rules" => Ok(Command::ShowRules),
        "view" => match args {
            [n] => n
                .parse::<u8>()
                .ok()
                .and_then(ViewKind::from_number)
                .map(Command::View)
                .ok_or(CommandError::Usage("view <1-5>")),
            _ => Err(CommandError::Usage("view <1-5>")),
        },
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

/// Name (may contain spaces), then unit, cost and amount as the last three words.
fn ingredient_args(
    args: &[&str],
    usage: &'static str,
) -> Result<(String, Unit, f64, f64), CommandError> {
    if args.len() < 4 {
        return Err(CommandError::Usage(usage));
    }
    let (name, rest) = args.split_at(args.len() - 3);
    let unit = rest[0]
        .parse::<Unit>()
        .map_err(|e| CommandError::InvalidValue(e.to_string()))?;
    Ok((name.join(" "), unit, number(rest[1])?, number(rest[2])?))
}

fn number(s: &str) -> Result<f64, CommandError> {
    s.parse::<f64>()
        .map_err(|_| CommandError::InvalidNumber(s.to_string()))
}

fn threshold(name: &str, s: &str) -> Result<f64, CommandError> {
    let value = number(s)?;
    check_fraction(name, value).map_err(|e| CommandError::InvalidValue(e.to_string()))?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_with_spaced_name() {
        assert_eq!(
            parse_command("add Daging Sapi kg 120000 0.05"),
            Ok(Command::Add {
                name: "Daging Sapi".to_string(),
                unit: Unit::Kg,
                cost_per_unit: 120_000.0,
                amount_per_portion: 0.05,
            })
        );
    }

    #[test]
    fn test_parse_add_errors() {
        assert_eq!(
            parse_command("add Garam gram 15"),
            Err(CommandError::Usage(ADD_USAGE))
        );
        assert!(matches!(
            parse_command("add Garam cup 15 2"),
            Err(CommandError::InvalidValue(_))
        ));
        assert_eq!(
            parse_command("add Garam gram lima 2"),
            Err(CommandError::InvalidNumber("lima".to_string()))
        );
    }

    #[test]
    fn test_parse_calc_and_save() {
        assert_eq!(parse_command("calc 100"), Ok(Command::Calculate(100)));
        assert_eq!(parse_command("calc -5"), Ok(Command::Calculate(-5)));
        assert_eq!(parse_command("save"), Ok(Command::Save(None)));
        assert_eq!(
            parse_command("save 2024-08-17"),
            Ok(Command::Save(NaiveDate::from_ymd_opt(2024, 8, 17)))
        );
        assert_eq!(
            parse_command("save 17/08/2024"),
            Err(CommandError::InvalidDate("17/08/2024".to_string()))
        );
    }

    #[test]
    fn test_parse_thresholds() {
        assert_eq!(parse_command("support 0.5"), Ok(Command::MinSupport(0.5)));
        assert_eq!(parse_command("confidence 1"), Ok(Command::MinConfidence(1.0)));
        assert!(matches!(
            parse_command("support 1.5"),
            Err(CommandError::InvalidValue(_))
        ));
        assert!(matches!(
            parse_command("confidence -0.1"),
            Err(CommandError::InvalidValue(_))
        ));
    }

    #[test]
    fn test_parse_misc() {
        assert_eq!(parse_command("   "), Err(CommandError::Empty));
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("rules"), Ok(Command::ShowRules));
        assert_eq!(parse_command("view 5"), Ok(Command::View(ViewKind::Apriori)));
        assert_eq!(parse_command("view 9"), Err(CommandError::Usage("view <1-5>")));
        assert_eq!(
            parse_command("spawn x"),
            Err(CommandError::Unknown("spawn".to_string()))
        );
    }
}
