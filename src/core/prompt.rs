//! Input reader and validator glue shared by every menu item.
//!
//! A rejected value prints a warning and yields `Ok(None)`, which the
//! caller treats as "abandon this item". There is no retry loop. Only
//! terminal failures come back as `Err`.

use crate::domain::ports::Console;
use crate::utils::error::{QuestError, Result};
use crate::utils::validation::{parse_int, parse_real};

pub fn warn(console: &mut dyn Console, message: &str) -> Result<()> {
    console.writeln(&format!("❌ {}", message))
}

pub fn success(console: &mut dyn Console, message: &str) -> Result<()> {
    console.writeln(&format!("✅ {}", message))
}

/// Shows a recoverable error to the operator; anything else is returned.
pub fn report(console: &mut dyn Console, err: QuestError) -> Result<()> {
    if err.is_recoverable() {
        tracing::debug!("Operation abandoned: {}", err);
        warn(console, &err.user_friendly_message())
    } else {
        Err(err)
    }
}

pub fn ask(console: &mut dyn Console, prompt: &str) -> Result<Option<String>> {
    console.write(prompt)?;
    console.read_line()
}

pub fn ask_parsed<T>(
    console: &mut dyn Console,
    prompt: &str,
    parse: impl FnOnce(&str) -> Result<T>,
    warning: &str,
) -> Result<Option<T>> {
    let Some(raw) = ask(console, prompt)? else {
        return Ok(None);
    };

    match parse(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_recoverable() => {
            tracing::debug!("Rejected input: {}", e);
            warn(console, warning)?;
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

pub fn ask_int(
    console: &mut dyn Console,
    prompt: &str,
    field: &str,
    warning: &str,
) -> Result<Option<i64>> {
    ask_parsed(console, prompt, |raw| parse_int(field, raw), warning)
}

pub fn ask_real(
    console: &mut dyn Console,
    prompt: &str,
    field: &str,
    warning: &str,
) -> Result<Option<f64>> {
    ask_parsed(console, prompt, |raw| parse_real(field, raw), warning)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::console::BufferedConsole;

    #[test]
    fn test_ask_int_accepts_valid_input() {
        let mut console = BufferedConsole::scripted(&["42"]);
        let value = ask_int(&mut console, "Number: ", "number", "Invalid number!").unwrap();
        assert_eq!(value, Some(42));
        assert_eq!(console.output(), "Number: ");
    }

    #[test]
    fn test_ask_int_warns_on_invalid_input() {
        let mut console = BufferedConsole::scripted(&["forty"]);
        let value = ask_int(&mut console, "Number: ", "number", "Invalid number!").unwrap();
        assert_eq!(value, None);
        assert_eq!(console.output(), "Number: ❌ Invalid number!\n");
    }

    #[test]
    fn test_ask_returns_none_at_end_of_input() {
        let mut console = BufferedConsole::scripted(&[]);
        assert_eq!(ask_real(&mut console, "Value: ", "value", "bad").unwrap(), None);
        assert_eq!(console.output(), "Value: ");
    }

    #[test]
    fn test_report_passes_fatal_errors_through() {
        let mut console = BufferedConsole::scripted(&[]);
        report(&mut console, QuestError::business_rule("Insufficient funds!")).unwrap();
        assert_eq!(console.output(), "❌ Insufficient funds!\n");

        let fatal = QuestError::ConfigError {
            message: "broken".to_string(),
        };
        assert!(report(&mut console, fatal).is_err());
    }
}
