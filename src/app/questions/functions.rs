use crate::core::command::ItemChoice;
use crate::core::prompt::{ask, ask_int, report, success, warn};
use crate::domain::ports::{Console, Question};
use crate::utils::error::{QuestError, Result};
use crate::utils::validation::validate_cpf_shape;

/// `n!` as the product `1 * 2 * ... * n`; `0! = 1`.
pub fn factorial(n: i64) -> Result<u128> {
    if n < 0 {
        return Err(QuestError::invalid_input(
            "number",
            &n.to_string(),
            "factorial is only defined for n >= 0",
        ));
    }

    (1..=n as u128).try_fold(1u128, |acc, i| {
        acc.checked_mul(i).ok_or_else(|| QuestError::Overflow {
            operation: "factorial".to_string(),
            input: n.to_string(),
        })
    })
}

/// The first `n` terms `0, 1, 1, 2, 3, ...`. Empty when `n <= 0`.
pub fn fibonacci(n: i64) -> Result<Vec<u128>> {
    let count = usize::try_from(n).unwrap_or(0);
    let mut terms: Vec<u128> = Vec::with_capacity(count.min(256));

    for k in 0..count {
        let term = match k {
            0 => 0,
            1 => 1,
            _ => terms[k - 1]
                .checked_add(terms[k - 2])
                .ok_or_else(|| QuestError::Overflow {
                    operation: "fibonacci".to_string(),
                    input: n.to_string(),
                })?,
        };
        terms.push(term);
    }
    Ok(terms)
}

/// Question 4: functions and methods.
pub struct Functions;

impl Functions {
    fn factorial_item(&self, console: &mut dyn Console) -> Result<()> {
        console.writeln("\n❗ FACTORIAL OF A NUMBER")?;
        let Some(n) = ask_int(
            console,
            "Enter a number: ",
            "number",
            "Enter a non-negative integer!",
        )?
        else {
            return Ok(());
        };

        match factorial(n) {
            Ok(value) => console.writeln(&format!("{}! = {}", n, value)),
            Err(QuestError::InvalidInput { .. }) => warn(console, "Enter a non-negative integer!"),
            Err(e) => report(console, e),
        }
    }

    fn fibonacci_item(&self, console: &mut dyn Console) -> Result<()> {
        console.writeln("\n🌀 FIBONACCI SEQUENCE")?;
        let Some(n) = ask_int(
            console,
            "How many terms would you like to see? ",
            "terms",
            "Enter a positive number of terms!",
        )?
        else {
            return Ok(());
        };

        if n <= 0 {
            return warn(console, "Enter a positive number of terms!");
        }

        match fibonacci(n) {
            Ok(terms) => {
                let joined = terms
                    .iter()
                    .map(u128::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                console.writeln(&format!("Fibonacci({} terms): {}", n, joined))
            }
            Err(e) => report(console, e),
        }
    }

    fn cpf_item(&self, console: &mut dyn Console) -> Result<()> {
        console.writeln("\n🆔 CPF VALIDATION")?;
        let Some(cpf) = ask(console, "Enter a CPF (digits only): ")? else {
            return Ok(());
        };

        // TODO: verify the two check digits once the shape check passes.
        match validate_cpf_shape(&cpf) {
            Ok(()) => success(console, &format!("CPF {} has a valid format!", cpf)),
            Err(e) => {
                tracing::debug!("Rejected CPF: {}", e);
                warn(console, "Invalid CPF! Enter 11 digits.")
            }
        }
    }
}

impl Question for Functions {
    fn header(&self) -> &str {
        "⚙️ QUESTION 4 - FUNCTIONS AND METHODS"
    }

    fn items(&self) -> [&str; 3] {
        ["Factorial of a Number", "Fibonacci Sequence", "CPF Validation"]
    }

    fn run_item(&self, item: ItemChoice, console: &mut dyn Console) -> Result<()> {
        match item {
            ItemChoice::First => self.factorial_item(console),
            ItemChoice::Second => self.fibonacci_item(console),
            ItemChoice::Third => self.cpf_item(console),
            ItemChoice::Unrecognized(_) => warn(console, "Invalid item!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::console::BufferedConsole;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0).unwrap(), 1);
        assert_eq!(factorial(1).unwrap(), 1);
        assert_eq!(factorial(5).unwrap(), 120);
        assert_eq!(factorial(20).unwrap(), 2_432_902_008_176_640_000);
    }

    #[test]
    fn test_factorial_matches_iterative_product() {
        for n in 0..=30i64 {
            let expected: u128 = (1..=n as u128).product();
            assert_eq!(factorial(n).unwrap(), expected, "n = {}", n);
        }
    }

    #[test]
    fn test_factorial_rejects_negative_and_overflow() {
        assert!(matches!(factorial(-1), Err(QuestError::InvalidInput { .. })));
        assert!(factorial(34).is_ok());
        assert!(matches!(factorial(35), Err(QuestError::Overflow { .. })));
    }

    #[test]
    fn test_fibonacci_prefix() {
        assert_eq!(fibonacci(1).unwrap(), vec![0]);
        assert_eq!(fibonacci(2).unwrap(), vec![0, 1]);
        assert_eq!(fibonacci(10).unwrap(), vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
        assert!(fibonacci(0).unwrap().is_empty());
        assert!(fibonacci(-3).unwrap().is_empty());
    }

    #[test]
    fn test_fibonacci_recurrence() {
        let terms = fibonacci(60).unwrap();
        for k in 2..terms.len() {
            assert_eq!(terms[k], terms[k - 1] + terms[k - 2]);
        }
    }

    #[test]
    fn test_fibonacci_overflow_is_reported() {
        // F(186) is the last term below u128::MAX
        assert_eq!(fibonacci(187).unwrap().len(), 187);
        assert!(matches!(fibonacci(188), Err(QuestError::Overflow { .. })));
    }

    #[test]
    fn test_fibonacci_item_output() {
        let mut console = BufferedConsole::scripted(&["5"]);
        Functions.run_item(ItemChoice::Second, &mut console).unwrap();
        assert!(console.output().contains("Fibonacci(5 terms): 0, 1, 1, 2, 3"));
    }

    #[test]
    fn test_cpf_item() {
        let mut console = BufferedConsole::scripted(&["12345678901"]);
        Functions.run_item(ItemChoice::Third, &mut console).unwrap();
        assert!(console.output().contains("✅ CPF 12345678901 has a valid format!"));

        let mut console = BufferedConsole::scripted(&["1234567890a"]);
        Functions.run_item(ItemChoice::Third, &mut console).unwrap();
        assert!(console.output().contains("❌ Invalid CPF! Enter 11 digits."));
    }
}
