use crate::core::command::ItemChoice;
use crate::core::prompt::{ask_int, warn};
use crate::domain::ports::{Console, Question};
use crate::utils::error::Result;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parity {
    Even,
    Odd,
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parity::Even => write!(f, "EVEN"),
            Parity::Odd => write!(f, "ODD"),
        }
    }
}

pub fn parity(number: i64) -> Parity {
    if number % 2 == 0 {
        Parity::Even
    } else {
        Parity::Odd
    }
}

pub fn max_of_three(a: i64, b: i64, c: i64) -> i64 {
    a.max(b).max(c)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeGroup {
    Child,
    Teen,
    Adult,
    Elder,
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AgeGroup::Child => "Child",
            AgeGroup::Teen => "Teen",
            AgeGroup::Adult => "Adult",
            AgeGroup::Elder => "Elder",
        };
        write!(f, "{}", label)
    }
}

/// Upper bounds are exclusive: 12 is a teen, 18 an adult, 60 an elder.
pub fn classify_age(age: i64) -> AgeGroup {
    match age {
        i64::MIN..=11 => AgeGroup::Child,
        12..=17 => AgeGroup::Teen,
        18..=59 => AgeGroup::Adult,
        _ => AgeGroup::Elder,
    }
}

/// Question 2: control structures.
pub struct ControlFlow;

impl ControlFlow {
    fn even_or_odd(&self, console: &mut dyn Console) -> Result<()> {
        console.writeln("\n🔢 EVEN OR ODD")?;
        if let Some(number) = ask_int(console, "Enter a number: ", "number", "Invalid number!")? {
            console.writeln(&format!("The number {} is {}", number, parity(number)))?;
        }
        Ok(())
    }

    fn largest_of_three(&self, console: &mut dyn Console) -> Result<()> {
        console.writeln("\n🏆 LARGEST OF THREE NUMBERS")?;
        let mut numbers = [0i64; 3];
        for (slot, ordinal) in numbers.iter_mut().zip(["first", "second", "third"]) {
            let prompt = format!("Enter the {} number: ", ordinal);
            let field = format!("{} number", ordinal);
            match ask_int(console, &prompt, &field, "Invalid number!")? {
                Some(value) => *slot = value,
                None => return Ok(()),
            }
        }

        let [a, b, c] = numbers;
        console.writeln(&format!("The largest number is: {}", max_of_three(a, b, c)))
    }

    fn age_classification(&self, console: &mut dyn Console) -> Result<()> {
        console.writeln("\n👶 AGE CLASSIFICATION")?;
        if let Some(age) = ask_int(console, "Enter your age: ", "age", "Invalid age!")? {
            console.writeln(&format!("Classification: {}", classify_age(age)))?;
        }
        Ok(())
    }
}

impl Question for ControlFlow {
    fn header(&self) -> &str {
        "🔄 QUESTION 2 - CONTROL STRUCTURES"
    }

    fn items(&self) -> [&str; 3] {
        ["Even or Odd", "Largest of Three Numbers", "Age Classification"]
    }

    fn run_item(&self, item: ItemChoice, console: &mut dyn Console) -> Result<()> {
        match item {
            ItemChoice::First => self.even_or_odd(console),
            ItemChoice::Second => self.largest_of_three(console),
            ItemChoice::Third => self.age_classification(console),
            ItemChoice::Unrecognized(_) => warn(console, "Invalid item!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::console::BufferedConsole;

    #[test]
    fn test_parity() {
        assert_eq!(parity(0), Parity::Even);
        assert_eq!(parity(7), Parity::Odd);
        assert_eq!(parity(-4), Parity::Even);
        assert_eq!(parity(-3), Parity::Odd);
        assert_eq!(parity(i64::MIN), Parity::Even);
    }

    #[test]
    fn test_max_of_three() {
        assert_eq!(max_of_three(1, 2, 3), 3);
        assert_eq!(max_of_three(9, 2, 3), 9);
        assert_eq!(max_of_three(-5, -2, -9), -2);
        assert_eq!(max_of_three(4, 4, 4), 4);
    }

    #[test]
    fn test_classify_age_boundaries() {
        assert_eq!(classify_age(-1), AgeGroup::Child);
        assert_eq!(classify_age(0), AgeGroup::Child);
        assert_eq!(classify_age(11), AgeGroup::Child);
        assert_eq!(classify_age(12), AgeGroup::Teen);
        assert_eq!(classify_age(17), AgeGroup::Teen);
        assert_eq!(classify_age(18), AgeGroup::Adult);
        assert_eq!(classify_age(59), AgeGroup::Adult);
        assert_eq!(classify_age(60), AgeGroup::Elder);
        assert_eq!(classify_age(i64::MAX), AgeGroup::Elder);
    }

    #[test]
    fn test_largest_of_three_stops_at_first_bad_value() {
        let mut console = BufferedConsole::scripted(&["3", "x", "9"]);
        ControlFlow.run_item(ItemChoice::Second, &mut console).unwrap();
        let output = console.output();
        assert!(output.contains("❌ Invalid number!"));
        assert!(!output.contains("third"));
    }

    #[test]
    fn test_even_or_odd_item() {
        let mut console = BufferedConsole::scripted(&["15"]);
        ControlFlow.run_item(ItemChoice::First, &mut console).unwrap();
        assert!(console.output().contains("The number 15 is ODD"));
    }
}
