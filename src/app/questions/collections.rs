use crate::core::command::ItemChoice;
use crate::core::prompt::{ask, success, warn};
use crate::domain::ports::{Console, Question};
use crate::utils::error::Result;

pub const ARRAY_VALUES: [i64; 5] = [10, 20, 30, 40, 50];
pub const FRUITS: [&str; 5] = ["Apple", "Banana", "Orange", "Grape", "Mango"];
pub const UNSORTED: [i64; 7] = [64, 34, 25, 12, 22, 11, 90];

pub fn sum_values(values: &[i64]) -> i64 {
    values.iter().sum()
}

/// Whole-string match, ignoring case. Substrings do not match.
pub fn contains_ignore_case(list: &[&str], needle: &str) -> bool {
    let needle = needle.to_lowercase();
    list.iter().any(|item| item.to_lowercase() == needle)
}

pub fn sort_ascending(values: &mut [i64]) {
    values.sort_unstable();
}

pub fn join<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Question 3: arrays and lists.
pub struct Collections;

impl Collections {
    fn array_sum(&self, console: &mut dyn Console) -> Result<()> {
        console.writeln("\n➕ SUM OF ARRAY ELEMENTS")?;
        console.writeln(&format!("Array: [{}]", join(&ARRAY_VALUES)))?;
        console.writeln(&format!("Total: {}", sum_values(&ARRAY_VALUES)))
    }

    fn search_list(&self, console: &mut dyn Console) -> Result<()> {
        console.writeln("\n🔍 SEARCH THE LIST")?;
        console.writeln(&format!("Fruits: {}", join(&FRUITS)))?;
        let Some(needle) = ask(console, "Enter a fruit to search for: ")? else {
            return Ok(());
        };

        if needle.is_empty() {
            tracing::debug!("Empty search term");
            return warn(console, "Enter a fruit name!");
        }

        if contains_ignore_case(&FRUITS, &needle) {
            success(console, &format!("{} was found!", needle))
        } else {
            warn(console, &format!("{} was not found.", needle))
        }
    }

    fn sort_numbers(&self, console: &mut dyn Console) -> Result<()> {
        console.writeln("\n📊 SORTING NUMBERS")?;
        let mut values = UNSORTED;
        console.writeln(&format!("Original array: [{}]", join(&values)))?;
        sort_ascending(&mut values);
        console.writeln(&format!("Sorted array: [{}]", join(&values)))
    }
}

impl Question for Collections {
    fn header(&self) -> &str {
        "📊 QUESTION 3 - ARRAYS AND LISTS"
    }

    fn items(&self) -> [&str; 3] {
        ["Sum of Array Elements", "Search the List", "Sorting Numbers"]
    }

    fn run_item(&self, item: ItemChoice, console: &mut dyn Console) -> Result<()> {
        match item {
            ItemChoice::First => self.array_sum(console),
            ItemChoice::Second => self.search_list(console),
            ItemChoice::Third => self.sort_numbers(console),
            ItemChoice::Unrecognized(_) => warn(console, "Invalid item!"),
        }
    }
}
