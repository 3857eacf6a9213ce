use crate::core::command::{AccountOperation, ItemChoice};
use crate::core::prompt::{ask, ask_int, ask_real, report, success, warn};
use crate::domain::model::{Account, Person, Product};
use crate::domain::ports::{Console, Question};
use crate::utils::error::Result;

pub const CATALOG: [Product; 3] = [
    Product {
        name: "Notebook",
        price: 2500.00,
        category: "Electronics",
    },
    Product {
        name: "Mouse",
        price: 50.00,
        category: "Accessories",
    },
    Product {
        name: "Keyboard",
        price: 150.00,
        category: "Accessories",
    },
];

pub fn describe_person(person: &Person) -> [String; 2] {
    let verdict = if person.is_adult() {
        "✅ Of legal age"
    } else {
        "❌ Under age"
    };
    [
        format!("Person created: {}, {} years old", person.name, person.age),
        verdict.to_string(),
    ]
}

pub fn catalog_lines(products: &[Product]) -> Vec<String> {
    products
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{}. {} - $ {:.2} ({})", i + 1, p.name, p.price, p.category))
        .collect()
}

/// Question 5: object orientation.
pub struct Objects;

impl Objects {
    fn person(&self, console: &mut dyn Console) -> Result<()> {
        console.writeln("\n👤 PERSON CLASS")?;
        let Some(name) = ask(console, "Enter your name: ")? else {
            return Ok(());
        };
        let Some(age) = ask_int(console, "Enter your age: ", "age", "Invalid age!")? else {
            return Ok(());
        };

        let person = Person::new(name, age);
        tracing::debug!("Built {:?}", person);
        for line in describe_person(&person) {
            console.writeln(&line)?;
        }
        Ok(())
    }

    fn bank_account(&self, console: &mut dyn Console) -> Result<()> {
        console.writeln("\n🏦 BANK ACCOUNT SYSTEM")?;
        let mut account = Account::new();
        console.writeln(&format!("Current balance: $ {:.2}", account.balance()))?;

        let Some(amount) = ask_real(
            console,
            "Enter the amount for the operation: ",
            "amount",
            "Invalid amount!",
        )?
        else {
            return Ok(());
        };

        console.writeln("1. Deposit | 2. Withdraw")?;
        let Some(raw) = console.read_line()? else {
            return Ok(());
        };

        match AccountOperation::parse(&raw) {
            AccountOperation::Deposit => {
                let balance = account.deposit(amount);
                success(console, &format!("Deposit complete! New balance: $ {:.2}", balance))
            }
            AccountOperation::Withdraw => match account.withdraw(amount) {
                Ok(balance) => {
                    success(console, &format!("Withdrawal complete! New balance: $ {:.2}", balance))
                }
                Err(e) => report(console, e),
            },
            AccountOperation::Unrecognized(code) => {
                tracing::debug!("Unrecognized account operation: {:?}", code);
                warn(console, "Invalid operation!")
            }
        }
    }

    fn product_catalog(&self, console: &mut dyn Console) -> Result<()> {
        console.writeln("\n🛍️ PRODUCT CATALOG")?;
        console.writeln("📋 Product list:")?;
        for line in catalog_lines(&CATALOG) {
            console.writeln(&line)?;
        }
        Ok(())
    }
}

impl Question for Objects {
    fn header(&self) -> &str {
        "🏗️ QUESTION 5 - OBJECT ORIENTATION"
    }

    fn items(&self) -> [&str; 3] {
        ["Person Class", "Bank Account System", "Product Catalog"]
    }

    fn run_item(&self, item: ItemChoice, console: &mut dyn Console) -> Result<()> {
        match item {
            ItemChoice::First => self.person(console),
            ItemChoice::Second => self.bank_account(console),
            ItemChoice::Third => self.product_catalog(console),
            ItemChoice::Unrecognized(_) => warn(console, "Invalid item!"),
        }
    }
}
