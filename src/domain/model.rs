use crate::utils::error::{QuestError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

pub const ADULT_AGE: i64 = 18;
pub const OPENING_BALANCE: f64 = 1000.00;

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub name: String,
    pub age: i64,
}

impl Person {
    pub fn new(name: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }

    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    balance: f64,
}

impl Default for Account {
    fn default() -> Self {
        Self::new()
    }
}

impl Account {
    pub fn new() -> Self {
        Self {
            balance: OPENING_BALANCE,
        }
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn deposit(&mut self, amount: f64) -> f64 {
        self.balance += amount;
        self.balance
    }

    /// Fails without touching the balance when `amount` exceeds it.
    pub fn withdraw(&mut self, amount: f64) -> Result<f64> {
        if amount > self.balance {
            return Err(QuestError::business_rule("Insufficient funds!"));
        }
        self.balance -= amount;
        Ok(self.balance)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: &'static str,
    pub price: f64,
    pub category: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Storage-side representation of one table row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub data: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    name: String,
    quantity: u32,
}

impl OrderItem {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}

/// Aggregate root. Items are only reachable through the order, and the
/// order is only ever persisted as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    id: Uuid,
    items: Vec<OrderItem>,
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

impl Order {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            items: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Invariant: every item has a quantity greater than zero.
    pub fn add_item(&mut self, name: impl Into<String>, quantity: i64) -> Result<()> {
        if quantity <= 0 {
            return Err(QuestError::business_rule("Quantity must be greater than zero."));
        }
        let quantity = u32::try_from(quantity).map_err(|_| {
            QuestError::invalid_input("quantity", &quantity.to_string(), "quantity is too large")
        })?;

        self.items.push(OrderItem {
            name: name.into(),
            quantity,
        });
        Ok(())
    }

    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }
}
