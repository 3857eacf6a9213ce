//! Data Mapper: translates between `User` and storage rows so that neither
//! side knows about the other.

use crate::domain::model::{Row, User};
use crate::domain::ports::RowStore;
use crate::utils::error::{QuestError, Result};
use serde_json::Value;

pub struct UserMapper<S: RowStore> {
    store: S,
}

impl<S: RowStore> UserMapper<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn insert(&mut self, user: &User) -> Result<i64> {
        self.store.insert(to_row(user))
    }

    pub fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        match self.store.find(id)? {
            Some(row) => from_row(id, &row).map(Some),
            None => Ok(None),
        }
    }
}

pub fn to_row(user: &User) -> Row {
    let mut row = Row::default();
    row.data
        .insert("name".to_string(), Value::String(user.name.clone()));
    row.data
        .insert("email".to_string(), Value::String(user.email.clone()));
    row
}

pub fn from_row(id: i64, row: &Row) -> Result<User> {
    let column = |name: &str| -> Result<String> {
        row.data
            .get(name)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| {
                QuestError::invalid_input(name, &id.to_string(), "column missing or not text")
            })
    };

    Ok(User {
        id: Some(id),
        name: column("name")?,
        email: column("email")?,
    })
}
