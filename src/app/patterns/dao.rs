//! Data Access Object: the caller hands a domain object to a storage
//! wrapper that knows how to persist it directly.

use crate::domain::model::User;
use crate::domain::ports::UserDao;
use crate::utils::error::Result;

/// Registration flow that depends only on the DAO port.
pub struct SignupService<D: UserDao> {
    dao: D,
}

impl<D: UserDao> SignupService<D> {
    pub fn new(dao: D) -> Self {
        Self { dao }
    }

    pub fn sign_up(&mut self, name: &str, email: &str) -> Result<i64> {
        let id = self.dao.save(&User::new(name, email))?;
        tracing::info!("User {} saved with id {}", name, id);
        Ok(id)
    }

    pub fn into_dao(self) -> D {
        self.dao
    }
}
