//! Repositories decide *when* to load and save and guard simple business
//! rules; translation stays in the mapper.

use crate::app::patterns::data_mapper::UserMapper;
use crate::domain::model::{Order, User};
use crate::domain::ports::{OrderRepository, RowStore};
use crate::utils::error::{QuestError, Result};
use crate::utils::validation::validate_non_empty_string;
use uuid::Uuid;

pub struct UserRepository<S: RowStore> {
    mapper: UserMapper<S>,
}

impl<S: RowStore> UserRepository<S> {
    pub fn new(mapper: UserMapper<S>) -> Self {
        Self { mapper }
    }

    pub fn mapper(&self) -> &UserMapper<S> {
        &self.mapper
    }

    /// Rejects users without an email before anything reaches storage.
    pub fn register(&mut self, user: &User) -> Result<i64> {
        validate_non_empty_string("email", &user.email)
            .map_err(|_| QuestError::business_rule("Email is required!"))?;
        self.mapper.insert(user)
    }

    pub fn get(&self, id: i64) -> Result<User> {
        self.mapper
            .find_by_id(id)?
            .ok_or_else(|| QuestError::NotFound {
                entity: "user".to_string(),
                id: id.to_string(),
            })
    }
}

/// Builds an order through its root and persists it as a whole.
pub fn place_order<R: OrderRepository>(repo: &mut R, lines: &[(&str, i64)]) -> Result<Uuid> {
    let mut order = Order::new();
    for (name, quantity) in lines {
        order.add_item(*name, *quantity)?;
    }
    repo.save(&order)?;
    tracing::info!("Order {} placed with {} items", order.id(), order.items().len());
    Ok(order.id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryOrderRepository, InMemoryRowStore};

    fn repository() -> UserRepository<InMemoryRowStore> {
        UserRepository::new(UserMapper::new(InMemoryRowStore::new()))
    }

    #[test]
    fn test_register_and_get() {
        let mut repo = repository();
        let id = repo
            .register(&User::new("Lucas", "lucas@email.com"))
            .unwrap();
        assert_eq!(repo.get(id).unwrap().name, "Lucas");
    }

    #[test]
    fn test_register_requires_email() {
        let mut repo = repository();
        let err = repo.register(&User::new("Lucas", "")).unwrap_err();
        assert_eq!(err.user_friendly_message(), "Email is required!");
        assert!(repo.mapper().store().is_empty());
    }

    #[test]
    fn test_get_missing_user() {
        let repo = repository();
        assert!(matches!(repo.get(7), Err(QuestError::NotFound { .. })));
    }

    #[test]
    fn test_place_order_is_all_or_nothing() {
        let mut repo = InMemoryOrderRepository::new();
        let id = place_order(&mut repo, &[("Pen", 2), ("Paper", 10)]).unwrap();
        let order = repo.find_by_id(id).unwrap().unwrap();
        assert_eq!(order.items().len(), 2);

        let err = place_order(&mut repo, &[("Pen", 1), ("Ink", 0)]).unwrap_err();
        assert!(matches!(err, QuestError::BusinessRule { .. }));
    }
}
