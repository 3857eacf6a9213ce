use crate::domain::model::{Order, Row, User};
use crate::domain::ports::{OrderRepository, RowStore, UserDao};
use crate::utils::error::Result;
use std::collections::{BTreeMap, HashMap};
use uuid::Uuid;

/// DAO adapter that keeps users as-is, assigning sequential ids from 1.
#[derive(Debug, Default)]
pub struct InMemoryUserDao {
    users: Vec<User>,
}

impl InMemoryUserDao {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }
}

impl UserDao for InMemoryUserDao {
    fn save(&mut self, user: &User) -> Result<i64> {
        let id = self.users.len() as i64 + 1;
        let mut stored = user.clone();
        stored.id = Some(id);
        tracing::debug!("DAO saved user {} as id {}", stored.name, id);
        self.users.push(stored);
        Ok(id)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryRowStore {
    rows: BTreeMap<i64, Row>,
    next_id: i64,
}

impl InMemoryRowStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl RowStore for InMemoryRowStore {
    fn insert(&mut self, row: Row) -> Result<i64> {
        self.next_id += 1;
        let id = self.next_id;
        tracing::debug!("Inserted row {} with {} columns", id, row.data.len());
        self.rows.insert(id, row);
        Ok(id)
    }

    fn find(&self, id: i64) -> Result<Option<Row>> {
        Ok(self.rows.get(&id).cloned())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryOrderRepository {
    orders: HashMap<Uuid, Order>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderRepository for InMemoryOrderRepository {
    fn find_by_id(&self, id: Uuid) -> Result<Option<Order>> {
        Ok(self.orders.get(&id).cloned())
    }

    fn save(&mut self, order: &Order) -> Result<()> {
        tracing::debug!(
            "Saving order {} with {} items",
            order.id(),
            order.items().len()
        );
        self.orders.insert(order.id(), order.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dao_assigns_sequential_ids() {
        let mut dao = InMemoryUserDao::new();
        assert_eq!(dao.save(&User::new("Lucas", "lucas@email.com")).unwrap(), 1);
        assert_eq!(dao.save(&User::new("Maria", "maria@email.com")).unwrap(), 2);
        assert_eq!(dao.users()[1].id, Some(2));
    }

    #[test]
    fn test_row_store_insert_and_find() {
        let mut store = InMemoryRowStore::new();
        assert!(store.is_empty());

        let mut row = Row::default();
        row.data.insert("name".to_string(), serde_json::json!("Lucas"));
        let id = store.insert(row.clone()).unwrap();

        assert_eq!(store.find(id).unwrap(), Some(row));
        assert_eq!(store.find(id + 1).unwrap(), None);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_order_repository_saves_whole_aggregate() {
        let mut repo = InMemoryOrderRepository::new();
        let mut order = Order::new();
        order.add_item("Notebook", 1).unwrap();
        order.add_item("Mouse", 2).unwrap();
        repo.save(&order).unwrap();

        let loaded = repo.find_by_id(order.id()).unwrap().unwrap();
        assert_eq!(loaded, order);
        assert!(repo.find_by_id(Uuid::new_v4()).unwrap().is_none());
    }
}
