use crate::core::command::ItemChoice;
use crate::domain::model::{Order, Row, User};
use crate::utils::error::Result;
use uuid::Uuid;

/// Line-oriented terminal the menu talks to.
pub trait Console {
    /// Reads one line without its terminator. `None` means end of input.
    fn read_line(&mut self) -> Result<Option<String>>;
    /// Writes text without a newline and flushes, for prompts.
    fn write(&mut self, text: &str) -> Result<()>;
    fn writeln(&mut self, text: &str) -> Result<()>;
    fn clear(&mut self) -> Result<()>;
}

/// One category of the main menu with its three demonstration items.
pub trait Question {
    fn header(&self) -> &str;
    fn items(&self) -> [&str; 3];
    fn run_item(&self, item: ItemChoice, console: &mut dyn Console) -> Result<()>;
}

pub trait UserDao {
    fn save(&mut self, user: &User) -> Result<i64>;
}

/// A single table keyed by a generated integer id.
pub trait RowStore {
    fn insert(&mut self, row: Row) -> Result<i64>;
    fn find(&self, id: i64) -> Result<Option<Row>>;
}

pub trait OrderRepository {
    fn find_by_id(&self, id: Uuid) -> Result<Option<Order>>;
    fn save(&mut self, order: &Order) -> Result<()>;
}
