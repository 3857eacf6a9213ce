pub mod command;
pub mod menu;
pub mod prompt;

pub use crate::domain::ports::{Console, Question};
pub use crate::utils::error::Result;
