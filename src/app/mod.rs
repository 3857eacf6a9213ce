pub mod patterns;
pub mod questions;
