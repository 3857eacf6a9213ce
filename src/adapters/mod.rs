// Adapters layer: concrete implementations of the domain ports
// (terminal console, in-memory storage).

pub mod console;
pub mod memory;
