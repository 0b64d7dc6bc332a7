//! Event fan-out implementations.

mod memory;

pub use memory::InMemoryEventBus;
