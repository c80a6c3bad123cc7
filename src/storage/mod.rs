//! In-memory storage for list screens

mod in_memory;

pub use in_memory::RecordStore;
