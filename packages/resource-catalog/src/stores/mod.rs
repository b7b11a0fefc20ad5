//! Session storage implementations.

pub mod file;
pub mod memory;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;
