pub mod memory;
pub mod redis;

pub use memory::InMemoryRepository;
pub use redis::RedisRepository;
pub use uniquecode_core::{Repository, StorageError};
