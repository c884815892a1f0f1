//! Draft pool: enabled sets, their persistence, and what they make available.

mod active_sets;
mod random;
mod resolver;
mod storage;

pub use active_sets::{ACTIVE_SETS_KEY, ActiveSets};
pub use random::RandomSample;
pub use resolver::{DraftPool, PoolResolver, SetMembership};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
