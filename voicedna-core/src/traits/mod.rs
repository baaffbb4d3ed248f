pub mod storage;

pub use storage::IProfileStorage;
