pub mod provider;

pub use provider::{ConfigStore, ConfigStoreError, InMemoryConfigStore};
