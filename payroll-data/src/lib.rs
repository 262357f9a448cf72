pub mod loader;

pub use loader::{SlabRecord, SlabTableLoader, SlabTableLoaderError};
