pub mod error;
mod storage;

pub use storage::{ConstructQueryExecutor, ConstructQueryOutcome};
