pub mod loader;

pub use loader::{load_snapshot, parse_snapshot};
