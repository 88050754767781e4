pub mod error;
pub mod loader;
pub mod output;
pub mod report;
pub mod types;
pub mod util;
