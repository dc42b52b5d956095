//! Low-level HTTP access to the public voter-statistics sources plus the
//! data types the website API layer exchanges.

mod client;
mod errors;
pub mod types;
pub mod user_agent;
pub use self::client::{Client, DEFAULT_TIMEOUT};
pub use self::errors::Error;
