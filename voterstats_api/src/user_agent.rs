//! Identifying request headers sent to every source.

/// User agent announced to government and survey sites.
pub const USER_AGENT: &str = concat!("voterstats-data-bot/", env!("CARGO_PKG_VERSION"));

/// Accept header: HTML first, plain text (mirror output) second.
pub const ACCEPT: &str = "text/html, text/plain;q=0.9";

pub fn get_user_agent() -> &'static str {
    USER_AGENT
}
