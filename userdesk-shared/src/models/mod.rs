/// Data models for Userdesk
///
/// # Models
///
/// - `user`: The `User` resource, its create/update payloads, and the
///   PostgreSQL queries behind them

pub mod user;
