/// Database layer for Userdesk
///
/// # Modules
///
/// - `pool`: PostgreSQL connection pool with health checks
/// - `migrations`: Embedded schema migrations
///
/// The queries themselves live on `models::user::User`.

pub mod migrations;
pub mod pool;
