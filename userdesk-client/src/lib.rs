//! # Userdesk HTTP Client
//!
//! Typed async wrappers around the `/users` endpoints of the Userdesk API.
//!
//! Every call is one HTTP round trip: no retries, no backoff. Non-success
//! responses come back as `ClientError`, with the server's `ErrorResponse`
//! decoded when possible.
//!
//! ## Example
//!
//! ```no_run
//! use userdesk_client::{CreateUser, UserClient};
//!
//! # async fn example() -> Result<(), userdesk_client::ClientError> {
//! let client = UserClient::new("http://localhost:3000")?;
//!
//! let user = client
//!     .create_user(&CreateUser {
//!         name: "Ada Lovelace".to_string(),
//!         email: "ada@example.com".to_string(),
//!         phone: None,
//!         address: None,
//!     })
//!     .await?;
//!
//! let same = client.get_user(user.id).await?;
//! assert_eq!(same.email, "ada@example.com");
//! # Ok(())
//! # }
//! ```

mod client;
mod error;

pub use client::{UserClient, DEFAULT_BASE_URL};
pub use error::{ClientError, ClientResult};
pub use userdesk_shared::models::user::{CreateUser, UpdateUser, User};
