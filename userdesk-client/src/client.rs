use crate::error::{ClientError, ClientResult};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Response, StatusCode};
use tracing::debug;
use userdesk_shared::error::ErrorResponse;
use userdesk_shared::models::user::{CreateUser, UpdateUser, User};

/// Where the API listens in local development
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Async client for the `/users` endpoints
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct UserClient {
    http: reqwest::Client,
    base_url: String,
}

impl UserClient {
    /// Creates a client for `base_url`, sending JSON by default
    ///
    /// A trailing slash on `base_url` is ignored.
    pub fn new(base_url: &str) -> ClientResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self::with_http_client(base_url, http))
    }

    /// Creates a client on top of an existing `reqwest::Client`
    pub fn with_http_client(base_url: &str, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    fn user_url(&self, id: i64) -> String {
        format!("{}/users/{}", self.base_url, id)
    }

    /// Lists every user
    pub async fn get_users(&self) -> ClientResult<Vec<User>> {
        let response = self.http.get(self.users_url()).send().await?;
        Ok(check_status(response).await?.json().await?)
    }

    /// Fetches one user by ID
    ///
    /// # Errors
    ///
    /// `ClientError::NotFound` if no user has this ID
    pub async fn get_user(&self, id: i64) -> ClientResult<User> {
        let response = self.http.get(self.user_url(id)).send().await?;
        Ok(check_status(response).await?.json().await?)
    }

    /// Creates a user and returns it with its assigned ID and timestamps
    ///
    /// # Errors
    ///
    /// `ClientError::Api` with status 400 when the server rejects the
    /// payload; `invalid_fields()` lists the offending fields.
    pub async fn create_user(&self, user: &CreateUser) -> ClientResult<User> {
        let response = self.http.post(self.users_url()).json(user).send().await?;
        let created: User = check_status(response).await?.json().await?;
        debug!(user_id = created.id, "Created user");
        Ok(created)
    }

    /// Applies a partial update; fields left as `None` are not sent
    pub async fn update_user(&self, id: i64, changes: &UpdateUser) -> ClientResult<User> {
        let response = self
            .http
            .patch(self.user_url(id))
            .json(changes)
            .send()
            .await?;
        Ok(check_status(response).await?.json().await?)
    }

    /// Deletes a user
    pub async fn delete_user(&self, id: i64) -> ClientResult<()> {
        let response = self.http.delete(self.user_url(id)).send().await?;
        check_status(response).await?;
        debug!(user_id = id, "Deleted user");
        Ok(())
    }
}

/// Passes successful responses through and turns the rest into `ClientError`
async fn check_status(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::NOT_FOUND {
        return Err(ClientError::NotFound);
    }

    let body = response.json::<ErrorResponse>().await.ok();
    Err(ClientError::Api { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let client = UserClient::new("http://localhost:3000/").unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
        assert_eq!(client.users_url(), "http://localhost:3000/users");
        assert_eq!(client.user_url(42), "http://localhost:3000/users/42");
    }

    #[test]
    fn test_default_base_url() {
        let client = UserClient::new(DEFAULT_BASE_URL).unwrap();
        assert_eq!(client.users_url(), "http://localhost:3000/users");
    }
}
