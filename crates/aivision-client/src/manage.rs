//! Client for the shared `{Resource}/manage` endpoint

use std::time::Duration;

use aivision_core::config::ApiConfig;
use aivision_core::{CrudAction, Error, ListPage, ListQuery, ManagedResource, Result, Transport};
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::fields::wire_fields;
use crate::session::SessionStore;

/// Typed access to one resource's CRUD operations
///
/// [`ManageClient`] implements this for every [`ManagedResource`]; the
/// controller only sees the trait, so tests can substitute a scripted
/// backend.
#[async_trait]
pub trait ManageApi<T: ManagedResource>: Send + Sync {
    /// Fetch one page of records (`VIEW`)
    async fn list(&self, query: &ListQuery) -> Result<ListPage<T>>;

    /// Fetch active records for pickers (`VIEWACTIVE`)
    async fn list_active(&self) -> Result<Vec<T>>;

    /// Create a record (`ADD`); the request carries no id
    async fn create(&self, record: &T) -> Result<()>;

    /// Update a record (`EDIT`); the full field set is resent
    async fn update(&self, record: &T) -> Result<()>;

    /// Delete a record by id (`DELETE`)
    async fn remove(&self, id: i64) -> Result<()>;
}

/// HTTP client for the manage API
#[derive(Debug, Clone)]
pub struct ManageClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore,
    timeout: Duration,
    lookup_page_size: u32,
}

impl ManageClient {
    /// Create a new client against the configured backend
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: &ApiConfig, session: SessionStore) -> Result<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::configuration(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
            timeout,
            lookup_page_size: config.lookup_page_size,
        })
    }

    /// The session store this client reads credentials from
    #[must_use]
    pub const fn session(&self) -> &SessionStore {
        &self.session
    }

    fn endpoint(&self, resource: &str) -> String {
        format!("{}/{resource}/manage", self.base_url)
    }

    /// Issue one manage request and normalize the failure classes
    async fn post(
        &self,
        resource: &'static str,
        slug: &'static str,
        transport: Transport,
        action: CrudAction,
        extra: Vec<(String, String)>,
    ) -> Result<reqwest::Response> {
        let mut fields = vec![
            ("PUID".to_string(), self.session.puid().to_string()),
            ("Slug".to_string(), slug.to_string()),
            ("CrudAction".to_string(), action.as_str().to_string()),
        ];
        fields.extend(extra);

        debug!(resource, action = %action, ?transport, "manage request");

        let mut request = self.http.post(self.endpoint(resource));
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }

        request = match transport {
            Transport::Multipart => {
                let mut form = reqwest::multipart::Form::new();
                for (key, value) in fields {
                    form = form.text(key, value);
                }
                request.multipart(form)
            }
            Transport::QueryString => request.query(&fields),
        };

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::timeout(self.timeout.as_millis() as u64)
            } else {
                Error::network(e.to_string())
            }
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            // Session management belongs to the shell; the client only
            // invalidates the stored credentials and reports the class.
            warn!(resource, "manage request rejected with 401, clearing session");
            self.session.clear();
            return Err(Error::Authentication);
        }

        if !status.is_success() {
            let message = extract_message(&response.text().await.unwrap_or_default());
            warn!(resource, status = status.as_u16(), "manage request failed");
            return Err(Error::server(status.as_u16(), message));
        }

        Ok(response)
    }
}

/// Pull the user-facing `message` field out of an error body, if present
fn extract_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_default()
}

#[async_trait]
impl<T: ManagedResource> ManageApi<T> for ManageClient {
    async fn list(&self, query: &ListQuery) -> Result<ListPage<T>> {
        let fields = vec![
            ("PageNo".to_string(), query.page_no.to_string()),
            ("PageSize".to_string(), query.page_size.to_string()),
            ("Search".to_string(), query.search.clone()),
        ];
        let response = self
            .post(T::RESOURCE, T::SLUG, T::TRANSPORT, CrudAction::View, fields)
            .await?;

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::network(e.to_string()))?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn list_active(&self) -> Result<Vec<T>> {
        let fields = vec![
            ("PageNo".to_string(), "1".to_string()),
            ("PageSize".to_string(), self.lookup_page_size.to_string()),
            ("Search".to_string(), String::new()),
        ];
        let response = self
            .post(
                T::RESOURCE,
                T::SLUG,
                T::TRANSPORT,
                CrudAction::ViewActive,
                fields,
            )
            .await?;

        let body = response
            .bytes()
            .await
            .map_err(|e| Error::network(e.to_string()))?;
        let page: ListPage<T> = serde_json::from_slice(&body)?;
        Ok(page.data)
    }

    async fn create(&self, record: &T) -> Result<()> {
        let fields = wire_fields(record)?;
        self.post(T::RESOURCE, T::SLUG, T::TRANSPORT, CrudAction::Add, fields)
            .await?;
        Ok(())
    }

    async fn update(&self, record: &T) -> Result<()> {
        if record.id().is_none() {
            return Err(Error::validation("id", "Record id is required for update"));
        }
        let fields = wire_fields(record)?;
        self.post(T::RESOURCE, T::SLUG, T::TRANSPORT, CrudAction::Edit, fields)
            .await?;
        Ok(())
    }

    async fn remove(&self, id: i64) -> Result<()> {
        let fields = vec![("Id".to_string(), id.to_string())];
        self.post(
            T::RESOURCE,
            T::SLUG,
            T::TRANSPORT,
            CrudAction::Delete,
            fields,
        )
        .await?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::missing_panics_doc)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let config = ApiConfig {
            base_url: "https://api.example.com/".to_string(),
            timeout_secs: 20,
            lookup_page_size: 1000,
        };
        let client = ManageClient::new(&config, SessionStore::new()).unwrap();

        assert_eq!(
            client.endpoint("Camera"),
            "https://api.example.com/Camera/manage"
        );
    }

    #[test]
    fn test_extract_message_variants() {
        assert_eq!(
            extract_message(r#"{"message": "Camera already exists"}"#),
            "Camera already exists"
        );
        assert_eq!(extract_message(r#"{"error": "nope"}"#), "");
        assert_eq!(extract_message("not json"), "");
        assert_eq!(extract_message(""), "");
    }
}
