/// People client — the single point of entry for calls to the remote people API.
///
/// No other module talks to the upstream service directly; the loader goes
/// through the `PeopleSource` trait so tests can substitute a fixture.
///
/// Base URL is hard-coded, there is no config knob for it.
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{CandidateId, PersonSummary};

pub const PEOPLE_API_BASE: &str = "https://forinterview.onrender.com";

/// Why a load of the roster or of one candidate's detail failed.
///
/// `Display` is the message shown to the user, so it follows the dashboard's
/// wording rather than the underlying error.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Error fetching people: {status_text}")]
    RosterStatus { status_text: String },

    #[error("Error fetching people: {0}")]
    Roster(#[source] reqwest::Error),

    #[error("Error fetching details for {name}: {status_text}")]
    DetailStatus { name: String, status_text: String },

    #[error("Error fetching details for {name}: {source}")]
    Detail {
        name: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Anything that can hand out the roster and per-candidate detail payloads.
#[async_trait]
pub trait PeopleSource: Send + Sync {
    async fn fetch_roster(&self) -> Result<Vec<PersonSummary>, LoadError>;

    async fn fetch_detail(&self, person: &PersonSummary) -> Result<Value, LoadError>;
}

/// HTTP implementation of [`PeopleSource`] against the people API.
/// No retries and no request timeout.
#[derive(Clone)]
pub struct PeopleClient {
    client: Client,
    base_url: String,
}

impl PeopleClient {
    pub fn new() -> Self {
        Self::with_base_url(PEOPLE_API_BASE)
    }

    pub(crate) fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn roster_url(&self) -> String {
        format!("{}/people", self.base_url)
    }

    fn detail_url(&self, id: &CandidateId) -> String {
        format!("{}/people/{}", self.base_url, id)
    }
}

impl Default for PeopleClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PeopleSource for PeopleClient {
    async fn fetch_roster(&self) -> Result<Vec<PersonSummary>, LoadError> {
        let response = self
            .client
            .get(self.roster_url())
            .send()
            .await
            .map_err(LoadError::Roster)?;

        let status = response.status();
        if !status.is_success() {
            warn!("People API returned {} for roster", status);
            return Err(LoadError::RosterStatus {
                status_text: status_text(status),
            });
        }

        let roster: Vec<PersonSummary> = response.json().await.map_err(LoadError::Roster)?;
        debug!("Fetched roster: {} people", roster.len());
        Ok(roster)
    }

    async fn fetch_detail(&self, person: &PersonSummary) -> Result<Value, LoadError> {
        let response = self
            .client
            .get(self.detail_url(&person.id))
            .send()
            .await
            .map_err(|source| LoadError::Detail {
                name: person.label(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("People API returned {} for candidate {}", status, person.id);
            return Err(LoadError::DetailStatus {
                name: person.label(),
                status_text: status_text(status),
            });
        }

        response.json().await.map_err(|source| LoadError::Detail {
            name: person.label(),
            source,
        })
    }
}

/// The HTTP reason phrase, e.g. "Internal Server Error".
/// Unregistered codes fall back to the bare number.
fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_u16().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Path, http::StatusCode as AxumStatus, routing::get, Json, Router};
    use serde_json::json;

    /// Serves a tiny people API on an ephemeral port and returns its base URL.
    async fn spawn_stub(fail_detail_for: &'static str) -> String {
        let app = Router::new()
            .route(
                "/people",
                get(|| async { Json(json!([{"id": 1, "name": "A"}, {"id": "2", "name": "B"}])) }),
            )
            .route(
                "/people/:id",
                get(move |Path(id): Path<String>| async move {
                    if id == fail_detail_for {
                        return Err(AxumStatus::INTERNAL_SERVER_ERROR);
                    }
                    Ok(Json(json!({"data": {"data": {"skillset": [
                        {"skills": [{"pos": [{"consensus_score": 2}]}]}
                    ]}}})))
                }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}/")
    }

    #[test]
    fn test_status_text() {
        assert_eq!(status_text(StatusCode::INTERNAL_SERVER_ERROR), "Internal Server Error");
        assert_eq!(status_text(StatusCode::NOT_FOUND), "Not Found");
    }

    #[test]
    fn test_urls_trim_trailing_slash() {
        let client = PeopleClient::with_base_url("http://localhost:9/");
        assert_eq!(client.roster_url(), "http://localhost:9/people");
        assert_eq!(client.detail_url(&CandidateId::from(3)), "http://localhost:9/people/3");
    }

    #[test]
    fn test_error_messages() {
        let roster = LoadError::RosterStatus {
            status_text: "Bad Gateway".to_string(),
        };
        assert_eq!(roster.to_string(), "Error fetching people: Bad Gateway");

        let detail = LoadError::DetailStatus {
            name: "B".to_string(),
            status_text: "Internal Server Error".to_string(),
        };
        assert_eq!(
            detail.to_string(),
            "Error fetching details for B: Internal Server Error"
        );
    }

    #[tokio::test]
    async fn test_fetches_roster_and_detail() {
        let client = PeopleClient::with_base_url(spawn_stub("none").await);
        let roster = client.fetch_roster().await.unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[1].id, CandidateId::from(2));

        let detail = client.fetch_detail(&roster[0]).await.unwrap();
        assert_eq!(crate::scoring::aggregate::aggregate(&detail), 2.0);
    }

    #[tokio::test]
    async fn test_detail_500_is_status_error() {
        let client = PeopleClient::with_base_url(spawn_stub("2").await);
        let roster = client.fetch_roster().await.unwrap();
        let err = client.fetch_detail(&roster[1]).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error fetching details for B: Internal Server Error"
        );
    }
}
