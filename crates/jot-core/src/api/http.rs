//! HTTP client for the `/notes/` REST resource.

use reqwest::{header, Response, StatusCode};

use super::NoteResource;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::models::{Note, NoteDraft, NoteId};

/// Longest response body excerpt kept in an [`Error::UnexpectedStatus`]
const ERROR_BODY_CHARS: usize = 180;

/// [`NoteResource`] backed by a REST service
#[derive(Debug, Clone)]
pub struct HttpNoteResource {
    collection_url: String,
    client: reqwest::Client,
}

impl HttpNoteResource {
    /// Builds a client from resolved configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            collection_url: config.collection_url(),
            client: builder.build()?,
        })
    }

    /// Returns the collection URL this client talks to.
    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    fn item_url(&self, id: &NoteId) -> String {
        format!(
            "{}{}",
            self.collection_url,
            urlencoding::encode(id.as_str())
        )
    }
}

impl NoteResource for HttpNoteResource {
    async fn list(&self) -> Result<Vec<Note>> {
        tracing::debug!("GET {}", self.collection_url);
        let response = self
            .client
            .get(&self.collection_url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;
        let response = expect_status(response, |status| status == StatusCode::OK).await?;
        Ok(response.json::<Vec<Note>>().await?)
    }

    async fn create(&self, draft: &NoteDraft) -> Result<()> {
        tracing::debug!("POST {}", self.collection_url);
        let response = self
            .client
            .post(&self.collection_url)
            .header(header::ACCEPT, "application/json")
            .json(draft)
            .send()
            .await?;
        expect_status(response, |status| status == StatusCode::CREATED).await?;
        Ok(())
    }

    async fn update(&self, id: &NoteId, draft: &NoteDraft) -> Result<()> {
        let url = self.item_url(id);
        tracing::debug!("PUT {}", url);
        let response = self
            .client
            .put(&url)
            .header(header::ACCEPT, "application/json")
            .json(draft)
            .send()
            .await?;
        expect_status(response, |status| status.is_success()).await?;
        Ok(())
    }

    async fn delete(&self, id: &NoteId) -> Result<()> {
        let url = self.item_url(id);
        tracing::debug!("DELETE {}", url);
        let response = self.client.delete(&url).send().await?;
        expect_status(response, |status| status.is_success()).await?;
        Ok(())
    }
}

async fn expect_status(
    response: Response,
    accept: impl Fn(StatusCode) -> bool,
) -> Result<Response> {
    let status = response.status();
    if accept(status) {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    tracing::debug!("Notes service answered HTTP {}", status.as_u16());
    Err(Error::UnexpectedStatus {
        status: status.as_u16(),
        body: body.trim().chars().take(ERROR_BODY_CHARS).collect(),
    })
}
