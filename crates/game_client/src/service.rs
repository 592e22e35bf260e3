use async_trait::async_trait;
use reqwest::{Client, Response};
use shared::{
    domain::{Color, MoveToken},
    protocol::GameState,
};
use tracing::debug;
use url::Url;

use crate::{config::ClientSettings, error::ServiceError};

/// The remote side of a game session.
#[async_trait]
pub trait GameService: Send + Sync {
    async fn fetch_state(&self) -> Result<GameState, ServiceError>;
    async fn submit_move(&self, token: &MoveToken) -> Result<GameState, ServiceError>;
    /// Discards the current game and starts one where the client plays `player`.
    async fn reset(&self, player: Color) -> Result<(), ServiceError>;
    async fn delete_game(&self) -> Result<(), ServiceError>;
}

pub struct HttpGameService {
    http: Client,
    base_url: Url,
}

impl HttpGameService {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn from_settings(settings: &ClientSettings) -> Result<Self, ServiceError> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.request_timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base_url: settings.base_url()?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, ServiceError> {
        Ok(self.base_url.join(path)?)
    }
}

#[async_trait]
impl GameService for HttpGameService {
    async fn fetch_state(&self) -> Result<GameState, ServiceError> {
        let url = self.endpoint("game")?;
        debug!(%url, "GET game state");
        let res = self.http.get(url).send().await?;
        read_state(res).await
    }

    async fn submit_move(&self, token: &MoveToken) -> Result<GameState, ServiceError> {
        let url = self.endpoint(&format!("game/{token}"))?;
        debug!(%url, "POST move");
        let res = self.http.post(url).send().await?;
        read_state(res).await
    }

    async fn reset(&self, player: Color) -> Result<(), ServiceError> {
        let url = self.endpoint(&format!("game/{}", player.reset_code()))?;
        debug!(%url, "PUT new game");
        let res = self.http.put(url).send().await?;
        ensure_success(res).await?;
        Ok(())
    }

    async fn delete_game(&self) -> Result<(), ServiceError> {
        let url = self.endpoint("game")?;
        debug!(%url, "DELETE game");
        let res = self.http.delete(url).send().await?;
        ensure_success(res).await?;
        Ok(())
    }
}

async fn ensure_success(res: Response) -> Result<Response, ServiceError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let body = res.text().await.unwrap_or_default();
    Err(ServiceError::Status { status, body })
}

/// Decodes the body in full before anything is rendered from it.
async fn read_state(res: Response) -> Result<GameState, ServiceError> {
    let body = ensure_success(res).await?.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

#[cfg(test)]
#[path = "tests/service_tests.rs"]
mod tests;
