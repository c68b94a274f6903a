//! HTTP-backed service variant.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{
    error::DataError,
    models::{Game, GameCreate, Genre},
};

use super::GamesService;

/// Games service speaking to a REST backend under a fixed base URL.
pub struct ApiGamesService {
    client: Client,
    base_url: String,
}

impl ApiGamesService {
    /// Build a service for the given base URL. A trailing slash on the
    /// base is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
    ) -> Result<T, DataError> {
        let url = self.url(path);
        debug!(%url, operation, "GET");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| DataError::network(operation, err.to_string()))?;
        decode_body(operation, response).await
    }
}

#[async_trait]
impl GamesService for ApiGamesService {
    async fn list_games(&self) -> Result<Vec<Game>, DataError> {
        self.get_json("list_games", "/games").await
    }

    async fn list_genres(&self) -> Result<Vec<Genre>, DataError> {
        self.get_json("list_genres", "/genres").await
    }

    async fn get_game(&self, id: &str) -> Result<Game, DataError> {
        let operation = "get_game";
        let url = self.url(&format!("/games/{id}"));
        debug!(%url, operation, "GET");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| DataError::network(operation, format!("game {id}: {err}")))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(DataError::not_found("game", id));
        }
        decode_body(operation, response).await
    }

    async fn create_game(&self, payload: GameCreate) -> Result<Game, DataError> {
        payload.validate()?;
        let operation = "create_game";
        let url = self.url("/games");
        debug!(%url, operation, name = %payload.name, "POST");
        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|err| {
                DataError::network(operation, format!("game {:?}: {err}", payload.name))
            })?;
        decode_body(operation, response).await
    }
}

/// Turn a response into `T`, failing on a non-success status before any
/// attempt to parse the body.
async fn decode_body<T: DeserializeOwned>(
    operation: &'static str,
    response: Response,
) -> Result<T, DataError> {
    let status = response.status();
    let url = response.url().clone();
    if !status.is_success() {
        return Err(DataError::network(
            operation,
            format!("status {status} from {url}"),
        ));
    }
    let body = response
        .text()
        .await
        .map_err(|err| DataError::network(operation, err.to_string()))?;
    serde_json::from_str(&body).map_err(|source| DataError::Decode { operation, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_loses_trailing_slash() {
        let service = ApiGamesService::new("http://localhost:3000/api/");
        assert_eq!(service.url("/games"), "http://localhost:3000/api/games");
        assert_eq!(service.url("/games/g1"), "http://localhost:3000/api/games/g1");
    }
}
