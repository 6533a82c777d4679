//! reqwest-backed `MusicApi` implementation
//!
//! One HTTP request per call, explicit timeout at the client builder, bearer
//! token attached when the session has one. Non-2xx responses are read for a
//! `{message}` body before being surfaced as `ApiError::Server`.

use crate::api::{ClipJob, ClipJobStatus, ClipRequest, LoginResponse, MusicApi};
use crate::auth::AuthToken;
use crate::error::ApiError;
use async_trait::async_trait;
use pictune_common::models::{
    HourlyCount, MusicFile, MusicFilePatch, Playlist, PlaylistDraft, PlaylistPatch, ReportRange,
    ReportSummary, User, UserDraft, UserPatch,
};
use pictune_common::Config;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Deserialize)]
struct PlayUrlResponse {
    url: String,
}

#[derive(Debug, Deserialize)]
struct TranscriptResponse {
    transcript: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    user_name: &'a str,
    password: &'a str,
}

/// HTTP client for the PicTune backend.
pub struct HttpMusicApi {
    base_url: String,
    client: reqwest::Client,
    token: AuthToken,
}

impl HttpMusicApi {
    /// Build a client from config. The timeout applies per request.
    pub fn new(config: &Config, token: AuthToken) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            base_url: config.api_url.clone(),
            client,
            token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token (when present), send, and normalize failures.
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
        let request = match self.token.get() {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), "Backend returned error response");
            return Err(server_error(status.as_u16(), &body));
        }

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(self.client.get(self.url(path))).await?;
        decode(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .send(self.client.post(self.url(path)).json(body))
            .await?;
        decode(response).await
    }

    async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.client.post(self.url(path)).json(&json!({})))
            .await?;
        Ok(())
    }

    async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .send(self.client.put(self.url(path)).json(body))
            .await?;
        decode(response).await
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.send(self.client.delete(self.url(path))).await?;
        Ok(())
    }
}

#[async_trait]
impl MusicApi for HttpMusicApi {
    async fn list_music_files(
        &self,
        owner: Option<bool>,
        favorites: Option<bool>,
    ) -> Result<Vec<MusicFile>, ApiError> {
        let query = file_list_query(owner, favorites);
        let response = self
            .send(self.client.get(self.url("/files")).query(&query))
            .await?;
        decode(response).await
    }

    async fn get_music_file(&self, id: u64) -> Result<MusicFile, ApiError> {
        self.get_json(&format!("/files/{}", id)).await
    }

    async fn update_music_file(
        &self,
        id: u64,
        patch: &MusicFilePatch,
    ) -> Result<MusicFile, ApiError> {
        self.put_json(&format!("/files/{}", id), patch).await
    }

    async fn delete_music_file(&self, id: u64) -> Result<(), ApiError> {
        self.delete(&format!("/files/{}", id)).await
    }

    async fn toggle_like(&self, id: u64) -> Result<(), ApiError> {
        self.post_empty(&format!("/files/{}/like", id)).await
    }

    async fn get_play_url(&self, id: u64) -> Result<String, ApiError> {
        let response: PlayUrlResponse = self.get_json(&format!("/files/{}/play", id)).await?;
        Ok(response.url)
    }

    async fn transcribe(&self, id: u64) -> Result<String, ApiError> {
        let response = self
            .send(self.client.post(self.url(&format!("/files/{}/transcribe", id))))
            .await?;
        let body: TranscriptResponse = decode(response).await?;
        Ok(body.transcript)
    }

    async fn list_playlists(&self) -> Result<Vec<Playlist>, ApiError> {
        self.get_json("/playlists").await
    }

    async fn get_playlist(&self, id: u64) -> Result<Playlist, ApiError> {
        self.get_json(&format!("/playlists/{}", id)).await
    }

    async fn create_playlist(&self, draft: &PlaylistDraft) -> Result<Playlist, ApiError> {
        self.post_json("/playlists", draft).await
    }

    async fn update_playlist(
        &self,
        id: u64,
        patch: &PlaylistPatch,
    ) -> Result<Playlist, ApiError> {
        self.put_json(&format!("/playlists/{}", id), patch).await
    }

    async fn delete_playlist(&self, id: u64) -> Result<(), ApiError> {
        self.delete(&format!("/playlists/{}", id)).await
    }

    async fn add_song_to_playlist(&self, playlist_id: u64, song_id: u64) -> Result<(), ApiError> {
        self.send(
            self.client
                .post(self.url(&format!("/playlists/{}/songs", playlist_id)))
                .json(&json!({ "songId": song_id })),
        )
        .await?;
        Ok(())
    }

    async fn remove_song_from_playlist(
        &self,
        playlist_id: u64,
        song_id: u64,
    ) -> Result<(), ApiError> {
        self.delete(&format!("/playlists/{}/songs/{}", playlist_id, song_id))
            .await
    }

    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.get_json("/users").await
    }

    async fn update_user(&self, id: &str, patch: &UserPatch) -> Result<User, ApiError> {
        self.put_json(&format!("/users/{}", id), patch).await
    }

    async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&format!("/users/{}", id)).await
    }

    async fn sign_in(&self, user_name: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.post_json("/auth/signin", &SignInRequest { user_name, password })
            .await
    }

    async fn sign_up(&self, draft: &UserDraft) -> Result<User, ApiError> {
        self.post_json("/auth/signup", draft).await
    }

    async fn profile(&self) -> Result<User, ApiError> {
        self.get_json("/auth/profile").await
    }

    async fn report_summary(&self, range: ReportRange) -> Result<ReportSummary, ApiError> {
        let response = self
            .send(
                self.client
                    .get(self.url("/reports/summary"))
                    .query(&[("range", range.as_str())]),
            )
            .await?;
        decode(response).await
    }

    async fn uploads_by_hour(&self) -> Result<Vec<HourlyCount>, ApiError> {
        self.get_json("/reports/uploads-by-hour").await
    }

    async fn create_clip_job(&self, request: &ClipRequest) -> Result<ClipJob, ApiError> {
        self.post_json("/clips", request).await
    }

    async fn clip_job_status(&self, job_id: &str) -> Result<ClipJobStatus, ApiError> {
        self.get_json(&format!("/clips/{}", job_id)).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn map_reqwest_error(error: reqwest::Error) -> ApiError {
    if error.is_timeout() {
        ApiError::Timeout
    } else if error.is_decode() {
        ApiError::Decode(error.to_string())
    } else {
        ApiError::Transport(error.to_string())
    }
}

/// Build the error for a non-2xx response, preferring the `{message}` body.
fn server_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
        .unwrap_or_default();

    ApiError::Server { status, message }
}

/// Only include the query parameters the caller actually set.
fn file_list_query(owner: Option<bool>, favorites: Option<bool>) -> Vec<(&'static str, String)> {
    let mut query = Vec::new();
    if let Some(owner) = owner {
        query.push(("owner", owner.to_string()));
    }
    if let Some(favorites) = favorites {
        query.push(("favorites", favorites.to_string()));
    }
    query
}
