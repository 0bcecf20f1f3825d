//! The HTTP client for the game service.
//!
//! Endpoint paths follow the service's REST conventions. The room
//! listing endpoint has moved between deployments, so [`ApiClient::
//! list_rooms`] probes a small set of candidate paths in order and
//! uses the first one that answers. Every call carries the configured
//! request timeout; a timed-out call surfaces as a typed error and
//! leaves no state behind.

use std::time::Duration;

use reqwest::Method;
use serde_json::Value;
use tracing::{debug, error, warn};

use royale_types::{Action, RoomDescriptor};

use crate::error::ClientError;
use crate::parse::normalize_room;

/// Candidate paths for the room listing, probed in order.
const ROOM_LIST_ENDPOINTS: &[&str] = &["/rooms", "/lobby", "/lobby/rooms", "/room", "/v1/rooms"];

/// Keys under which the room listing may wrap its room array.
const ROOM_LIST_KEYS: &[&str] = &["rooms", "data", "result", "list", "items"];

/// Maximum response-body bytes kept in error values and logs.
const MAX_ERROR_BODY_LEN: usize = 300;

/// Client for the remote game service.
pub struct ApiClient {
    client: reqwest::Client,
    base: String,
    api_key: String,
    agent_name: String,
}

impl ApiClient {
    /// Build a client for the given API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(
        base: &str,
        api_key: &str,
        agent_name: &str,
        request_timeout: Duration,
    ) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()?;
        Ok(Self {
            client,
            base: base.trim_end_matches('/').to_owned(),
            api_key: api_key.to_owned(),
            agent_name: agent_name.to_owned(),
        })
    }

    /// Perform one request and return the parsed JSON body.
    ///
    /// Non-JSON success bodies are wrapped as `{"raw": <text>}` rather
    /// than failing, since some endpoints answer with bare ids.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ClientError> {
        let url = format!("{}{path}", self.base);
        let mut builder = self
            .client
            .request(method.clone(), &url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .header("User-Agent", format!("royale-agent/{}", self.agent_name));
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let text = response.text().await?;

        debug!(
            method = %method,
            path = path,
            status = status.as_u16(),
            body_len = text.len(),
            "service response"
        );

        if status.is_success() {
            return Ok(serde_json::from_str(&text)
                .unwrap_or_else(|_| serde_json::json!({ "raw": text })));
        }

        let body = truncate(&text, MAX_ERROR_BODY_LEN);
        match status.as_u16() {
            401 => error!("service returned 401 -- check the API key"),
            403 => error!("service returned 403 -- key valid but access denied"),
            404 => debug!(path = path, "endpoint not found"),
            code => warn!(path = path, status = code, body = body, "request failed"),
        }
        Err(ClientError::Status {
            status: status.as_u16(),
            body,
        })
    }

    // -- Rooms -------------------------------------------------------------

    /// List joinable rooms, probing the candidate endpoints in order.
    ///
    /// The first endpoint that answers wins. List-shaped responses may
    /// be wrapped under several keys; entries may be full descriptors,
    /// bare id strings (resolved via a detail fetch), or numbers.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NoRoomEndpoint`] if every candidate path
    /// failed; an answering endpoint with no rooms yields `Ok(vec![])`.
    pub async fn list_rooms(&self) -> Result<Vec<RoomDescriptor>, ClientError> {
        let mut listing = None;
        for endpoint in ROOM_LIST_ENDPOINTS {
            match self.request(Method::GET, endpoint, None).await {
                Ok(value) => {
                    debug!(endpoint = endpoint, "room listing endpoint answered");
                    listing = Some(value);
                    break;
                }
                Err(e) => {
                    debug!(endpoint = endpoint, error = %e, "room endpoint failed");
                }
            }
        }
        let Some(listing) = listing else {
            warn!("all room listing endpoints failed");
            return Err(ClientError::NoRoomEndpoint);
        };

        let entries = unwrap_room_list(&listing);
        let mut rooms = Vec::with_capacity(entries.len());
        for entry in entries {
            match entry {
                Value::String(id) => rooms.push(self.fetch_room_detail(&id).await),
                Value::Number(n) => rooms.push(RoomDescriptor::bare(n.to_string())),
                Value::Object(_) => {
                    if let Some(room) = normalize_room(&entry) {
                        rooms.push(room);
                    }
                }
                other => debug!(entry = %other, "skipping unrecognized room entry"),
            }
        }

        debug!(count = rooms.len(), "rooms available");
        Ok(rooms)
    }

    /// Resolve a bare room id into a descriptor via the detail
    /// endpoint, degrading to a minimal open-room descriptor if the
    /// fetch or normalization fails.
    async fn fetch_room_detail(&self, id: &str) -> RoomDescriptor {
        match self.request(Method::GET, &format!("/rooms/{id}"), None).await {
            Ok(detail) => normalize_room_with_id(&detail, id),
            Err(e) => {
                debug!(room_id = id, error = %e, "room detail fetch failed");
                RoomDescriptor::bare(id)
            }
        }
    }

    /// Join a room; returns the match id to poll.
    ///
    /// The join response names the match under several keys, or may be
    /// a bare string; the room id is the fallback.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] if the join call fails.
    pub async fn join_room(&self, room_id: &str) -> Result<String, ClientError> {
        let body = serde_json::json!({ "agent": self.agent_name });
        let response = self
            .request(Method::POST, &format!("/rooms/{room_id}/join"), Some(&body))
            .await?;
        Ok(extract_match_id(&response, room_id))
    }

    /// Leave a room after a match ends.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] if the leave call fails.
    pub async fn leave_room(&self, room_id: &str) -> Result<(), ClientError> {
        self.request(Method::POST, &format!("/rooms/{room_id}/leave"), None)
            .await?;
        Ok(())
    }

    // -- Match -------------------------------------------------------------

    /// Fetch the raw match state for one tick.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] if the state poll fails.
    pub async fn get_state(&self, match_id: &str) -> Result<Value, ClientError> {
        self.request(Method::GET, &format!("/matches/{match_id}/state"), None)
            .await
    }

    /// Submit one action and return the raw result payload.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] if serialization or submission fails.
    pub async fn send_action(&self, match_id: &str, action: &Action) -> Result<Value, ClientError> {
        let body = serde_json::to_value(action)?;
        self.request(
            Method::POST,
            &format!("/matches/{match_id}/action"),
            Some(&body),
        )
        .await
    }

    // -- Account -----------------------------------------------------------

    /// Fetch the account balance; a malformed body reads as 0.
    ///
    /// # Errors
    ///
    /// Returns a [`ClientError`] if the balance call fails.
    pub async fn get_balance(&self) -> Result<f64, ClientError> {
        let value = self.request(Method::GET, "/account/balance", None).await?;
        Ok(value.get("balance").and_then(Value::as_f64).unwrap_or(0.0))
    }
}

/// Unwrap the room array from a listing response.
///
/// Accepts a bare array, an object wrapping the array under a known
/// key, or a single room object (detected by the presence of an id
/// field).
fn unwrap_room_list(listing: &Value) -> Vec<Value> {
    match listing {
        Value::Array(entries) => entries.clone(),
        Value::Object(map) => {
            for key in ROOM_LIST_KEYS {
                if let Some(Value::Array(entries)) = map.get(*key) {
                    return entries.clone();
                }
            }
            if ["id", "room_id", "roomId"].iter().any(|k| map.contains_key(*k)) {
                return vec![listing.clone()];
            }
            warn!(
                keys = ?map.keys().collect::<Vec<_>>(),
                "room listing object has no recognized list key"
            );
            Vec::new()
        }
        other => {
            warn!(response = %other, "unexpected room listing shape");
            Vec::new()
        }
    }
}

/// Pull the match id out of a join response, falling back to the room id.
fn extract_match_id(response: &Value, room_id: &str) -> String {
    if let Some(s) = response.as_str() {
        return s.to_owned();
    }
    for key in ["match_id", "id", "matchId"] {
        if let Some(s) = response.get(key).and_then(Value::as_str) {
            return s.to_owned();
        }
    }
    // Bare-text bodies get wrapped as {"raw": ...} by the transport.
    if let Some(s) = response.get("raw").and_then(Value::as_str)
        && !s.is_empty()
    {
        return s.to_owned();
    }
    room_id.to_owned()
}

/// Normalize a room detail payload, defaulting the id when the detail
/// body omits it.
fn normalize_room_with_id(detail: &Value, id: &str) -> RoomDescriptor {
    normalize_room(detail)
        .map(|mut room| {
            if room.id.is_empty() {
                room.id = id.to_owned();
            }
            room
        })
        .unwrap_or_else(|| RoomDescriptor::bare(id))
}

/// Truncate a string to at most `max_len` bytes on a char boundary.
fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_owned();
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end = end.saturating_sub(1);
    }
    s.get(..end).unwrap_or_default().to_owned()
}
