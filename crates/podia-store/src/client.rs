use crate::{RecordKind, Result as StoreErrorResult, StoreError};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use futures::future::try_join_all;
use log::debug;
use podia_core::{Appointment, HealthLogData, HealthLogEntry, HistoryEntry, Profile};
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP client for the hosted per-identity document store.
///
/// Every record lives under the owning identity's namespace
/// (`/v1/users/{uid}/...`); no cross-identity read is expressible through
/// this interface.
pub struct RecordStoreClient {
    pub base_url: String,
    bearer: Option<String>,
    client: ReqwestClient,
}

impl RecordStoreClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Store URL (e.g., "https://records.example.com")
    /// * `bearer` - Session token of the identity whose records are accessed
    pub fn new(base_url: &str, bearer: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            bearer: bearer.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    /// Swap the session token. The underlying HTTP client and its connection
    /// pool are reused across sessions.
    pub fn set_bearer(&mut self, bearer: Option<&str>) {
        self.bearer = bearer.map(String::from);
    }

    /// Build a request with the session bearer token
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref token) = self.bearer {
            req = req.bearer_auth(token);
        }

        req
    }

    /// Execute request and handle errors. 404 maps to `NotFound` for the
    /// given kind; callers that treat missing records as no-ops filter it.
    async fn execute(&self, req: reqwest::RequestBuilder, kind: RecordKind) -> StoreErrorResult<Value> {
        let response = req.send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(StoreError::not_found(kind));
        }

        let body: Value = response.json().await?;

        if !status.is_success() {
            let code = body
                .pointer("/error/code")
                .and_then(|v| v.as_str())
                .unwrap_or("UNKNOWN")
                .to_string();
            let message = body
                .pointer("/error/message")
                .and_then(|v| v.as_str())
                .unwrap_or("Unknown error")
                .to_string();
            return Err(StoreError::Api {
                code,
                message,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(body)
    }

    // =========================================================================
    // Singleton records (profile, appointment)
    // =========================================================================

    /// Get the profile, or `NotFound` when none was ever saved
    pub async fn get_profile(&self, uid: &str) -> StoreErrorResult<Profile> {
        self.get_singleton(uid, RecordKind::Profile).await
    }

    /// Upsert the profile. The store merges the submitted fields into the
    /// stored record and returns the merged result; omitted fields survive.
    pub async fn put_profile(&self, uid: &str, patch: &Profile) -> StoreErrorResult<Profile> {
        self.put_singleton(uid, RecordKind::Profile, patch).await
    }

    pub async fn get_appointment(&self, uid: &str) -> StoreErrorResult<Appointment> {
        self.get_singleton(uid, RecordKind::Appointment).await
    }

    pub async fn put_appointment(
        &self,
        uid: &str,
        appointment: &Appointment,
    ) -> StoreErrorResult<Appointment> {
        self.put_singleton(uid, RecordKind::Appointment, appointment)
            .await
    }

    /// Remove the appointment. Deleting an absent appointment is a no-op.
    pub async fn delete_appointment(&self, uid: &str) -> StoreErrorResult<()> {
        self.delete(uid, RecordKind::Appointment, None).await
    }

    // =========================================================================
    // History (append-only collection)
    // =========================================================================

    /// List analysis history, newest first. No entries is an empty list,
    /// never an error.
    pub async fn list_history(&self, uid: &str) -> StoreErrorResult<Vec<HistoryEntry>> {
        let mut entries: Vec<HistoryEntry> = self.list_entries(uid, RecordKind::History).await?;
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(entries)
    }

    /// Append one analysis result; the store assigns id and timestamp.
    pub async fn append_history(&self, uid: &str, prediction: &str) -> StoreErrorResult<HistoryEntry> {
        #[derive(Serialize)]
        struct AppendRequest<'a> {
            prediction: &'a str,
        }

        let (id, timestamp) = self
            .append(uid, RecordKind::History, &AppendRequest { prediction })
            .await?;

        Ok(HistoryEntry::new(id, prediction.to_string(), timestamp))
    }

    pub async fn delete_history_entry(&self, uid: &str, entry_id: &str) -> StoreErrorResult<()> {
        self.delete(uid, RecordKind::History, Some(entry_id)).await
    }

    /// Remove every history entry. Gather-then-delete-each: the individual
    /// deletions run concurrently and are joined; the first failure is
    /// surfaced and nothing is rolled back.
    pub async fn delete_all_history(&self, uid: &str) -> StoreErrorResult<usize> {
        let entries = self.list_history(uid).await?;
        let ids: Vec<String> = entries.into_iter().map(|e| e.id).collect();
        self.delete_each(uid, RecordKind::History, ids).await
    }

    // =========================================================================
    // Health log (append-only collection)
    // =========================================================================

    pub async fn list_health_log(&self, uid: &str) -> StoreErrorResult<Vec<HealthLogEntry>> {
        let mut entries: Vec<HealthLogEntry> = self.list_entries(uid, RecordKind::HealthLog).await?;
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(entries)
    }

    pub async fn append_health_log(
        &self,
        uid: &str,
        data: &HealthLogData,
    ) -> StoreErrorResult<HealthLogEntry> {
        let (id, timestamp) = self.append(uid, RecordKind::HealthLog, data).await?;
        Ok(HealthLogEntry::new(id, timestamp, data.clone()))
    }

    pub async fn delete_health_log_entry(&self, uid: &str, entry_id: &str) -> StoreErrorResult<()> {
        self.delete(uid, RecordKind::HealthLog, Some(entry_id)).await
    }

    pub async fn delete_all_health_log(&self, uid: &str) -> StoreErrorResult<usize> {
        let entries = self.list_health_log(uid).await?;
        let ids: Vec<String> = entries.into_iter().map(|e| e.id).collect();
        self.delete_each(uid, RecordKind::HealthLog, ids).await
    }

    // =========================================================================
    // Generic operations
    // =========================================================================

    fn record_path(uid: &str, kind: RecordKind, entry_id: Option<&str>) -> String {
        match entry_id {
            Some(id) => format!("/v1/users/{}/{}/{}", uid, kind.path_segment(), id),
            None => format!("/v1/users/{}/{}", uid, kind.path_segment()),
        }
    }

    async fn get_singleton<T: DeserializeOwned>(
        &self,
        uid: &str,
        kind: RecordKind,
    ) -> StoreErrorResult<T> {
        let req = self.request(Method::GET, &Self::record_path(uid, kind, None));
        let body = self.execute(req, kind).await?;
        Self::parse_record(kind, body)
    }

    async fn put_singleton<B: Serialize, T: DeserializeOwned>(
        &self,
        uid: &str,
        kind: RecordKind,
        record: &B,
    ) -> StoreErrorResult<T> {
        let req = self
            .request(Method::PATCH, &Self::record_path(uid, kind, None))
            .json(record);
        let body = self.execute(req, kind).await?;
        Self::parse_record(kind, body)
    }

    async fn list_entries<T: DeserializeOwned>(
        &self,
        uid: &str,
        kind: RecordKind,
    ) -> StoreErrorResult<Vec<T>> {
        let req = self.request(Method::GET, &Self::record_path(uid, kind, None));

        let body = match self.execute(req, kind).await {
            Ok(body) => body,
            // An identity that never appended anything has no collection yet
            Err(e) if e.is_not_found() => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        let entries = body
            .get("entries")
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new()));

        serde_json::from_value(entries)
            .map_err(|e| StoreError::malformed(kind, e.to_string()))
    }

    /// Create a new entry; returns the store-assigned id and timestamp.
    async fn append<B: Serialize>(
        &self,
        uid: &str,
        kind: RecordKind,
        data: &B,
    ) -> StoreErrorResult<(String, DateTime<Utc>)> {
        let req = self
            .request(Method::POST, &Self::record_path(uid, kind, None))
            .json(data);
        let body = self.execute(req, kind).await?;

        let id = body
            .get("id")
            .and_then(|v| v.as_str())
            .ok_or_else(|| StoreError::malformed(kind, "append response is missing id"))?
            .to_string();

        let timestamp = body
            .get("timestamp")
            .and_then(|v| v.as_str())
            .and_then(|s| s.parse::<DateTime<Utc>>().ok())
            .ok_or_else(|| StoreError::malformed(kind, "append response is missing timestamp"))?;

        debug!("Appended {kind} entry {id} for uid {uid}");

        Ok((id, timestamp))
    }

    /// Delete one entry or a singleton. A missing target is a no-op.
    async fn delete(
        &self,
        uid: &str,
        kind: RecordKind,
        entry_id: Option<&str>,
    ) -> StoreErrorResult<()> {
        let req = self.request(Method::DELETE, &Self::record_path(uid, kind, entry_id));

        match self.execute(req, kind).await {
            Ok(_) => Ok(()),
            Err(e) if e.is_not_found() => Ok(()),
            Err(e) => Err(e),
        }
    }

    async fn delete_each(
        &self,
        uid: &str,
        kind: RecordKind,
        ids: Vec<String>,
    ) -> StoreErrorResult<usize> {
        let count = ids.len();
        try_join_all(
            ids.iter()
                .map(|id| self.delete(uid, kind, Some(id.as_str()))),
        )
        .await?;

        debug!("Deleted {count} {kind} entries for uid {uid}");
        Ok(count)
    }

    fn parse_record<T: DeserializeOwned>(kind: RecordKind, body: Value) -> StoreErrorResult<T> {
        let record = body
            .get("record")
            .cloned()
            .ok_or_else(|| StoreError::malformed(kind, "response is missing record"))?;

        serde_json::from_value(record).map_err(|e| StoreError::malformed(kind, e.to_string()))
    }
}
