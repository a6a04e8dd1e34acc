//! Typed client for the hosted data service.
//!
//! The service exposes generic CRUD per collection; this client keeps the
//! rest of the app working with typed entities only. Transport errors are
//! surfaced as strings for the UI to display.

use contracts::domain::common::Entity;
use gloo_net::http::Request;

/// Client for the hosted backend. Constructed at the composition root and
/// provided via context - not a module-level singleton.
#[derive(Clone)]
pub struct Base44Client {
    base_url: String,
}

impl Base44Client {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Derive the service URL from the current window location.
    pub fn from_window() -> Self {
        let base = web_sys::window()
            .map(|w| {
                let location = w.location();
                let protocol = location.protocol().unwrap_or_else(|_| "https:".to_string());
                let host = location.host().unwrap_or_default();
                format!("{}//{}", protocol, host)
            })
            .unwrap_or_default();
        Self::new(base)
    }

    fn collection_url<E: Entity>(&self) -> String {
        format!("{}/api/entities/{}", self.base_url, E::collection_name())
    }

    pub async fn list<E: Entity>(&self) -> Result<Vec<E>, String> {
        let resp = Request::get(&self.collection_url::<E>())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("HTTP {}", resp.status()));
        }
        resp.json::<Vec<E>>().await.map_err(|e| e.to_string())
    }

    /// Server-side filter by a field/value predicate object.
    pub async fn filter<E: Entity>(
        &self,
        predicate: &serde_json::Value,
    ) -> Result<Vec<E>, String> {
        let url = format!(
            "{}?q={}",
            self.collection_url::<E>(),
            urlencoding::encode(&predicate.to_string())
        );
        let resp = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("HTTP {}", resp.status()));
        }
        resp.json::<Vec<E>>().await.map_err(|e| e.to_string())
    }

    pub async fn get<E: Entity>(&self, id: &str) -> Result<E, String> {
        let url = format!(
            "{}/{}",
            self.collection_url::<E>(),
            urlencoding::encode(id)
        );
        let resp = Request::get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("HTTP {}", resp.status()));
        }
        resp.json::<E>().await.map_err(|e| e.to_string())
    }

    /// Create a record; the service assigns the id and returns the stored
    /// record.
    pub async fn create<E: Entity>(&self, record: &E) -> Result<E, String> {
        let resp = Request::post(&self.collection_url::<E>())
            .json(record)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("HTTP {}", resp.status()));
        }
        resp.json::<E>().await.map_err(|e| e.to_string())
    }

    pub async fn update<E: Entity>(&self, id: &str, record: &E) -> Result<E, String> {
        let url = format!(
            "{}/{}",
            self.collection_url::<E>(),
            urlencoding::encode(id)
        );
        let resp = Request::put(&url)
            .json(record)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("HTTP {}", resp.status()));
        }
        resp.json::<E>().await.map_err(|e| e.to_string())
    }
}
