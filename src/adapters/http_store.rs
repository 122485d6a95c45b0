//! HTTP remote store adapter.
//!
//! Implements [`RemoteStore`] against a path-addressed JSON store that
//! follows the `{base}/{key}.json` REST convention:
//!
//! | Operation | Request                                   |
//! |-----------|-------------------------------------------|
//! | `get`     | `GET  {base}/{key}.json` → bare scalar/null |
//! | `set`     | `PUT  {base}/{key}.json` with bare number |
//!
//! One blocking [`ureq::Agent`] is reused for every call.  No retries and
//! no timeouts beyond the transport defaults; every failure goes straight
//! back to the controller.

use log::{debug, warn};
use serde_json::Value;

use crate::app::ports::{RemoteStore, StoreError, StoreKey};
use crate::config::BridgeConfig;

pub struct HttpStore {
    agent: ureq::Agent,
    config: BridgeConfig,
}

impl HttpStore {
    pub fn new(config: &BridgeConfig) -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
            config: config.clone(),
        }
    }
}

impl RemoteStore for HttpStore {
    fn get(&mut self, key: StoreKey) -> Result<u64, StoreError> {
        let url = self.config.store_url(key);
        let body: Value = self
            .agent
            .get(&url)
            .call()
            .map_err(store_error)?
            .into_json()
            .map_err(|e| StoreError::Decode(e.to_string()))?;

        let value = count_from_json(&body).unwrap_or_else(|| {
            warn!("Store: {} holds malformed value {}, treating as 0", key, body);
            0
        });
        debug!("Store: GET {} = {}", key, value);
        Ok(value)
    }

    fn set(&mut self, key: StoreKey, value: u64) -> Result<(), StoreError> {
        let url = self.config.store_url(key);
        self.agent
            .put(&url)
            .send_json(value)
            .map_err(store_error)?;
        debug!("Store: PUT {} = {}", key, value);
        Ok(())
    }
}

/// Interpret a remote scalar as a counter.
///
/// `null` is `Some(0)`.  Non-negative integers, including whole floats
/// such as `3.0`, are taken as-is.  Anything else is malformed (`None`).
pub fn count_from_json(value: &Value) -> Option<u64> {
    match value {
        Value::Null => Some(0),
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| *f >= 0.0 && f.fract() == 0.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        }),
        _ => None,
    }
}

fn store_error(e: ureq::Error) -> StoreError {
    match e {
        ureq::Error::Status(code, _) => StoreError::Status(code),
        ureq::Error::Transport(t) => StoreError::Transport(t.to_string()),
    }
}
