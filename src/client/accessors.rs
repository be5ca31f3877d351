//! Resource Accessors
//!
//! One method per call family. Each prefixes the action with its family
//! name, forwards to [`Session::request`], checks the error object, and
//! only then narrows the opaque `result` into the family's concrete shape.

use serde::de::DeserializeOwned;
use serde_json::Value;

use zbx_protocol::{Graph, HistoryItem, Host};

use super::session::{ApiResult, Error, Session};

impl Session {
    /// Interface to the user.* calls.
    ///
    /// Record shapes vary by action, so elements stay opaque values.
    pub fn user(&mut self, action: &str, params: Value) -> ApiResult<Vec<Value>> {
        self.call_narrowed("user", action, params)
    }

    /// Interface to the host.* calls.
    pub fn host(&mut self, action: &str, params: Value) -> ApiResult<Vec<Host>> {
        self.call_narrowed("host", action, params)
    }

    /// Interface to the graph.* calls.
    pub fn graph(&mut self, action: &str, params: Value) -> ApiResult<Vec<Graph>> {
        self.call_narrowed("graph", action, params)
    }

    /// Interface to the history.* calls.
    pub fn history(&mut self, action: &str, params: Value) -> ApiResult<Vec<HistoryItem>> {
        self.call_narrowed("history", action, params)
    }

    /// Shared family-call path: error check first, then re-decode the
    /// opaque result into the target shape. A result that does not match
    /// the shape is a decoding failure, distinct from a server error.
    fn call_narrowed<T: DeserializeOwned>(
        &mut self,
        family: &str,
        action: &str,
        params: Value,
    ) -> ApiResult<T> {
        let method = format!("{}.{}", family, action);
        let response = self.request(&method, params)?;

        if response.is_err() {
            return Err(Error::Api(response.error));
        }

        serde_json::from_value(response.result).map_err(Error::Decode)
    }
}
