//! Typed record shapes for resource results.
//!
//! The server schema for hosts and graphs is open-ended and changes across
//! versions, so those records stay field-name → value mappings rather than
//! fixed structures. History samples have a stable shape and keep every
//! field as text to avoid numeric precision loss on the wire.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Host record.
pub type Host = HashMap<String, serde_json::Value>;

/// Graph record.
pub type Graph = HashMap<String, serde_json::Value>;

/// Graph item record.
pub type GraphItem = HashMap<String, serde_json::Value>;

/// One history sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    /// Sample timestamp, seconds since the epoch, as text.
    pub clock: String,

    /// Sample value, as text.
    pub value: String,

    /// Id of the item the sample belongs to.
    pub itemid: String,
}
