//! Response envelope and resource types for the Lightstep API
//!
//! The API wraps every payload in a one-level `{"data": ...}` envelope.
//! Resources are flat attribute bags with optional relationship references;
//! the server is authoritative, no cross-record invariants are enforced
//! client-side. Only a couple of resource shapes are defined here to
//! illustrate the pattern — callers supply their own types to
//! [`ApiClient::call`](crate::client::ApiClient::call).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Generic API response wrapper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// The response data: a single resource or an array of resources
    pub data: T,
}

/// Reference to another resource by id and type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceIdObject {
    /// Resource identifier
    pub id: String,
    /// Resource type name, e.g. `"project"`
    #[serde(rename = "type")]
    pub resource_type: String,
}

/// A relationship entry pointing at a single related resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relationship {
    /// The referenced resource
    pub data: ResourceIdObject,
}

/// Project resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique project identifier
    pub id: String,
    /// Resource type, always `"project"`
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Project attributes
    pub attributes: ProjectAttributes,
}

/// Attributes of a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectAttributes {
    /// Project display name
    pub name: String,
    /// When the project was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Alert destination resource (webhook, Slack, PagerDuty, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Destination {
    /// Unique destination identifier
    pub id: String,
    /// Resource type, always `"destination"`
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Destination attributes
    pub attributes: DestinationAttributes,
    /// Relationship references, e.g. the owning project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relationships: Option<DestinationRelationships>,
}

/// Attributes of an alert destination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationAttributes {
    /// Destination display name
    pub name: String,
    /// Destination kind, e.g. `"webhook"` or `"slack"`
    pub destination_type: String,
    /// Target URL for webhook destinations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Relationships carried by a destination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationRelationships {
    /// The project this destination belongs to
    pub project: Relationship,
}
