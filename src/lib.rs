//! # Lightstep API Client
//!
//! A typed, synchronous client for the Lightstep public observability API.
//! It covers the request plumbing shared by every resource endpoint —
//! authentication headers, the JSON:API media type, the `{"data": ...}`
//! response envelope, and HTTP status classification — so calling tools
//! (e.g., infrastructure-as-code providers) can perform CRUD operations
//! without hand-rolling HTTP and JSON handling.
//!
//! ## Example
//!
//! ```rust,no_run
//! use lightstep_client::{ApiClient, Envelope, Project};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::new("my-api-key", "my-org", "public")?;
//!
//! let response: Envelope<Vec<Project>> = client.get("projects")?;
//! for project in response.data {
//!     println!("Project: {}", project.attributes.name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Errors carry the HTTP status code (or a `-1` sentinel when the
//! connection failed before a response arrived), so callers decide which
//! statuses to treat as success:
//!
//! ```rust,no_run
//! # use lightstep_client::ApiClient;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! # let client = ApiClient::new("key", "org", "public")?;
//! match client.delete("projects/my-project/dashboards/dash-123") {
//!     Ok(()) => {}
//!     Err(e) if e.status_code() == 404 => {} // already gone
//!     Err(e) => return Err(e.into()),
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod types;

// Re-export commonly used items
pub use client::ApiClient;
pub use error::{ApiError, Result, UNKNOWN_STATUS_CODE};
pub use types::{
    Destination, DestinationAttributes, DestinationRelationships, Envelope, Project,
    ProjectAttributes, Relationship, ResourceIdObject,
};

/// The current version of the client library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
