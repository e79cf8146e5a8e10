//! Session crate for the toolscout discovery pipeline.
//!
//! Ties the catalog, the discovery stages and the recommendation engine
//! into one browsing session with an async, debounced "load more".
//!
//! ## Example Usage
//! ```ignore
//! use session::{DiscoveryConfig, DiscoveryQuery, DiscoverySession};
//!
//! let session = DiscoverySession::open(Path::new("data/catalog.json"), DiscoveryConfig::default())?;
//! session.apply(&DiscoveryQuery::new().with_search("video"), Utc::now()).await;
//! session.load_more().await;
//! let page = session.view().await;
//! ```

pub mod config;
pub mod discovery_session;
pub mod error;
pub mod query;

pub use config::DiscoveryConfig;
pub use discovery_session::{DiscoverySession, PageView};
pub use error::{Result, SessionError};
pub use query::DiscoveryQuery;
