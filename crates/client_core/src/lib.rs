//! Catalog client core.
//!
//! Turns loosely typed catalog payloads into typed [`Section`]s and keeps a
//! single consistent view of them while the user filters by content type and
//! types search text.
//!
//! Data flows leaf-first:
//!
//! 1. [`classifier`] decides which content variant a raw record is.
//! 2. [`mapper`] normalizes classified records into domain values.
//! 3. [`catalog_store`] holds the last unfiltered catalog.
//! 4. [`view_state`] reduces user input and fetch results into a [`ViewState`].
//! 5. [`coordinator`] owns that state on one task, runs fetches through a
//!    [`CatalogSource`], and publishes snapshots to subscribers.
//!
//! [`Section`]: shared::domain::Section

pub mod catalog_store;
pub mod classifier;
pub mod coordinator;
pub mod debounce;
pub mod error;
pub mod mapper;
pub mod settings;
pub mod source;
pub mod view_state;

pub use catalog_store::CatalogStore;
pub use classifier::classify;
pub use coordinator::{spawn_coordinator, CoordinatorHandle, CoordinatorOptions};
pub use error::CatalogError;
pub use mapper::{response_to_domain, section_to_domain, to_domain};
pub use settings::{load_settings, load_settings_from, ClientSettings};
pub use source::{CatalogSource, HttpCatalogSource, MissingCatalogSource};
pub use view_state::{Phase, ViewState};

#[cfg(test)]
#[path = "tests/support.rs"]
pub(crate) mod test_support;
