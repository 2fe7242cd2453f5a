//! Data layer of the payables dashboard: REST access to resource collections,
//! the client-side [`ResourceStore`] cache, and [`TablePage`], which binds a
//! store to the row controllers from `payables-states`.

mod api;
mod config;
mod error;
pub mod http;
mod page;
mod resource;
pub mod resources;
mod store;
mod types;

pub use api::ResourceApi;
pub use config::{BusinessConfig, ConfigError};
pub use error::{ApiError, ApiResult};
pub use page::{Notice, PageOutcome, PendingAction, TablePage};
pub use resource::Resource;
pub use store::{ResourceStore, StoreSnapshot};
pub use types::{ListResponse, PAGE_PARAM, Pagination, QueryParams};
