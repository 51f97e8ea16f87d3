//! Users Domain
//!
//! Single-resource user management: an in-memory record store with
//! uniqueness and timestamp invariants, and a pure query engine for
//! filtered, sorted, paginated listing.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, response envelope
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← sentinel-to-error mapping, defaults
//! └──────┬──────┘
//!        │
//! ┌──────▼─────────────┐
//! │ Repository │ Query │  ← record store / pure filter+sort+paginate
//! └──────┬─────────────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← entity, DTOs, patch, enums
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{
//!     handlers,
//!     repository::InMemoryUserRepository,
//!     service::UserService,
//! };
//!
//! let repository = InMemoryUserRepository::new();
//! let service = UserService::new(repository);
//!
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod query;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{UserError, UserResult};
pub use models::{CreateUser, ListQuery, NewUser, Role, UpdateUser, User, UserPatch};
pub use query::{QueryOptions, QueryResult, Sort, SortDirection, SortField};
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
