//! # formdeck
//!
//! Core of a small form demo application: the session form store, the
//! declarative form schema and the client-side route table. The Leptos UI in
//! `ui/` renders on top of these types.
//!
//! ## Quick Start
//!
//! ```rust
//! use formdeck::store::FormStore;
//!
//! let mut store = FormStore::new();
//! store.update_form_data([("name", "Alice")]);
//! store.update_form_data([("email", "a@x.com")]);
//! assert_eq!(store.form_data().len(), 2);
//!
//! store.reset_form_data();
//! assert!(store.form_data().is_empty());
//! ```
//!
//! ## Modules
//!
//! - **store**: form values and their merge/reset operations
//! - **schema**: field descriptors and their consistency check
//! - **routes**: path -> view table
//! - **catalog**: the demo form schemas
//! - **config**: application settings

pub mod catalog;
pub mod config;
pub mod error;
pub mod routes;
pub mod schema;
pub mod store;

pub use error::SchemaError;
pub use routes::{RouteDef, View, ROUTES};
pub use schema::{FieldAttrs, FieldPattern, FieldType, FormField, FormSchema, SelectOption};
pub use store::{FieldValue, FormData, FormStore};
