//! # Biztime
//!
//! A REST API for companies and their invoices, usable both as a standalone
//! binary and as a library.
//!
//! ## Library Usage
//!
//! ```toml
//! [dependencies]
//! biztime = { version = "0.0.1", default-features = false }
//! ```
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use biztime::server::{AppState, create_router};
//! use biztime::store::{SqliteStore, Store};
//!
//! let store = SqliteStore::new("./biztime.db").unwrap();
//! store.initialize().unwrap();
//!
//! let state = Arc::new(AppState::new(Arc::new(store)));
//! let router = create_router(state);
//! // Serve with axum...
//! ```
//!
//! ## Routes
//!
//! | Method | Path | |
//! |---|---|---|
//! | GET | `/companies` | list `{code, name}` ordered by code |
//! | GET | `/companies/{code}` | one company plus its invoice ids |
//! | POST | `/companies` | create from `{code, name, description}` |
//! | PUT | `/companies/{code}` | replace `{name, description}` |
//! | DELETE | `/companies/{code}` | delete |
//! | GET | `/invoices` | list `{id, comp_code}` ordered by id |
//! | GET | `/invoices/{id}` | one invoice with its company nested |
//! | POST | `/invoices` | create from `{comp_code, amt}` |
//! | PUT | `/invoices/{id}` | change `amt` |
//! | DELETE | `/invoices/{id}` | delete |
//!
//! Errors are rendered as `{"error": {"message": ..., "status": ...}}`.
//!
//! ## Feature Flags
//!
//! - `cli` (default): Builds the `biztime` binary. Disable with `default-features = false`.

pub mod config;
pub mod error;
pub mod server;
pub mod store;
pub mod types;
