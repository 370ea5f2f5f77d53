//! Luxe Core - Shared types library.
//!
//! This crate provides the types and pure view logic used by every Luxe component:
//! - `storefront` - Public furniture catalog site
//! - `admin` - Back-office CRUD screens
//! - `cli` - Operator commands against the catalog API
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients. Entities mirror the JSON shapes of the external catalog API, which
//! owns all persistence and invariants.
//!
//! # Modules
//!
//! - [`types`] - Entities, API payloads, type-safe IDs, prices and emails
//! - [`catalog`] - Category filtering, sorting and related-product selection
//! - [`carousel`] - Wrapping image carousel index
//! - [`membership`] - Collection membership toggling and add/remove diffs
//! - [`forms`] - Required-field validation for submitted forms
//! - [`images`] - Image URL resolution and upload checks

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod carousel;
pub mod catalog;
pub mod forms;
pub mod images;
pub mod membership;
pub mod types;

pub use types::*;
