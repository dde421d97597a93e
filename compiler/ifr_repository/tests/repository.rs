// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end repository tests.
//!
//! These drive the public API only: a class catalog goes in, a finished
//! repository comes out, and every assertion is made through the
//! `Repository`, `Container` and `Contained` views a remote client would see.
//!
//! # Organization
//!
//! - `common` - the banking fixture catalog and build helpers
//! - `mapping` - what each kind of Java class turns into
//! - `arrays` - boxed array dimensions and their sharing
//! - `lookup` - ID and name lookup over a finished repository
//! - `lifecycle` - finishing, export, read-only rejection and shutdown
//!
//! # Running
//!
//! ```bash
//! cargo test -p ifr_repository --test repository
//! cargo test -p ifr_repository --test repository arrays
//! ```

#[path = "repository/common.rs"]
mod common;

#[path = "repository/arrays.rs"]
mod arrays;

#[path = "repository/lifecycle.rs"]
mod lifecycle;

#[path = "repository/lookup.rs"]
mod lookup;

#[path = "repository/mapping.rs"]
mod mapping;
