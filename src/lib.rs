//! PixFlow web client.
//!
//! Visitors browse time-limited photo events, download photos and contact
//! organizers; an admin registers, signs in, creates events, uploads photos
//! and extends event lifetimes. All business logic lives in the backend API.
//!
//! This library provides:
//! - The Dioxus single-page app (router, pages, components)
//! - A typed client for the backend API
//! - A static host that serves the built bundle (server feature)

// =============================================================================
// Lints - Enforce code quality and consistency
// =============================================================================

// Deny truly dangerous patterns (these will fail the build)
#![deny(unsafe_code)]
#![deny(unused_must_use)]

// Dioxus UI app (WASM client; also builds natively for tests)
pub mod app;

// Server-only modules (excluded from WASM build)
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;
