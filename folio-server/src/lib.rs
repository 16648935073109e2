//! Folio Server Library
//!
//! This module exports the server components for testing and reuse.

pub mod handlers;
pub mod pages;
pub mod routes;
pub mod state;
