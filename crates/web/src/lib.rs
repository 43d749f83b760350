//! HTTP server: routing, pages, and request/form mapping.

pub mod app;
