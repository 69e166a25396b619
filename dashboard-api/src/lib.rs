//! # Invoice Dashboard API Server Library
//!
//! Server-side form actions for the invoice dashboard.
//!
//! ## Modules
//!
//! - `actions`: Form actions (invoices, sign-in, signup)
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `routes`: HTTP route handlers

pub mod actions;
pub mod app;
pub mod config;
pub mod error;
pub mod routes;
