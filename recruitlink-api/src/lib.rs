//! # RecruitLink API Server Library
//!
//! This library provides the core functionality for the RecruitLink API
//! server.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and HTTP response mapping
//! - `routes`: Page and API route handlers
//! - `views`: Server-rendered templates

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
pub mod views;
