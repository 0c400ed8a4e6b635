//! Bank Customer Churn Form Library
//!
//! This library provides the core of a churn-prediction front end: a typed
//! form record, the controller that edits and submits it, and the HTTP client
//! that talks to the prediction service.
//!
//! # Modules
//!
//! - `client`: Prediction service HTTP client.
//! - `config`: Configuration management.
//! - `controller`: Form state controller (record, busy flag, submission).
//! - `display`: Plain-text result rendering.
//! - `errors`: Error handling types.
//! - `models`: Form fields, customer profile, and prediction result models.

pub mod client;
pub mod config;
pub mod controller;
pub mod display;
pub mod errors;
pub mod models;
