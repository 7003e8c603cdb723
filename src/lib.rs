//! UCRM Contract-Expiry Notification Batch
//!
//! This library provides the core functionality for a scheduled CRM
//! automation job: it enumerates client records via the UCRM REST API,
//! inspects contract-expiration and national-ID custom attributes, and
//! enqueues templated notification emails for contracts that have expired or
//! are about to, as well as birthday and March-8 greetings.
//!
//! # Modules
//!
//! - `config`: Configuration loaded from the environment.
//! - `crm_client`: UCRM REST API client.
//! - `eligibility`: Pure notification rules.
//! - `errors`: Error handling types.
//! - `models`: UCRM data models.
//! - `national_id`: Birth date and gender derivation from a 13-digit CNP.
//! - `notifications`: Email rendering and dispatch.
//! - `runner`: Batch orchestration.

pub mod config;
pub mod crm_client;
pub mod eligibility;
pub mod errors;
pub mod models;
pub mod national_id;
pub mod notifications;
pub mod runner;
