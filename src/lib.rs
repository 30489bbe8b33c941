//! # yescaptcha
//!
//! An async Rust client for the YesCaptcha solving service.
//!
//! ## Features
//!
//! - **Full Task Lifecycle**: Registers a software id, creates a solve task,
//!   and polls for the result under a bounded time budget.
//! - **Typed Errors**: Every failure mode carries a stable string code for
//!   programmatic branching (timeout vs remote rejection vs transport).
//! - **TLS Fingerprinting**: Uses `rquest` for Chrome-like TLS fingerprinting.
//! - **Proxy Support**: HTTP and SOCKS5 proxy support with authentication.
//! - **Async/Await**: Built on Tokio; polling sleeps never block a thread.
//!
//! ## Quick Start
//!
//! ```ignore
//! use yescaptcha::{Solver, TaskType};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut solver = Solver::builder(
//!         "your_client_key",
//!         "https://example.com/login",
//!         "site_key_from_page",
//!         TaskType::NoCaptchaTaskProxyless,
//!     )
//!     .build()?;
//!
//!     let token = solver.solve().await?;
//!     println!("g-recaptcha-response: {token}");
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Timing Budget
//!
//! `solve()` polls `getTaskResult` at a fixed interval until the overall
//! timeout elapses. Both knobs live on the builder:
//!
//! ```ignore
//! use std::time::Duration;
//!
//! let mut solver = Solver::builder(key, url, site_key, task_type)
//!     .timeout(Duration::from_secs(90))
//!     .interval(Duration::from_secs(2))
//!     .build()?;
//! ```
//!
//! ## Error Codes
//!
//! [`CaptchaError::code`] returns a stable string per failure mode:
//! `ERROR_PROCESSING` (transient, absorbed by the polling loop),
//! `ERROR_WAIT_CAPTCHA_TIME_OUT`, `ERROR_POST_NOT_RESPONSE`,
//! `ERROR_POST_STATUS_CODE`, or the service's own `errorCode` verbatim.

#![allow(missing_docs)]

pub mod client;
pub mod error;
pub mod models;

// Re-exports for convenience
pub use client::{Solver, SolverBuilder};
pub use error::{CaptchaError, Result};
pub use models::TaskType;
