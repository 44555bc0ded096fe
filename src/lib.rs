//! # Odyssey Project - Task Platform Automation
//!
//! Sequential account runner for the Odyssey task/rewards platform. For each
//! supplied session credential it generates a fresh EVM keypair, logs in,
//! submits the account's outstanding tasks, and persists the keypair to disk.
//!
//! ## Modules
//!
//! - [`api`] - Remote API client (login, task history, task submit)
//! - [`config`] - Configuration structures and TOML loading
//! - [`credentials`] - Credential list file reader
//! - [`error`] - Typed error handling with thiserror
//! - [`runner`] - Per-account processing and the sequential run loop
//! - [`wallet`] - Keypair generation and on-disk persistence

pub mod api;
pub mod config;
pub mod credentials;
pub mod error;
pub mod runner;
pub mod wallet;
pub(crate) mod utils;

pub use api::{ApiClient, LoginResponse, SubmitResponse, Task};
pub use config::{ApiConfig, OdysseyConfig};
pub use credentials::read_credentials;
pub use error::{ApiError, ConfigError};
pub use runner::{AccountRunner, DelayPolicy};
pub use wallet::{generate_keypair, Keypair, WalletStore};

// Utils are pub(crate) - only export the logger entry point
pub use utils::setup_logger;
