//! Test utilities and fixtures for wallet-launcher integration tests.
//!
//! - [`InstallLayout`] - Fluent builder for a fake install: an executable
//!   file, an application-data root, and optional portable/salt markers,
//!   leftover probe files, or a blocked data directory
//! - [`fixture_path`] - Locate a fixture binary next to a test binary
//!
//! # Example
//!
//! ```ignore
//! use wallet_launcher_fixtures::InstallLayout;
//!
//! let layout = InstallLayout::new("Wallet")
//!     .with_portable_marker()
//!     .with_leftover_temp_files(3);
//! assert!(layout.exe_dir().join("WalletForcePortable").is_dir());
//! ```

// Test fixtures crate - relaxed lints for test utilities
#![allow(clippy::expect_used)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::panic)]
#![allow(missing_docs)]

pub mod layout;

pub use layout::{fixture_path, InstallLayout};
