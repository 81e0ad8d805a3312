/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/* Automatically managed default lints */
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
/* End of automatically managed default lints */
#![warn(
    missing_debug_implementations,
    missing_docs,
    rustdoc::missing_crate_level_docs,
    unreachable_pub,
    rust_2018_idioms
)]

//! A small client for fetching a single object from Cloudflare R2 into a local file.
//!
//! R2 exposes an S3-compatible API, so all transfer mechanics (connection
//! handling, request signing, retries) are delegated to the AWS SDK for Rust.
//! This crate only wires an account-scoped endpoint and static credentials
//! into an S3 client and streams one `GetObject` response to disk.
//!
//! # Examples
//!
//! Download an object:
//!
//! ```no_run
//! # async fn example() -> Result<(), r2_fetch::error::Error> {
//! let config = r2_fetch::from_env()
//!     .account_id("my-account")
//!     .access_key("AKIA...")
//!     .secret_key("...")
//!     .load()
//!     .await;
//! let client = r2_fetch::Client::new(config);
//!
//! let output = client
//!     .download_file()
//!     .bucket("my-bucket")
//!     .key("hello.txt")
//!     .destination("/tmp/hello.txt")
//!     .send()
//!     .await?;
//!
//! println!("{} bytes", output.bytes_written());
//! # Ok(())
//! # }
//! ```

/// Error types emitted by `r2-fetch`
pub mod error;

/// Client for downloading objects from R2
pub mod client;

/// Download operations
pub mod operation;

/// Client configuration
pub mod config;

pub use self::client::Client;
use self::config::loader::ConfigLoader;
pub use self::config::Config;

/// Create a config loader
pub fn from_env() -> ConfigLoader {
    ConfigLoader::default()
}
