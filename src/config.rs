/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;
use std::path::{Path, PathBuf};

/// Load configuration from the process invocation
pub mod loader;

/// Compute the R2 endpoint URL for the given account ID.
///
/// The account ID is not validated; an empty or malformed ID yields a
/// malformed URL which surfaces as a connection failure from the client.
pub(crate) fn endpoint_url(account_id: &str) -> String {
    format!("https://{account_id}.r2.cloudflarestorage.com")
}

/// Configuration for a [`Client`](crate::client::Client)
#[derive(Clone)]
pub struct Config {
    output_file: PathBuf,
    bucket_name: String,
    object_name: String,
    account_id: String,
    access_key: String,
    secret_key: String,
    client: aws_sdk_s3::client::Client,
}

impl Config {
    /// Create a new `Config` builder
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Returns the destination file path
    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    /// Returns the bucket name containing the object
    pub fn bucket_name(&self) -> &str {
        &self.bucket_name
    }

    /// Returns the name (key) of the object to download
    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    /// Returns the R2 account ID
    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    /// Returns the configured access key
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Returns the configured secret key
    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// The Amazon S3 compatible client instance that will be used to send requests to R2.
    pub fn client(&self) -> &aws_sdk_s3::Client {
        &self.client
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = f.debug_struct("Config");
        formatter.field("output_file", &self.output_file);
        formatter.field("bucket_name", &self.bucket_name);
        formatter.field("object_name", &self.object_name);
        formatter.field("account_id", &self.account_id);
        formatter.field("access_key", &"** redacted **");
        formatter.field("secret_key", &"** redacted **");
        formatter.finish()
    }
}

/// Fluent style builder for [Config]
#[derive(Clone, Default)]
pub struct Builder {
    pub(crate) output_file: PathBuf,
    pub(crate) bucket_name: String,
    pub(crate) object_name: String,
    pub(crate) account_id: String,
    pub(crate) access_key: String,
    pub(crate) secret_key: String,
    pub(crate) client: Option<aws_sdk_s3::Client>,
}

impl Builder {
    /// Set the destination file path.
    ///
    /// Defaults to the empty path; no validation is performed here.
    pub fn output_file(mut self, input: impl Into<PathBuf>) -> Self {
        self.output_file = input.into();
        self
    }

    /// Set the bucket name containing the object.
    pub fn bucket_name(mut self, input: impl Into<String>) -> Self {
        self.bucket_name = input.into();
        self
    }

    /// Set the name (key) of the object to download.
    pub fn object_name(mut self, input: impl Into<String>) -> Self {
        self.object_name = input.into();
        self
    }

    /// Set the R2 account ID the endpoint is derived from.
    pub fn account_id(mut self, input: impl Into<String>) -> Self {
        self.account_id = input.into();
        self
    }

    /// Set the access key used for static credentials.
    pub fn access_key(mut self, input: impl Into<String>) -> Self {
        self.access_key = input.into();
        self
    }

    /// Set the secret key used for static credentials.
    pub fn secret_key(mut self, input: impl Into<String>) -> Self {
        self.secret_key = input.into();
        self
    }

    /// Set an explicit S3 client to use.
    pub fn client(mut self, client: aws_sdk_s3::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Consumes the builder and constructs a [`Config`]
    pub fn build(self) -> Config {
        Config {
            output_file: self.output_file,
            bucket_name: self.bucket_name,
            object_name: self.object_name,
            account_id: self.account_id,
            access_key: self.access_key,
            secret_key: self.secret_key,
            client: self.client.expect("client set"),
        }
    }
}

impl fmt::Debug for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut formatter = f.debug_struct("Builder");
        formatter.field("output_file", &self.output_file);
        formatter.field("bucket_name", &self.bucket_name);
        formatter.field("object_name", &self.object_name);
        formatter.field("account_id", &self.account_id);
        formatter.field("access_key", &"** redacted **");
        formatter.field("secret_key", &"** redacted **");
        formatter.field("client", &self.client.is_some());
        formatter.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::endpoint_url;

    #[test]
    fn test_endpoint_url() {
        assert_eq!(
            "https://acct123.r2.cloudflarestorage.com",
            endpoint_url("acct123")
        );
    }

    #[test]
    fn test_endpoint_url_empty_account_id() {
        // an empty account ID is not rejected, it just produces a URL that
        // fails at connection time
        assert_eq!("https://.r2.cloudflarestorage.com", endpoint_url(""));
    }
}
