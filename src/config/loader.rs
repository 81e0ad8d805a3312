/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use aws_smithy_runtime_api::client::http::{HttpClient, SharedHttpClient};

use crate::config::{endpoint_url, Builder};
use crate::Config;

/// Load [`Config`] from process invocation values.
///
/// The loader resolves the shared AWS configuration with the R2 endpoint
/// derived from the account ID and static credentials built from the
/// access/secret key pair. Everything else (retry, timeouts, transfer
/// mechanics) is left at the SDK defaults.
#[derive(Default, Debug)]
pub struct ConfigLoader {
    builder: Builder,
    http_client: Option<SharedHttpClient>,
}

impl ConfigLoader {
    /// Set the destination file path.
    pub fn output_file(mut self, input: impl Into<std::path::PathBuf>) -> Self {
        self.builder = self.builder.output_file(input);
        self
    }

    /// Set the bucket name containing the object.
    pub fn bucket_name(mut self, input: impl Into<String>) -> Self {
        self.builder = self.builder.bucket_name(input);
        self
    }

    /// Set the name (key) of the object to download.
    pub fn object_name(mut self, input: impl Into<String>) -> Self {
        self.builder = self.builder.object_name(input);
        self
    }

    /// Set the R2 account ID the endpoint is derived from.
    ///
    /// The ID is interpolated into
    /// `https://{account_id}.r2.cloudflarestorage.com` as-is.
    pub fn account_id(mut self, input: impl Into<String>) -> Self {
        self.builder = self.builder.account_id(input);
        self
    }

    /// Set the access key used for static credentials.
    pub fn access_key(mut self, input: impl Into<String>) -> Self {
        self.builder = self.builder.access_key(input);
        self
    }

    /// Set the secret key used for static credentials.
    pub fn secret_key(mut self, input: impl Into<String>) -> Self {
        self.builder = self.builder.secret_key(input);
        self
    }

    /// Override the HTTP client used underneath the S3 client.
    ///
    /// Tests use this to substitute a replay connector while still exercising
    /// endpoint resolution and request construction.
    pub fn http_client(mut self, http_client: impl HttpClient + 'static) -> Self {
        self.http_client = Some(SharedHttpClient::new(http_client));
        self
    }

    /// Load the configuration and construct the S3 client for it.
    ///
    /// Credentials are static and long-lived; there is no token refresh or
    /// session expiry handling.
    pub async fn load(self) -> Config {
        let credentials = Credentials::new(
            self.builder.access_key.clone(),
            self.builder.secret_key.clone(),
            None,
            None,
            "r2-fetch",
        );

        let endpoint = endpoint_url(&self.builder.account_id);
        tracing::debug!("resolved endpoint: {endpoint}");

        let mut loader = aws_config::from_env()
            .endpoint_url(endpoint)
            .region(Region::new("auto"))
            .credentials_provider(credentials);

        if let Some(http_client) = self.http_client {
            loader = loader.http_client(http_client);
        }

        let shared_config = loader.load().await;

        // R2 works with either addressing style; path-style keeps the bucket
        // out of the account-derived authority.
        let s3_config = aws_sdk_s3::config::Builder::from(&shared_config)
            .force_path_style(true)
            .build();

        let client = aws_sdk_s3::Client::from_conf(s3_config);

        self.builder.client(client).build()
    }
}
