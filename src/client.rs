/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::operation::download_file::builders::DownloadFileFluentBuilder;
use crate::Config;
use std::sync::Arc;

/// Client for downloading objects from Cloudflare R2.
#[derive(Debug, Clone)]
pub struct Client {
    pub(crate) handle: Arc<Handle>,
}

/// Whatever is needed to carry out operations, e.g. config, env details, etc
#[derive(Debug)]
pub(crate) struct Handle {
    pub(crate) config: crate::Config,
}

impl Client {
    /// Creates a new client from a config.
    pub fn new(config: Config) -> Client {
        let handle = Arc::new(Handle { config });
        Client { handle }
    }

    /// Returns the client's configuration
    pub fn config(&self) -> &Config {
        &self.handle.config
    }

    /// Download a single object from R2 into a local file.
    ///
    /// A single `GetObject` request is made with the configured client and the
    /// response body is streamed to the destination file. Retry of transient
    /// failures is handled inside the SDK client, not at this layer.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: r2_fetch::Client) -> Result<(), r2_fetch::error::Error> {
    /// let output = client
    ///     .download_file()
    ///     .bucket("my-bucket")
    ///     .key("hello.txt")
    ///     .destination("/tmp/hello.txt")
    ///     .send()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn download_file(&self) -> DownloadFileFluentBuilder {
        DownloadFileFluentBuilder::new(self.handle.clone())
    }
}
