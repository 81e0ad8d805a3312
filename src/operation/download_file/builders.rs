/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use crate::error;
use std::path::PathBuf;
use std::sync::Arc;

use super::{DownloadFileInputBuilder, DownloadFileOutput};

/// Fluent builder for constructing a single object download
#[derive(Debug)]
pub struct DownloadFileFluentBuilder {
    handle: Arc<crate::client::Handle>,
    inner: DownloadFileInputBuilder,
}

impl DownloadFileFluentBuilder {
    pub(crate) fn new(handle: Arc<crate::client::Handle>) -> Self {
        Self {
            handle,
            inner: ::std::default::Default::default(),
        }
    }

    /// Initiate a download transfer for a single object
    pub async fn send(self) -> Result<DownloadFileOutput, error::Error> {
        let input = self.inner.build();
        crate::operation::download_file::DownloadFile::orchestrate(self.handle, input).await
    }

    /// Set the bucket name containing the object to download.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.bucket(input);
        self
    }

    /// Set the bucket name containing the object to download.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_bucket(input);
        self
    }

    /// The bucket name containing the object.
    pub fn get_bucket(&self) -> &Option<String> {
        self.inner.get_bucket()
    }

    /// Set the key of the object to download.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.inner = self.inner.key(input);
        self
    }

    /// Set the key of the object to download.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.inner = self.inner.set_key(input);
        self
    }

    /// The key of the object to download.
    pub fn get_key(&self) -> &Option<String> {
        self.inner.get_key()
    }

    /// Set the destination file the object should be written to.
    pub fn destination(mut self, input: impl Into<PathBuf>) -> Self {
        self.inner = self.inner.destination(input);
        self
    }

    /// Set the destination file the object should be written to.
    pub fn set_destination(mut self, input: Option<PathBuf>) -> Self {
        self.inner = self.inner.set_destination(input);
        self
    }

    /// The destination file the object should be written to.
    pub fn get_destination(&self) -> &Option<PathBuf> {
        self.inner.get_destination()
    }
}

impl crate::operation::download_file::input::DownloadFileInputBuilder {
    /// Initiate a download transfer for a single object with this input using the given client.
    pub async fn send_with(
        self,
        client: &crate::Client,
    ) -> Result<DownloadFileOutput, error::Error> {
        let mut fluent_builder = client.download_file();
        fluent_builder.inner = self;
        fluent_builder.send().await
    }
}
