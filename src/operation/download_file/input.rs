/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::{Path, PathBuf};

/// Input type for downloading a single object
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct DownloadFileInput {
    /// The bucket name containing the object.
    pub bucket: Option<String>,

    /// The key of the object to download.
    pub key: Option<String>,

    /// The destination file the object should be written to.
    pub destination: Option<PathBuf>,
}

impl DownloadFileInput {
    /// Creates a new builder-style object to manufacture [`DownloadFileInput`](crate::operation::download_file::DownloadFileInput).
    pub fn builder() -> DownloadFileInputBuilder {
        DownloadFileInputBuilder::default()
    }

    /// The bucket name containing the object.
    pub fn bucket(&self) -> Option<&str> {
        self.bucket.as_deref()
    }

    /// The key of the object to download.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The destination file the object should be written to.
    pub fn destination(&self) -> Option<&Path> {
        self.destination.as_deref()
    }
}

/// A builder for [`DownloadFileInput`](crate::operation::download_file::DownloadFileInput).
#[non_exhaustive]
#[derive(Clone, Debug, Default)]
pub struct DownloadFileInputBuilder {
    pub(crate) bucket: Option<String>,
    pub(crate) key: Option<String>,
    pub(crate) destination: Option<PathBuf>,
}

impl DownloadFileInputBuilder {
    /// Set the bucket name containing the object to download.
    pub fn bucket(mut self, input: impl Into<String>) -> Self {
        self.bucket = Some(input.into());
        self
    }

    /// Set the bucket name containing the object to download.
    pub fn set_bucket(mut self, input: Option<String>) -> Self {
        self.bucket = input;
        self
    }

    /// The bucket name containing the object.
    pub fn get_bucket(&self) -> &Option<String> {
        &self.bucket
    }

    /// Set the key of the object to download.
    pub fn key(mut self, input: impl Into<String>) -> Self {
        self.key = Some(input.into());
        self
    }

    /// Set the key of the object to download.
    pub fn set_key(mut self, input: Option<String>) -> Self {
        self.key = input;
        self
    }

    /// The key of the object to download.
    pub fn get_key(&self) -> &Option<String> {
        &self.key
    }

    /// Set the destination file the object should be written to.
    pub fn destination(mut self, input: impl Into<PathBuf>) -> Self {
        self.destination = Some(input.into());
        self
    }

    /// Set the destination file the object should be written to.
    pub fn set_destination(mut self, input: Option<PathBuf>) -> Self {
        self.destination = input;
        self
    }

    /// The destination file the object should be written to.
    pub fn get_destination(&self) -> &Option<PathBuf> {
        &self.destination
    }

    /// Consumes the builder and constructs a [`DownloadFileInput`](crate::operation::download_file::DownloadFileInput).
    ///
    /// No field is required; absent values surface later as request failures
    /// from the client rather than build errors.
    pub fn build(self) -> DownloadFileInput {
        DownloadFileInput {
            bucket: self.bucket,
            key: self.key,
            destination: self.destination,
        }
    }
}
