/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Output type for downloading a single object
#[non_exhaustive]
#[derive(Debug)]
pub struct DownloadFileOutput {
    /// Total number of bytes written to the destination file
    pub bytes_written: u64,
}

impl DownloadFileOutput {
    /// Creates a new builder-style object to manufacture [`DownloadFileOutput`](crate::operation::download_file::DownloadFileOutput).
    pub fn builder() -> DownloadFileOutputBuilder {
        DownloadFileOutputBuilder::default()
    }

    /// The number of bytes written to the destination file
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }
}

/// A builder for [`DownloadFileOutput`](crate::operation::download_file::DownloadFileOutput).
#[non_exhaustive]
#[derive(Debug, Default)]
pub struct DownloadFileOutputBuilder {
    pub(crate) bytes_written: u64,
}

impl DownloadFileOutputBuilder {
    /// The number of bytes written to the destination file
    pub fn bytes_written(mut self, input: u64) -> Self {
        self.bytes_written = input;
        self
    }

    /// The number of bytes written to the destination file
    pub fn get_bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Consume the builder and return the output
    pub fn build(self) -> DownloadFileOutput {
        DownloadFileOutput {
            bytes_written: self.bytes_written,
        }
    }
}
