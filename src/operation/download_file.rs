/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// Operation builders
pub mod builders;

mod input;
/// Request type for downloading a single object from R2
pub use input::{DownloadFileInput, DownloadFileInputBuilder};
mod output;
/// Response type for downloading a single object from R2
pub use output::{DownloadFileOutput, DownloadFileOutputBuilder};

use crate::error;
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Operation struct for downloading a single object from R2
#[derive(Clone, Default, Debug)]
pub(crate) struct DownloadFile;

impl DownloadFile {
    /// Execute a single `DownloadFile` transfer operation
    pub(crate) async fn orchestrate(
        handle: Arc<crate::client::Handle>,
        input: DownloadFileInput,
    ) -> Result<DownloadFileOutput, error::Error> {
        let destination = input.destination().unwrap_or_else(|| Path::new(""));

        // Create (or truncate) the destination before issuing the request;
        // failure here is terminal to the run and no request is made.
        let mut dest = fs::File::create(destination).await?;

        tracing::debug!(
            "downloading {}/{} into {}",
            input.bucket().unwrap_or_default(),
            input.key().unwrap_or_default(),
            destination.display()
        );

        let resp = handle
            .config
            .client()
            .get_object()
            .set_bucket(input.bucket.clone())
            .set_key(input.key.clone())
            .send()
            .await?;

        let mut body = resp.body;
        let mut bytes_written: u64 = 0;
        while let Some(chunk) = body.try_next().await? {
            dest.write_all(&chunk).await?;
            tracing::trace!("wrote chunk size: {}", chunk.len());
            bytes_written += chunk.len() as u64;
        }
        dest.flush().await?;

        Ok(DownloadFileOutput::builder()
            .bytes_written(bytes_written)
            .build())
    }
}
