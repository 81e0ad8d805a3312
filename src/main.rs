/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::path::PathBuf;
use std::process;

use aws_sdk_s3::error::DisplayErrorContext;
use clap::Parser;
use r2_fetch::operation::download_file::DownloadFileOutput;
use r2_fetch::{Client, Config};

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "r2-fetch")]
#[command(about = "Downloads a single object from Cloudflare R2 into a local file.")]
struct Args {
    /// Output file path
    #[arg(long = "output_file", default_value = "", value_name = "PATH")]
    output_file: PathBuf,

    /// Name of the bucket
    #[arg(long = "bucket_name", default_value = "")]
    bucket_name: String,

    /// Name of the object
    #[arg(long = "object_name", default_value = "")]
    object_name: String,

    /// Account ID
    #[arg(long = "account_id", default_value = "")]
    account_id: String,

    /// Access key
    #[arg(long = "access_key", default_value = "")]
    access_key: String,

    /// Secret key
    #[arg(long = "secret_key", default_value = "")]
    secret_key: String,
}

async fn download_file(client: &Client) -> Result<DownloadFileOutput, r2_fetch::error::Error> {
    let config = client.config();
    client
        .download_file()
        .bucket(config.bucket_name())
        .key(config.object_name())
        .destination(config.output_file())
        .send()
        .await
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config: Config = r2_fetch::from_env()
        .output_file(args.output_file)
        .bucket_name(args.bucket_name)
        .object_name(args.object_name)
        .account_id(args.account_id)
        .access_key(args.access_key)
        .secret_key(args.secret_key)
        .load()
        .await;

    let client = Client::new(config);

    println!("Downloading file, one moment.");

    match download_file(&client).await {
        Ok(output) => {
            println!("Complete!");
            println!(
                "Successfully download {} bytes into {}",
                output.bytes_written(),
                client.config().output_file().display()
            );
        }
        Err(err) => {
            tracing::error!("Unable to download file: {}", DisplayErrorContext(&err));
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    fn test_parse_all_flags() {
        let args = Args::try_parse_from([
            "r2-fetch",
            "--output_file",
            "/tmp/out.bin",
            "--bucket_name",
            "mybucket",
            "--object_name",
            "hello.txt",
            "--account_id",
            "acct123",
            "--access_key",
            "AK",
            "--secret_key",
            "SK",
        ])
        .unwrap();

        assert_eq!(std::path::Path::new("/tmp/out.bin"), args.output_file);
        assert_eq!("mybucket", args.bucket_name);
        assert_eq!("hello.txt", args.object_name);
        assert_eq!("acct123", args.account_id);
        assert_eq!("AK", args.access_key);
        assert_eq!("SK", args.secret_key);
    }

    #[test]
    fn test_absent_flags_default_to_empty() {
        let args = Args::try_parse_from(["r2-fetch"]).unwrap();

        assert_eq!(std::path::Path::new(""), args.output_file);
        assert_eq!("", args.bucket_name);
        assert_eq!("", args.object_name);
        assert_eq!("", args.account_id);
        assert_eq!("", args.access_key);
        assert_eq!("", args.secret_key);
    }
}
