/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_smithy_http_client::test_util::{ReplayEvent, StaticReplayClient};
use aws_smithy_types::body::SdkBody;
use bytes::Bytes;
use std::iter;

use r2_fetch::error::ErrorKind;
use r2_fetch::Client;

fn rand_data(size: usize) -> Bytes {
    iter::repeat_with(fastrand::alphanumeric)
        .take(size)
        .map(|x| x as u8)
        .collect::<Vec<_>>()
        .into()
}

/// create a dummy placeholder request for StaticReplayClient. We don't use
/// `assert_requests()` and instead make our own assertions about the actually
/// captured requests.
fn dummy_expected_request() -> http::Request<SdkBody> {
    http::Request::builder()
        .uri("https://not-used")
        .body(SdkBody::from(&b""[..]))
        .unwrap()
}

fn object_response(data: &Bytes) -> http::Response<SdkBody> {
    http::Response::builder()
        .status(200)
        .header("Content-Length", format!("{}", data.len()))
        .header("ETag", "my-etag")
        .body(SdkBody::from(data.clone()))
        .unwrap()
}

/// Create a static replay client (http connector) that serves the given object
/// once per expected request.
fn simple_object_connector(data: &Bytes, requests: usize) -> StaticReplayClient {
    let events = (0..requests)
        .map(|_| ReplayEvent::new(dummy_expected_request(), object_response(data)))
        .collect();

    StaticReplayClient::new(events)
}

const NO_SUCH_KEY_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
    <Error>
        <Code>NoSuchKey</Code>
        <Message>The specified key does not exist.</Message>
    </Error>
"#;

async fn test_client_for_account(account_id: &str, http_client: StaticReplayClient) -> Client {
    let config = r2_fetch::from_env()
        .account_id(account_id)
        .access_key("AK")
        .secret_key("SK")
        .http_client(http_client)
        .load()
        .await;

    Client::new(config)
}

async fn test_client(http_client: StaticReplayClient) -> Client {
    test_client_for_account("acct123", http_client).await
}

/// Test a successful download writes exactly the object bytes and reports the byte count
#[tokio::test]
async fn test_download_file() {
    let data = Bytes::from_static(b"hello world");
    let http_client = simple_object_connector(&data, 1);
    let client = test_client(http_client.clone()).await;

    let temp_dir = tempfile::tempdir().unwrap();
    let dest = temp_dir.path().join("out.bin");

    let output = client
        .download_file()
        .bucket("mybucket")
        .key("hello.txt")
        .destination(&dest)
        .send()
        .await
        .unwrap();

    assert_eq!(11, output.bytes_written());
    assert_eq!(data.as_ref(), std::fs::read(&dest).unwrap().as_slice());

    let requests = http_client.actual_requests().collect::<Vec<_>>();
    assert_eq!(1, requests.len());
    let uri = requests[0].uri();
    assert!(
        uri.starts_with("https://acct123.r2.cloudflarestorage.com/"),
        "unexpected uri: {uri}"
    );
    assert!(uri.contains("/mybucket/hello.txt"), "unexpected uri: {uri}");
}

/// Test a larger body is streamed to disk in full
#[tokio::test]
async fn test_download_file_streams_full_body() {
    let data = rand_data(1024 * 1024);
    let http_client = simple_object_connector(&data, 1);
    let client = test_client(http_client.clone()).await;

    let temp_dir = tempfile::tempdir().unwrap();
    let dest = temp_dir.path().join("large.bin");

    let output = client
        .download_file()
        .bucket("mybucket")
        .key("large.bin")
        .destination(&dest)
        .send()
        .await
        .unwrap();

    assert_eq!(data.len() as u64, output.bytes_written());
    assert_eq!(data.as_ref(), std::fs::read(&dest).unwrap().as_slice());
}

/// Test a missing object fails the run and leaves no partial content behind
#[tokio::test]
async fn test_download_file_not_found() {
    let http_client = StaticReplayClient::new(vec![ReplayEvent::new(
        dummy_expected_request(),
        http::Response::builder()
            .status(404)
            .body(SdkBody::from(NO_SUCH_KEY_RESPONSE))
            .unwrap(),
    )]);
    let client = test_client(http_client.clone()).await;

    let temp_dir = tempfile::tempdir().unwrap();
    let dest = temp_dir.path().join("out.bin");

    let err = client
        .download_file()
        .bucket("mybucket")
        .key("does-not-exist.txt")
        .destination(&dest)
        .send()
        .await
        .unwrap_err();

    assert_eq!(&ErrorKind::NotFound, err.kind());

    // the destination was created (truncated) before the request; it must be
    // empty, never partially written
    assert_eq!(0, std::fs::metadata(&dest).unwrap().len());
}

/// Test an empty account ID still produces a request against the templated
/// endpoint instead of being rejected up front
#[tokio::test]
async fn test_download_file_empty_account_id() {
    let data = Bytes::from_static(b"hello world");
    let http_client = simple_object_connector(&data, 1);
    let client = test_client_for_account("", http_client.clone()).await;

    let temp_dir = tempfile::tempdir().unwrap();
    let dest = temp_dir.path().join("out.bin");

    client
        .download_file()
        .bucket("mybucket")
        .key("hello.txt")
        .destination(&dest)
        .send()
        .await
        .unwrap();

    let requests = http_client.actual_requests().collect::<Vec<_>>();
    assert_eq!(1, requests.len());
    let uri = requests[0].uri();
    assert!(
        uri.starts_with("https://.r2.cloudflarestorage.com/"),
        "unexpected uri: {uri}"
    );
}

/// Test that a destination that cannot be created halts the run before any
/// request is made
#[tokio::test]
async fn test_download_file_create_error() {
    let data = Bytes::from_static(b"hello world");
    let http_client = simple_object_connector(&data, 1);
    let client = test_client(http_client.clone()).await;

    let temp_dir = tempfile::tempdir().unwrap();
    let dest = temp_dir.path().join("missing-dir").join("out.bin");

    let err = client
        .download_file()
        .bucket("mybucket")
        .key("hello.txt")
        .destination(&dest)
        .send()
        .await
        .unwrap_err();

    assert_eq!(&ErrorKind::IOError, err.kind());

    let requests = http_client.actual_requests().collect::<Vec<_>>();
    assert!(requests.is_empty());
}

/// Test downloading the same unchanged object twice produces byte-identical files
#[tokio::test]
async fn test_download_file_idempotent() {
    let data = rand_data(4096);
    let http_client = simple_object_connector(&data, 2);
    let client = test_client(http_client.clone()).await;

    let temp_dir = tempfile::tempdir().unwrap();
    let first = temp_dir.path().join("first.bin");
    let second = temp_dir.path().join("second.bin");

    for dest in [&first, &second] {
        let output = client
            .download_file()
            .bucket("mybucket")
            .key("same-object.bin")
            .destination(dest)
            .send()
            .await
            .unwrap();
        assert_eq!(data.len() as u64, output.bytes_written());
    }

    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap()
    );
}

/// Test credentials never show up in config debug output
#[tokio::test]
async fn test_config_debug_redacts_secrets() {
    let data = Bytes::from_static(b"hello world");
    let http_client = simple_object_connector(&data, 1);
    let client = test_client(http_client).await;

    let debug = format!("{:?}", client.config());
    assert!(debug.contains("** redacted **"));
    assert!(!debug.contains("SK"));
}
