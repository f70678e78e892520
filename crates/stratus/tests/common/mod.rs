//! Common test utilities and helpers

use std::path::Path;
use std::time::Duration;

use stratus::{Client, Credentials};
use wiremock::MockServer;

/// Load a response fixture by file name, e.g. `sqs_receive_message.json`
#[allow(dead_code)]
pub fn load_response_fixture(name: &str) -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = Path::new(manifest_dir)
        .join("tests")
        .join("fixtures")
        .join("responses")
        .join(name);

    std::fs::read_to_string(&path).unwrap_or_else(|e| {
        panic!(
            "Failed to load response fixture '{}' from {:?}: {}",
            name, path, e
        )
    })
}

/// Static test credentials
#[allow(dead_code)]
pub fn test_credentials() -> Credentials {
    Credentials::new("AKIDEXAMPLE", "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY")
}

/// A client in `us-west-2` pointed at the mock server
#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> Client {
    client_with_retries(server, 0)
}

/// Same as [`client_for`] with a retry budget
#[allow(dead_code)]
pub fn client_with_retries(server: &MockServer, max_retries: u32) -> Client {
    Client::builder()
        .region("us-west-2")
        .credentials(test_credentials())
        .endpoint_url(server.uri())
        .timeout(Duration::from_secs(5))
        .max_retries(max_retries)
        .build()
        .expect("Failed to build client")
}
