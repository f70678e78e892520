//! Integration tests for the JSON protocol services using wiremock

mod common;

use pretty_assertions::assert_eq;
use stratus::Optional;
use stratus::services::{route53domains, secretsmanager, sqs};
use wiremock::matchers::{body_json, body_partial_json, header, header_exists, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

#[tokio::test]
async fn test_sqs_receive_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("x-amz-target", "AmazonSQS.ReceiveMessage"))
        .and(header("content-type", "application/x-amz-json-1.0"))
        .and(header_exists("authorization"))
        .and(header_exists("x-amz-date"))
        .and(body_json(serde_json::json!({
            "QueueUrl": "https://sqs.us-west-2.amazonaws.com/123456789012/orders",
            "MaxNumberOfMessages": 5,
            "WaitTimeSeconds": 2
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-amzn-RequestId", "a1b2c3d4-sqs")
                .set_body_string(common::load_response_fixture("sqs_receive_message.json")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let request = sqs::ReceiveMessageRequest::builder()
        .queue_url("https://sqs.us-west-2.amazonaws.com/123456789012/orders")
        .max_number_of_messages(5)
        .wait_time_seconds(2)
        .build()
        .expect("Failed to build request");

    let response = client
        .sqs()
        .receive_message(request)
        .await
        .expect("Request failed");

    let messages = response.messages.get().expect("messages present");
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].body.as_deref(), Some("{\"order\":42}"));
    assert_eq!(
        messages[0].md5_of_body.as_deref(),
        Some("fafb00f5732ab283681e124bf8747ed1")
    );
    let trace = &messages[0].message_attributes.get().unwrap()["trace"];
    assert_eq!(trace.string_value.as_deref(), Some("abc-123"));
    assert_eq!(trace.data_type, "String");

    assert_eq!(response.response_metadata.http_status, 200);
    assert_eq!(
        response.response_metadata.request_id.as_deref(),
        Some("a1b2c3d4-sqs")
    );
    assert_eq!(response.response_metadata.retries, 0);

    mock_server.verify().await;
}

#[tokio::test]
async fn test_request_is_signed_for_the_service() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            common::load_response_fixture("secretsmanager_get_secret_value.json"),
        ))
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let response = client
        .secrets_manager()
        .get_secret_value(
            secretsmanager::GetSecretValueRequest::builder()
                .secret_id("db-password")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.name.as_deref(), Some("db-password"));
    assert!(response.secret_string.as_deref().unwrap().contains("hunter2"));

    let requests: Vec<Request> = mock_server.received_requests().await.unwrap();
    let headers = &requests[0].headers;
    let authorization = headers.get("authorization").unwrap().to_str().unwrap();
    assert!(authorization.starts_with("AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/"));
    assert!(authorization.contains("/us-west-2/secretsmanager/aws4_request"));
    assert!(authorization.contains("SignedHeaders=content-type;host;x-amz-date;x-amz-target"));
    assert_eq!(
        headers.get("x-amz-target").unwrap().to_str().unwrap(),
        "secretsmanager.GetSecretValue"
    );
    assert_eq!(
        headers.get("content-type").unwrap().to_str().unwrap(),
        "application/x-amz-json-1.1"
    );
    assert!(
        headers
            .get("user-agent")
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("stratus-rust/")
    );
}

#[tokio::test]
async fn test_global_service_signs_for_us_east_1() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header(
            "x-amz-target",
            "Route53Domains_v20140515.CheckDomainAvailability",
        ))
        .and(body_json(serde_json::json!({"DomainName": "example.com"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"Availability":"UNAVAILABLE"}"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let response = client
        .route53domains()
        .check_domain_availability(
            route53domains::CheckDomainAvailabilityRequest::builder()
                .domain_name("example.com")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.availability.as_deref(), Some("UNAVAILABLE"));

    let requests = mock_server.received_requests().await.unwrap();
    let authorization = requests[0].headers.get("authorization").unwrap();
    assert!(
        authorization
            .to_str()
            .unwrap()
            .contains("/us-east-1/route53domains/aws4_request")
    );
}

#[tokio::test]
async fn test_idempotency_token_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("x-amz-target", "secretsmanager.CreateSecret"))
        .and(body_partial_json(serde_json::json!({
            "Name": "db-password",
            "SecretString": "hunter2"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"ARN":"arn:aws:secretsmanager:us-west-2:123456789012:secret:db-password-a1b2c3","Name":"db-password","VersionId":"v1"}"#,
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let response = client
        .secrets_manager()
        .create_secret(
            secretsmanager::CreateSecretRequest::builder()
                .name("db-password")
                .secret_string("hunter2")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.version_id, Optional::Present("v1".to_string()));

    let requests = mock_server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let token = body["ClientRequestToken"].as_str().unwrap();
    assert!(uuid::Uuid::parse_str(token).is_ok());
}

#[tokio::test]
async fn test_empty_body_decodes_to_default() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("x-amz-target", "AmazonSQS.DeleteQueue"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let response = client
        .sqs()
        .delete_queue(
            sqs::DeleteQueueRequest::builder()
                .queue_url("https://sqs.us-west-2.amazonaws.com/123456789012/orders")
                .build()
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.response_metadata.http_status, 200);
}
