//! Integration tests for the ELBv2 Query protocol using wiremock

mod common;

use pretty_assertions::assert_eq;
use stratus::services::elbv2;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_describe_target_health() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("content-type", "application/x-www-form-urlencoded; charset=utf-8"))
        .and(body_string_contains("Action=DescribeTargetHealth"))
        .and(body_string_contains("Version=2015-12-01"))
        .and(body_string_contains("TargetGroupArn=arn%3Atg%2Fweb"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(common::load_response_fixture("elbv2_describe_target_health.xml")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let response = client
        .elbv2()
        .describe_target_health(
            elbv2::DescribeTargetHealthRequest::builder()
                .target_group_arn("arn:tg/web")
                .build()
                .unwrap(),
        )
        .await
        .expect("Request failed");

    let descriptions = response
        .target_health_descriptions
        .into_option()
        .expect("descriptions present")
        .into_vec();
    assert_eq!(descriptions.len(), 2);

    let ids: Vec<_> = descriptions
        .iter()
        .map(|d| d.target.get().unwrap().id.clone())
        .collect();
    assert_eq!(ids, vec!["i-0f76fade".to_string(), "i-0f76fadf".to_string()]);

    let unhealthy = descriptions[1].target_health.get().unwrap();
    assert_eq!(unhealthy.state.as_deref(), Some("unhealthy"));
    assert_eq!(unhealthy.reason.as_deref(), Some("Target.ResponseCodeMismatch"));

    assert_eq!(
        response.response_metadata.request_id.as_deref(),
        Some("c534f810-f389-11e5-9192-3fff33344cfa")
    );

    mock_server.verify().await;
}

#[tokio::test]
async fn test_describe_load_balancers_decodes_every_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_string_contains("Action=DescribeLoadBalancers"))
        .and(body_string_contains("Names.member.1=web"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(common::load_response_fixture("elbv2_describe_load_balancers.xml")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let response = client
        .elbv2()
        .describe_load_balancers(
            elbv2::DescribeLoadBalancersRequest::builder()
                .names(vec!["web".to_string()])
                .build()
                .unwrap(),
        )
        .await
        .expect("Request failed");

    let rendered = format!("{:?}", response.load_balancers);
    assert!(!rendered.contains("Unset"), "undecoded field in {rendered}");

    let lbs = response.load_balancers.into_option().unwrap().into_vec();
    assert_eq!(lbs.len(), 1);
    let lb = &lbs[0];
    assert_eq!(
        lb.created_time.get().map(|t| t.to_rfc3339()).as_deref(),
        Some("2016-03-25T21:26:12.920Z")
    );
    assert_eq!(lb.scheme.as_deref(), Some("internet-facing"));
    assert_eq!(
        lb.state.get().and_then(|s| s.reason.as_deref()),
        Some("Provisioning in progress")
    );
    let zone = lb.availability_zones.get().unwrap().iter().next().unwrap();
    assert_eq!(zone.outpost_id.as_deref(), Some("op-0123456789abcdef0"));
    assert_eq!(response.next_marker.as_deref(), Some("m-2"));
    assert_eq!(
        response.response_metadata.request_id.as_deref(),
        Some("6581c0ac-f39f-11e5-bb98-57195a6eb84a")
    );

    mock_server.verify().await;
}

#[tokio::test]
async fn test_register_targets_flattens_members() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_string_contains("Action=RegisterTargets"))
        .and(body_string_contains("Targets.member.1.Id=i-1"))
        .and(body_string_contains("Targets.member.1.Port=80"))
        .and(body_string_contains("Targets.member.2.Id=i-2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            "<RegisterTargetsResponse><RegisterTargetsResult/>\
             <ResponseMetadata><RequestId>r-1</RequestId></ResponseMetadata></RegisterTargetsResponse>",
        ))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let response = client
        .elbv2()
        .register_targets(
            elbv2::RegisterTargetsRequest::builder()
                .target_group_arn("arn:tg/web")
                .targets(vec![
                    elbv2::TargetDescription::new("i-1", 80),
                    elbv2::TargetDescription::new("i-2", 80),
                ])
                .build()
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.response_metadata.request_id.as_deref(), Some("r-1"));

    mock_server.verify().await;
}

#[tokio::test]
async fn test_query_error_is_mapped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string(common::load_response_fixture("elbv2_target_group_not_found.xml")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = common::client_for(&mock_server);
    let err = client
        .elbv2()
        .describe_target_health(
            elbv2::DescribeTargetHealthRequest::builder()
                .target_group_arn("arn:tg/missing")
                .build()
                .unwrap(),
        )
        .await
        .unwrap_err();

    let service = err.as_service_error().expect("service error");
    assert_eq!(service.status, 400);
    assert_eq!(service.operation, "DescribeTargetHealth");
    assert!(service.is("TargetGroupNotFound"));
    assert_eq!(
        service.request_id.as_deref(),
        Some("0b1c2d3e-f389-11e5-9192-3fff33344cfa")
    );
    let details: elbv2::TargetGroupNotFoundException = service.details().unwrap();
    assert_eq!(
        details.message.as_deref(),
        Some("Target groups 'arn:tg/missing' not found")
    );
    assert!(!err.is_retryable());
}
