//! Elastic Load Balancing v2
//!
//! Application, network and gateway load balancers over the Query protocol:
//! requests are form-encoded and responses are XML, so list fields use
//! [`Members`].

#![allow(missing_docs)]

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use stratus_core::{Optional, Paginator, Timestamp};

use super::request_builders;
use crate::client::Dispatch;
use crate::error::{Error, Result};
use crate::operation::{ResponseMetadata, operation};
use crate::paginate::paginated;
use crate::protocol::xml::Members;
use crate::protocol::{Protocol, ServiceSpec};

/// ELBv2 endpoint and protocol. `target` is the Query API version.
pub const SERVICE: ServiceSpec = ServiceSpec {
    name: "elasticloadbalancing",
    endpoint_prefix: "elasticloadbalancing",
    signing_name: "elasticloadbalancing",
    protocol: Protocol::Query,
    target: "2015-12-01",
    global_region: None,
};

// ---- shared shapes ----

/// A target to register, deregister or check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TargetDescription {
    /// Instance id, IP address, Lambda ARN or ALB ARN depending on the target type.
    pub id: String,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub port: Optional<i32>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub availability_zone: Optional<String>,
}

impl TargetDescription {
    /// A target with an explicit port.
    pub fn new(id: impl Into<String>, port: i32) -> Self {
        Self {
            id: id.into(),
            port: Optional::Present(port),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LoadBalancerState {
    /// `active`, `provisioning`, `active_impaired` or `failed`.
    pub code: Optional<String>,
    pub reason: Optional<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct AvailabilityZone {
    pub zone_name: Optional<String>,
    pub subnet_id: Optional<String>,
    pub outpost_id: Optional<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LoadBalancer {
    pub load_balancer_arn: Optional<String>,
    #[serde(rename = "DNSName")]
    pub dns_name: Optional<String>,
    pub canonical_hosted_zone_id: Optional<String>,
    pub created_time: Optional<Timestamp>,
    pub load_balancer_name: Optional<String>,
    /// `internet-facing` or `internal`.
    pub scheme: Optional<String>,
    pub vpc_id: Optional<String>,
    pub state: Optional<LoadBalancerState>,
    /// `application`, `network` or `gateway`.
    pub r#type: Optional<String>,
    pub availability_zones: Optional<Members<AvailabilityZone>>,
    pub security_groups: Optional<Members<String>>,
    pub ip_address_type: Optional<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TargetGroup {
    pub target_group_arn: Optional<String>,
    pub target_group_name: Optional<String>,
    pub protocol: Optional<String>,
    pub port: Optional<i32>,
    pub vpc_id: Optional<String>,
    pub health_check_protocol: Optional<String>,
    pub health_check_port: Optional<String>,
    pub health_check_enabled: Optional<bool>,
    pub health_check_interval_seconds: Optional<i32>,
    pub health_check_timeout_seconds: Optional<i32>,
    pub healthy_threshold_count: Optional<i32>,
    pub unhealthy_threshold_count: Optional<i32>,
    pub health_check_path: Optional<String>,
    pub load_balancer_arns: Optional<Members<String>>,
    /// `instance`, `ip`, `lambda` or `alb`.
    pub target_type: Optional<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Action {
    /// `forward`, `redirect`, `fixed-response`, `authenticate-oidc` or `authenticate-cognito`.
    pub r#type: Optional<String>,
    pub target_group_arn: Optional<String>,
    pub order: Optional<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Listener {
    pub listener_arn: Optional<String>,
    pub load_balancer_arn: Optional<String>,
    pub port: Optional<i32>,
    pub protocol: Optional<String>,
    pub ssl_policy: Optional<String>,
    pub default_actions: Optional<Members<Action>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TargetHealth {
    /// `initial`, `healthy`, `unhealthy`, `unused`, `draining` or `unavailable`.
    pub state: Optional<String>,
    pub reason: Optional<String>,
    pub description: Optional<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TargetHealthDescription {
    pub target: Optional<TargetDescription>,
    pub health_check_port: Optional<String>,
    pub target_health: Optional<TargetHealth>,
}

// ---- requests ----

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeLoadBalancersRequest {
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub load_balancer_arns: Optional<Vec<String>>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub names: Optional<Vec<String>>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub marker: Optional<String>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub page_size: Optional<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeTargetGroupsRequest {
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub load_balancer_arn: Optional<String>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub target_group_arns: Optional<Vec<String>>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub names: Optional<Vec<String>>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub marker: Optional<String>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub page_size: Optional<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeListenersRequest {
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub load_balancer_arn: Optional<String>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub listener_arns: Optional<Vec<String>>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub marker: Optional<String>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub page_size: Optional<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct DescribeTargetHealthRequest {
    pub target_group_arn: String,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub targets: Optional<Vec<TargetDescription>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct RegisterTargetsRequest {
    pub target_group_arn: String,
    pub targets: Vec<TargetDescription>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct DeregisterTargetsRequest {
    pub target_group_arn: String,
    pub targets: Vec<TargetDescription>,
}

request_builders!(
    DescribeLoadBalancersRequest => DescribeLoadBalancersRequestBuilder,
    DescribeTargetGroupsRequest => DescribeTargetGroupsRequestBuilder,
    DescribeListenersRequest => DescribeListenersRequestBuilder,
    DescribeTargetHealthRequest => DescribeTargetHealthRequestBuilder,
    RegisterTargetsRequest => RegisterTargetsRequestBuilder,
    DeregisterTargetsRequest => DeregisterTargetsRequestBuilder,
);

// ---- responses ----

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeLoadBalancersResponse {
    pub load_balancers: Optional<Members<LoadBalancer>>,
    pub next_marker: Optional<String>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeTargetGroupsResponse {
    pub target_groups: Optional<Members<TargetGroup>>,
    pub next_marker: Optional<String>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeListenersResponse {
    pub listeners: Optional<Members<Listener>>,
    pub next_marker: Optional<String>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DescribeTargetHealthResponse {
    pub target_health_descriptions: Optional<Members<TargetHealthDescription>>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RegisterTargetsResponse {
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeregisterTargetsResponse {
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

operation!(SERVICE, DescribeLoadBalancers: DescribeLoadBalancersRequest => DescribeLoadBalancersResponse);
operation!(SERVICE, DescribeTargetGroups: DescribeTargetGroupsRequest => DescribeTargetGroupsResponse);
operation!(SERVICE, DescribeListeners: DescribeListenersRequest => DescribeListenersResponse);
operation!(SERVICE, DescribeTargetHealth: DescribeTargetHealthRequest => DescribeTargetHealthResponse);
operation!(SERVICE, RegisterTargets: RegisterTargetsRequest => RegisterTargetsResponse);
operation!(SERVICE, DeregisterTargets: DeregisterTargetsRequest => DeregisterTargetsResponse);

paginated!(DescribeLoadBalancersRequest, marker => next_marker);
paginated!(DescribeTargetGroupsRequest, marker => next_marker);
paginated!(DescribeListenersRequest, marker => next_marker);

// ---- exceptions ----
//
// Query errors arrive as `<ErrorResponse><Error><Code>..<Message>..</Error>`;
// `ServiceError::details` hands these shapes the `<Error>` element.

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct LoadBalancerNotFoundException {
    pub message: Optional<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TargetGroupNotFoundException {
    pub message: Optional<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListenerNotFoundException {
    pub message: Optional<String>,
}

/// The target is not in a VPC or has the wrong type for the target group.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct InvalidTargetException {
    pub message: Optional<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct TooManyTargetsException {
    pub message: Optional<String>,
}

/// ELBv2 API resource.
#[derive(Debug, Clone)]
pub struct ElbV2 {
    dispatch: Dispatch,
}

impl ElbV2 {
    pub(crate) fn new(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }

    pub async fn describe_load_balancers(
        &self,
        request: DescribeLoadBalancersRequest,
    ) -> Result<DescribeLoadBalancersResponse> {
        self.dispatch.send(request).await
    }

    /// Every page of [`describe_load_balancers`](Self::describe_load_balancers),
    /// following `NextMarker`.
    pub fn describe_load_balancers_pages(
        &self,
        request: DescribeLoadBalancersRequest,
    ) -> Paginator<DescribeLoadBalancersResponse, Error> {
        self.dispatch.paginate(request)
    }

    pub async fn describe_target_groups(
        &self,
        request: DescribeTargetGroupsRequest,
    ) -> Result<DescribeTargetGroupsResponse> {
        self.dispatch.send(request).await
    }

    pub fn describe_target_groups_pages(
        &self,
        request: DescribeTargetGroupsRequest,
    ) -> Paginator<DescribeTargetGroupsResponse, Error> {
        self.dispatch.paginate(request)
    }

    pub async fn describe_listeners(&self, request: DescribeListenersRequest) -> Result<DescribeListenersResponse> {
        self.dispatch.send(request).await
    }

    pub fn describe_listeners_pages(
        &self,
        request: DescribeListenersRequest,
    ) -> Paginator<DescribeListenersResponse, Error> {
        self.dispatch.paginate(request)
    }

    pub async fn describe_target_health(
        &self,
        request: DescribeTargetHealthRequest,
    ) -> Result<DescribeTargetHealthResponse> {
        self.dispatch.send(request).await
    }

    pub async fn register_targets(&self, request: RegisterTargetsRequest) -> Result<RegisterTargetsResponse> {
        self.dispatch.send(request).await
    }

    pub async fn deregister_targets(&self, request: DeregisterTargetsRequest) -> Result<DeregisterTargetsResponse> {
        self.dispatch.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{query, xml};
    use pretty_assertions::assert_eq;
    use crate::services::testing::{assert_required_params, decode_every_xml_field};

    #[test]
    fn test_requests_with_required_fields_only() {
        assert_required_params(&DescribeLoadBalancersRequest::builder().build().unwrap(), &[]);
        assert_required_params(&DescribeTargetGroupsRequest::builder().build().unwrap(), &[]);
        assert_required_params(&DescribeListenersRequest::builder().build().unwrap(), &[]);
        assert_required_params(
            &DescribeTargetHealthRequest::builder().target_group_arn("arn:tg").build().unwrap(),
            &["TargetGroupArn"],
        );

        let bare_target = || TargetDescription {
            id: "i-1".to_string(),
            ..Default::default()
        };
        assert_required_params(
            &RegisterTargetsRequest::builder()
                .target_group_arn("arn:tg")
                .targets(vec![bare_target()])
                .build()
                .unwrap(),
            &["TargetGroupArn", "Targets.member.1.Id"],
        );
        assert_required_params(
            &DeregisterTargetsRequest::builder()
                .target_group_arn("arn:tg")
                .targets(vec![bare_target()])
                .build()
                .unwrap(),
            &["TargetGroupArn", "Targets.member.1.Id"],
        );
    }

    fn query_response(operation: &str, result: &str) -> String {
        format!(
            "<{operation}Response xmlns=\"http://elasticloadbalancing.amazonaws.com/doc/2015-12-01/\">\
             <{operation}Result>{result}</{operation}Result>\
             <ResponseMetadata><RequestId>r-1</RequestId></ResponseMetadata></{operation}Response>"
        )
    }

    #[test]
    fn test_responses_decode_every_field() {
        let body = query_response(
            "DescribeLoadBalancers",
            "<LoadBalancers><member>\
               <LoadBalancerArn>arn:lb/web</LoadBalancerArn>\
               <DNSName>web-1234.us-west-2.elb.amazonaws.com</DNSName>\
               <CanonicalHostedZoneId>Z2P70J7EXAMPLE</CanonicalHostedZoneId>\
               <CreatedTime>2016-03-25T21:26:12.920Z</CreatedTime>\
               <LoadBalancerName>web</LoadBalancerName>\
               <Scheme>internal</Scheme>\
               <VpcId>vpc-3ac0fb5f</VpcId>\
               <State><Code>failed</Code><Reason>Subnet exhausted</Reason></State>\
               <Type>network</Type>\
               <AvailabilityZones><member>\
                 <ZoneName>us-west-2a</ZoneName><SubnetId>subnet-1</SubnetId><OutpostId>op-1</OutpostId>\
               </member></AvailabilityZones>\
               <SecurityGroups><member>sg-1</member></SecurityGroups>\
               <IpAddressType>dualstack</IpAddressType>\
             </member></LoadBalancers>\
             <NextMarker>m-2</NextMarker>",
        );
        decode_every_xml_field::<DescribeLoadBalancersResponse>(&body, "DescribeLoadBalancers");

        let body = query_response(
            "DescribeTargetGroups",
            "<TargetGroups><member>\
               <TargetGroupArn>arn:tg/web</TargetGroupArn>\
               <TargetGroupName>web</TargetGroupName>\
               <Protocol>HTTP</Protocol>\
               <Port>80</Port>\
               <VpcId>vpc-3ac0fb5f</VpcId>\
               <HealthCheckProtocol>HTTP</HealthCheckProtocol>\
               <HealthCheckPort>traffic-port</HealthCheckPort>\
               <HealthCheckEnabled>true</HealthCheckEnabled>\
               <HealthCheckIntervalSeconds>30</HealthCheckIntervalSeconds>\
               <HealthCheckTimeoutSeconds>5</HealthCheckTimeoutSeconds>\
               <HealthyThresholdCount>5</HealthyThresholdCount>\
               <UnhealthyThresholdCount>2</UnhealthyThresholdCount>\
               <HealthCheckPath>/health</HealthCheckPath>\
               <LoadBalancerArns><member>arn:lb/web</member></LoadBalancerArns>\
               <TargetType>instance</TargetType>\
             </member></TargetGroups>\
             <NextMarker>m-2</NextMarker>",
        );
        let groups = decode_every_xml_field::<DescribeTargetGroupsResponse>(&body, "DescribeTargetGroups");
        let group = groups.target_groups.into_option().unwrap().into_vec().remove(0);
        assert_eq!(group.health_check_enabled.get(), Some(&true));
        assert_eq!(group.unhealthy_threshold_count.get(), Some(&2));

        let body = query_response(
            "DescribeListeners",
            "<Listeners><member>\
               <ListenerArn>arn:listener/web/443</ListenerArn>\
               <LoadBalancerArn>arn:lb/web</LoadBalancerArn>\
               <Port>443</Port>\
               <Protocol>HTTPS</Protocol>\
               <SslPolicy>ELBSecurityPolicy-2016-08</SslPolicy>\
               <DefaultActions><member>\
                 <Type>forward</Type><TargetGroupArn>arn:tg/web</TargetGroupArn><Order>1</Order>\
               </member></DefaultActions>\
             </member></Listeners>\
             <NextMarker>m-2</NextMarker>",
        );
        decode_every_xml_field::<DescribeListenersResponse>(&body, "DescribeListeners");

        let body = query_response(
            "DescribeTargetHealth",
            "<TargetHealthDescriptions><member>\
               <Target><Id>i-1</Id><Port>80</Port><AvailabilityZone>all</AvailabilityZone></Target>\
               <HealthCheckPort>80</HealthCheckPort>\
               <TargetHealth>\
                 <State>unhealthy</State>\
                 <Reason>Target.Timeout</Reason>\
                 <Description>Request timed out</Description>\
               </TargetHealth>\
             </member></TargetHealthDescriptions>",
        );
        decode_every_xml_field::<DescribeTargetHealthResponse>(&body, "DescribeTargetHealth");

        decode_every_xml_field::<RegisterTargetsResponse>(&query_response("RegisterTargets", ""), "RegisterTargets");
        decode_every_xml_field::<DeregisterTargetsResponse>(
            &query_response("DeregisterTargets", ""),
            "DeregisterTargets",
        );
    }

    #[test]
    fn test_exceptions_decode_message() {
        let error_body = |code: &str| {
            format!(
                "<ErrorResponse><Error><Type>Sender</Type><Code>{code}</Code>\
                 <Message>details</Message></Error><RequestId>r-1</RequestId></ErrorResponse>"
            )
        };
        let service_error = |code: &str| {
            Error::from_response(
                "elasticloadbalancing",
                "RegisterTargets",
                400,
                &http::HeaderMap::new(),
                error_body(code).as_bytes(),
            )
            .as_service_error()
            .cloned()
            .unwrap()
        };

        let details: LoadBalancerNotFoundException = service_error("LoadBalancerNotFound").details().unwrap();
        assert_eq!(details.message.as_deref(), Some("details"));
        let details: TargetGroupNotFoundException = service_error("TargetGroupNotFound").details().unwrap();
        assert_eq!(details.message.as_deref(), Some("details"));
        let details: ListenerNotFoundException = service_error("ListenerNotFound").details().unwrap();
        assert_eq!(details.message.as_deref(), Some("details"));
        let details: InvalidTargetException = service_error("InvalidTarget").details().unwrap();
        assert_eq!(details.message.as_deref(), Some("details"));
        let details: TooManyTargetsException = service_error("TooManyTargets").details().unwrap();
        assert_eq!(details.message.as_deref(), Some("details"));
    }

    #[test]
    fn test_register_targets_flatten() {
        let request = RegisterTargetsRequest::builder()
            .target_group_arn("arn:tg")
            .targets(vec![TargetDescription::new("i-1", 80), TargetDescription::new("i-2", 8080)])
            .build()
            .unwrap();
        let params = query::flatten(&serde_json::to_value(&request).unwrap());
        assert_eq!(
            params,
            vec![
                ("TargetGroupArn".to_string(), "arn:tg".to_string()),
                ("Targets.member.1.Id".to_string(), "i-1".to_string()),
                ("Targets.member.1.Port".to_string(), "80".to_string()),
                ("Targets.member.2.Id".to_string(), "i-2".to_string()),
                ("Targets.member.2.Port".to_string(), "8080".to_string()),
            ]
        );
    }

    #[test]
    fn test_describe_load_balancers_form_body() {
        let request = DescribeLoadBalancersRequest::builder()
            .names(vec!["web".to_string()])
            .page_size(10)
            .build()
            .unwrap();
        assert!(request.marker.is_unset());
        let body = query::encode_body(
            "DescribeLoadBalancers",
            SERVICE.target,
            &serde_json::to_value(&request).unwrap(),
        );
        assert_eq!(
            body,
            "Action=DescribeLoadBalancers&Version=2015-12-01&Names.member.1=web&PageSize=10"
        );
    }

    #[test]
    fn test_describe_load_balancers_xml() {
        let body = r#"<DescribeLoadBalancersResponse xmlns="http://elasticloadbalancing.amazonaws.com/doc/2015-12-01/">
  <DescribeLoadBalancersResult>
    <LoadBalancers>
      <member>
        <LoadBalancerArn>arn:aws:elasticloadbalancing:us-west-2:123456789012:loadbalancer/app/web/50dc6c495c0c9188</LoadBalancerArn>
        <DNSName>web-1234.us-west-2.elb.amazonaws.com</DNSName>
        <CanonicalHostedZoneId>Z2P70J7EXAMPLE</CanonicalHostedZoneId>
        <CreatedTime>2016-03-25T21:26:12.920Z</CreatedTime>
        <LoadBalancerName>web</LoadBalancerName>
        <Scheme>internet-facing</Scheme>
        <VpcId>vpc-3ac0fb5f</VpcId>
        <State><Code>active</Code></State>
        <Type>application</Type>
        <AvailabilityZones>
          <member><ZoneName>us-west-2a</ZoneName><SubnetId>subnet-8360a9e7</SubnetId></member>
          <member><ZoneName>us-west-2b</ZoneName><SubnetId>subnet-b7d581c0</SubnetId></member>
        </AvailabilityZones>
        <SecurityGroups><member>sg-5943793c</member></SecurityGroups>
        <IpAddressType>ipv4</IpAddressType>
      </member>
    </LoadBalancers>
    <NextMarker>m-2</NextMarker>
  </DescribeLoadBalancersResult>
  <ResponseMetadata><RequestId>6581c0ac-f39f-11e5-bb98-57195a6eb84a</RequestId></ResponseMetadata>
</DescribeLoadBalancersResponse>"#;

        let response: DescribeLoadBalancersResponse =
            xml::decode_result(body, "DescribeLoadBalancers").unwrap();
        let lbs = response.load_balancers.into_option().unwrap().into_vec();
        assert_eq!(lbs.len(), 1);
        let lb = &lbs[0];
        assert_eq!(lb.dns_name.as_deref(), Some("web-1234.us-west-2.elb.amazonaws.com"));
        assert_eq!(lb.r#type.as_deref(), Some("application"));
        assert_eq!(
            lb.state.get().and_then(|s| s.code.as_deref()),
            Some("active")
        );
        assert_eq!(
            lb.created_time.get().map(|t| t.to_rfc3339()).as_deref(),
            Some("2016-03-25T21:26:12.920Z")
        );
        assert_eq!(lb.availability_zones.get().map(Members::len), Some(2));
        assert_eq!(
            lb.security_groups.get().map(|g| g.iter().cloned().collect::<Vec<_>>()),
            Some(vec!["sg-5943793c".to_string()])
        );
        assert_eq!(response.next_marker.as_deref(), Some("m-2"));
    }

    #[test]
    fn test_empty_result_decodes_default() {
        let body = "<RegisterTargetsResponse><RegisterTargetsResult/>\
                    <ResponseMetadata><RequestId>r</RequestId></ResponseMetadata></RegisterTargetsResponse>";
        let response: RegisterTargetsResponse = xml::decode_result(body, "RegisterTargets").unwrap();
        assert_eq!(response, RegisterTargetsResponse::default());
    }

    #[test]
    fn test_xml_error_details() {
        let body = br#"<ErrorResponse xmlns="http://elasticloadbalancing.amazonaws.com/doc/2015-12-01/">
  <Error><Type>Sender</Type><Code>TargetGroupNotFound</Code><Message>One or more target groups not found</Message></Error>
  <RequestId>req-9</RequestId>
</ErrorResponse>"#;
        let err = Error::from_response("elasticloadbalancing", "DescribeTargetHealth", 400, &http::HeaderMap::new(), body);
        let service = err.as_service_error().unwrap();
        assert!(service.is("TargetGroupNotFound"));
        assert_eq!(service.request_id.as_deref(), Some("req-9"));
        let details: TargetGroupNotFoundException = service.details().unwrap();
        assert_eq!(details.message.as_deref(), Some("One or more target groups not found"));
    }
}
