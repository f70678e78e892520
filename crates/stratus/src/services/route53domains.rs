//! Amazon Route 53 Domains
//!
//! Domain registration. The API is only served from `us-east-1`, whatever
//! region the client is configured for.

#![allow(missing_docs)]

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use stratus_core::{Optional, Paginator, Timestamp};

use super::request_builders;
use crate::client::Dispatch;
use crate::error::{Error, Result};
use crate::operation::{ResponseMetadata, operation};
use crate::paginate::paginated;
use crate::protocol::{Protocol, ServiceSpec};

/// Route 53 Domains endpoint and protocol.
pub const SERVICE: ServiceSpec = ServiceSpec {
    name: "route53domains",
    endpoint_prefix: "route53domains",
    signing_name: "route53domains",
    protocol: Protocol::AwsJson1_1,
    target: "Route53Domains_v20140515",
    global_region: Some("us-east-1"),
};

// ---- shared shapes ----

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ExtraParam {
    pub name: String,
    pub value: String,
}

/// Registrant, admin, tech or billing contact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ContactDetail {
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub first_name: Optional<String>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub last_name: Optional<String>,
    /// `PERSON`, `COMPANY`, `ASSOCIATION`, `PUBLIC_BODY` or `RESELLER`.
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub contact_type: Optional<String>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub organization_name: Optional<String>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub address_line1: Optional<String>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub address_line2: Optional<String>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub city: Optional<String>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub state: Optional<String>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub country_code: Optional<String>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub zip_code: Optional<String>,
    /// `+[country dialing code].[number]`, e.g. `+1.1234567890`.
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub phone_number: Optional<String>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub email: Optional<String>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub fax: Optional<String>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub extra_params: Optional<Vec<ExtraParam>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Nameserver {
    pub name: Optional<String>,
    pub glue_ips: Optional<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DomainSummary {
    pub domain_name: Optional<String>,
    pub auto_renew: Optional<bool>,
    pub transfer_lock: Optional<bool>,
    pub expiry: Optional<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct OperationSummary {
    pub operation_id: Optional<String>,
    /// `SUBMITTED`, `IN_PROGRESS`, `ERROR`, `SUCCESSFUL` or `FAILED`.
    pub status: Optional<String>,
    pub r#type: Optional<String>,
    pub submitted_date: Optional<Timestamp>,
    pub domain_name: Optional<String>,
    pub message: Optional<String>,
    pub status_flag: Optional<String>,
    pub last_updated_date: Optional<Timestamp>,
}

// ---- requests ----

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct CheckDomainAvailabilityRequest {
    pub domain_name: String,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub idn_lang_code: Optional<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct GetDomainDetailRequest {
    pub domain_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct ListDomainsRequest {
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub marker: Optional<String>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub max_items: Optional<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct ListOperationsRequest {
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub submitted_since: Optional<Timestamp>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub marker: Optional<String>,
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub max_items: Optional<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct GetOperationDetailRequest {
    pub operation_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct RegisterDomainRequest {
    pub domain_name: String,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub idn_lang_code: Optional<String>,
    pub duration_in_years: i32,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub auto_renew: Optional<bool>,
    pub admin_contact: ContactDetail,
    pub registrant_contact: ContactDetail,
    pub tech_contact: ContactDetail,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub privacy_protect_admin_contact: Optional<bool>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub privacy_protect_registrant_contact: Optional<bool>,
    #[builder(default)]
    #[serde(skip_serializing_if = "Optional::is_unset")]
    pub privacy_protect_tech_contact: Optional<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct EnableDomainAutoRenewRequest {
    pub domain_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Builder)]
#[builder(setter(into), build_fn(error = "crate::Error"))]
#[serde(rename_all = "PascalCase")]
pub struct DisableDomainAutoRenewRequest {
    pub domain_name: String,
}

request_builders!(
    CheckDomainAvailabilityRequest => CheckDomainAvailabilityRequestBuilder,
    GetDomainDetailRequest => GetDomainDetailRequestBuilder,
    ListDomainsRequest => ListDomainsRequestBuilder,
    ListOperationsRequest => ListOperationsRequestBuilder,
    GetOperationDetailRequest => GetOperationDetailRequestBuilder,
    RegisterDomainRequest => RegisterDomainRequestBuilder,
    EnableDomainAutoRenewRequest => EnableDomainAutoRenewRequestBuilder,
    DisableDomainAutoRenewRequest => DisableDomainAutoRenewRequestBuilder,
);

// ---- responses ----

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CheckDomainAvailabilityResponse {
    /// `AVAILABLE`, `AVAILABLE_RESERVED`, `AVAILABLE_PREORDER`, `UNAVAILABLE`,
    /// `UNAVAILABLE_PREMIUM`, `UNAVAILABLE_RESTRICTED`, `RESERVED`, `DONT_KNOW`
    /// or `INVALID_NAME_FOR_TLD`.
    pub availability: Optional<String>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetDomainDetailResponse {
    pub domain_name: Optional<String>,
    pub nameservers: Optional<Vec<Nameserver>>,
    pub auto_renew: Optional<bool>,
    pub admin_contact: Optional<ContactDetail>,
    pub registrant_contact: Optional<ContactDetail>,
    pub tech_contact: Optional<ContactDetail>,
    pub admin_privacy: Optional<bool>,
    pub registrant_privacy: Optional<bool>,
    pub tech_privacy: Optional<bool>,
    pub registrar_name: Optional<String>,
    pub who_is_server: Optional<String>,
    pub registrar_url: Optional<String>,
    pub abuse_contact_email: Optional<String>,
    pub abuse_contact_phone: Optional<String>,
    pub creation_date: Optional<Timestamp>,
    pub updated_date: Optional<Timestamp>,
    pub expiration_date: Optional<Timestamp>,
    pub status_list: Optional<Vec<String>>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListDomainsResponse {
    pub domains: Optional<Vec<DomainSummary>>,
    pub next_page_marker: Optional<String>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ListOperationsResponse {
    pub operations: Optional<Vec<OperationSummary>>,
    pub next_page_marker: Optional<String>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct GetOperationDetailResponse {
    pub operation_id: Optional<String>,
    pub status: Optional<String>,
    pub message: Optional<String>,
    pub domain_name: Optional<String>,
    pub r#type: Optional<String>,
    pub submitted_date: Optional<Timestamp>,
    pub last_updated_date: Optional<Timestamp>,
    pub status_flag: Optional<String>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct RegisterDomainResponse {
    pub operation_id: Optional<String>,
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EnableDomainAutoRenewResponse {
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DisableDomainAutoRenewResponse {
    #[serde(skip)]
    pub response_metadata: ResponseMetadata,
}

operation!(SERVICE, CheckDomainAvailability: CheckDomainAvailabilityRequest => CheckDomainAvailabilityResponse);
operation!(SERVICE, GetDomainDetail: GetDomainDetailRequest => GetDomainDetailResponse);
operation!(SERVICE, ListDomains: ListDomainsRequest => ListDomainsResponse);
operation!(SERVICE, ListOperations: ListOperationsRequest => ListOperationsResponse);
operation!(SERVICE, GetOperationDetail: GetOperationDetailRequest => GetOperationDetailResponse);
operation!(SERVICE, RegisterDomain: RegisterDomainRequest => RegisterDomainResponse);
operation!(SERVICE, EnableDomainAutoRenew: EnableDomainAutoRenewRequest => EnableDomainAutoRenewResponse);
operation!(SERVICE, DisableDomainAutoRenew: DisableDomainAutoRenewRequest => DisableDomainAutoRenewResponse);

paginated!(ListDomainsRequest, marker => next_page_marker);
paginated!(ListOperationsRequest, marker => next_page_marker);

// ---- exceptions ----

/// The requested item is not acceptable, e.g. an unsupported TLD.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct InvalidInput {
    #[serde(alias = "Message")]
    pub message: Optional<String>,
}

/// The top-level domain does not support this operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UnsupportedTLD {
    #[serde(alias = "Message")]
    pub message: Optional<String>,
}

/// The domain is already registered or in a pending operation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DuplicateRequest {
    #[serde(alias = "Message")]
    pub message: Optional<String>,
    #[serde(rename = "requestId")]
    pub request_id: Optional<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DomainLimitExceeded {
    #[serde(alias = "Message")]
    pub message: Optional<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct OperationLimitExceeded {
    #[serde(alias = "Message")]
    pub message: Optional<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TLDRulesViolation {
    #[serde(alias = "Message")]
    pub message: Optional<String>,
}

/// Route 53 Domains API resource.
#[derive(Debug, Clone)]
pub struct Route53Domains {
    dispatch: Dispatch,
}

impl Route53Domains {
    pub(crate) fn new(dispatch: Dispatch) -> Self {
        Self { dispatch }
    }

    pub async fn check_domain_availability(
        &self,
        request: CheckDomainAvailabilityRequest,
    ) -> Result<CheckDomainAvailabilityResponse> {
        self.dispatch.send(request).await
    }

    pub async fn get_domain_detail(&self, request: GetDomainDetailRequest) -> Result<GetDomainDetailResponse> {
        self.dispatch.send(request).await
    }

    pub async fn list_domains(&self, request: ListDomainsRequest) -> Result<ListDomainsResponse> {
        self.dispatch.send(request).await
    }

    /// Every page of [`list_domains`](Self::list_domains), following `NextPageMarker`.
    pub fn list_domains_pages(&self, request: ListDomainsRequest) -> Paginator<ListDomainsResponse, Error> {
        self.dispatch.paginate(request)
    }

    pub async fn list_operations(&self, request: ListOperationsRequest) -> Result<ListOperationsResponse> {
        self.dispatch.send(request).await
    }

    pub fn list_operations_pages(
        &self,
        request: ListOperationsRequest,
    ) -> Paginator<ListOperationsResponse, Error> {
        self.dispatch.paginate(request)
    }

    pub async fn get_operation_detail(
        &self,
        request: GetOperationDetailRequest,
    ) -> Result<GetOperationDetailResponse> {
        self.dispatch.send(request).await
    }

    /// Register a domain. Registration is asynchronous; poll the returned
    /// operation id with [`get_operation_detail`](Self::get_operation_detail).
    pub async fn register_domain(&self, request: RegisterDomainRequest) -> Result<RegisterDomainResponse> {
        self.dispatch.send(request).await
    }

    pub async fn enable_domain_auto_renew(
        &self,
        request: EnableDomainAutoRenewRequest,
    ) -> Result<EnableDomainAutoRenewResponse> {
        self.dispatch.send(request).await
    }

    pub async fn disable_domain_auto_renew(
        &self,
        request: DisableDomainAutoRenewRequest,
    ) -> Result<DisableDomainAutoRenewResponse> {
        self.dispatch.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Region;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use crate::services::testing::{assert_required_only, decode_every_field};

    #[test]
    fn test_requests_with_required_fields_only() {
        assert_required_only(
            &CheckDomainAvailabilityRequest::builder().domain_name("example.com").build().unwrap(),
            &["DomainName"],
        );
        assert_required_only(
            &GetDomainDetailRequest::builder().domain_name("example.com").build().unwrap(),
            &["DomainName"],
        );
        assert_required_only(&ListDomainsRequest::builder().build().unwrap(), &[]);
        assert_required_only(&ListOperationsRequest::builder().build().unwrap(), &[]);
        assert_required_only(
            &GetOperationDetailRequest::builder().operation_id("op-1").build().unwrap(),
            &["OperationId"],
        );
        assert_required_only(
            &RegisterDomainRequest::builder()
                .domain_name("example.com")
                .duration_in_years(1)
                .admin_contact(ContactDetail::default())
                .registrant_contact(ContactDetail::default())
                .tech_contact(ContactDetail::default())
                .build()
                .unwrap(),
            &["AdminContact", "DomainName", "DurationInYears", "RegistrantContact", "TechContact"],
        );
        assert_required_only(
            &EnableDomainAutoRenewRequest::builder().domain_name("example.com").build().unwrap(),
            &["DomainName"],
        );
        assert_required_only(
            &DisableDomainAutoRenewRequest::builder().domain_name("example.com").build().unwrap(),
            &["DomainName"],
        );
    }

    fn full_contact() -> serde_json::Value {
        json!({
            "FirstName": "Ada",
            "LastName": "Lovelace",
            "ContactType": "PERSON",
            "OrganizationName": "Analytical Engines",
            "AddressLine1": "1 Main St",
            "AddressLine2": "Suite 2",
            "City": "London",
            "State": "LDN",
            "CountryCode": "GB",
            "ZipCode": "N1 9GU",
            "PhoneNumber": "+44.2071234567",
            "Email": "ada@example.com",
            "Fax": "+44.2071234568",
            "ExtraParams": [{"Name": "UK_CONTACT_TYPE", "Value": "IND"}]
        })
    }

    fn full_operation(fields: &[(&str, serde_json::Value)]) -> serde_json::Value {
        let mut operation = json!({
            "OperationId": "op-1",
            "Status": "SUCCESSFUL",
            "Type": "REGISTER_DOMAIN",
            "SubmittedDate": 1700000000,
            "DomainName": "example.com",
            "Message": "done",
            "StatusFlag": "PENDING_ACCEPTANCE",
            "LastUpdatedDate": 1700000600
        });
        for (key, value) in fields {
            operation[*key] = value.clone();
        }
        operation
    }

    #[test]
    fn test_responses_decode_every_field() {
        decode_every_field::<CheckDomainAvailabilityResponse>(json!({"Availability": "AVAILABLE"}));

        let detail = decode_every_field::<GetDomainDetailResponse>(json!({
            "DomainName": "example.com",
            "Nameservers": [{"Name": "ns1.example.com", "GlueIps": ["192.0.2.1"]}],
            "AutoRenew": true,
            "AdminContact": full_contact(),
            "RegistrantContact": full_contact(),
            "TechContact": full_contact(),
            "AdminPrivacy": true,
            "RegistrantPrivacy": true,
            "TechPrivacy": false,
            "RegistrarName": "Amazon Registrar, Inc.",
            "WhoIsServer": "whois.registrar.amazon.com",
            "RegistrarUrl": "http://registrar.amazon.com",
            "AbuseContactEmail": "abuse@registrar.amazon.com",
            "AbuseContactPhone": "+1.2062661000",
            "CreationDate": 1700000000,
            "UpdatedDate": 1700000100,
            "ExpirationDate": 1731622400,
            "StatusList": ["clientTransferProhibited"]
        }));
        let extra = detail.admin_contact.get().and_then(|c| c.extra_params.get()).unwrap();
        assert_eq!(extra[0].name, "UK_CONTACT_TYPE");

        decode_every_field::<ListDomainsResponse>(json!({
            "Domains": [{"DomainName": "example.com", "AutoRenew": true, "TransferLock": false, "Expiry": 1731622400}],
            "NextPageMarker": "m-2"
        }));
        decode_every_field::<ListOperationsResponse>(json!({
            "Operations": [full_operation(&[])],
            "NextPageMarker": "m-2"
        }));
        decode_every_field::<GetOperationDetailResponse>(full_operation(&[("Status", json!("IN_PROGRESS"))]));
        decode_every_field::<RegisterDomainResponse>(json!({"OperationId": "op-1"}));
        decode_every_field::<EnableDomainAutoRenewResponse>(json!({}));
        decode_every_field::<DisableDomainAutoRenewResponse>(json!({}));

        decode_every_field::<InvalidInput>(json!({"message": "m"}));
        decode_every_field::<UnsupportedTLD>(json!({"message": "m"}));
        decode_every_field::<DuplicateRequest>(json!({"message": "m", "requestId": "r-1"}));
        decode_every_field::<DomainLimitExceeded>(json!({"message": "m"}));
        decode_every_field::<OperationLimitExceeded>(json!({"message": "m"}));
        decode_every_field::<TLDRulesViolation>(json!({"Message": "m"}));
    }

    fn contact() -> ContactDetail {
        ContactDetail {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            contact_type: "PERSON".into(),
            email: "ada@example.com".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_pinned_to_us_east_1() {
        let region = Region::from("eu-central-1");
        assert_eq!(SERVICE.signing_region(&region).as_str(), "us-east-1");
        assert_eq!(
            SERVICE.endpoint(&region),
            "https://route53domains.us-east-1.amazonaws.com"
        );
    }

    #[test]
    fn test_register_domain_serializes_contacts() {
        let request = RegisterDomainRequest::builder()
            .domain_name("example.com")
            .duration_in_years(1)
            .admin_contact(contact())
            .registrant_contact(contact())
            .tech_contact(contact())
            .build()
            .unwrap();

        assert!(request.auto_renew.is_unset());
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["DurationInYears"], json!(1));
        assert_eq!(
            value["AdminContact"],
            json!({"FirstName": "Ada", "LastName": "Lovelace", "ContactType": "PERSON", "Email": "ada@example.com"})
        );
        assert!(value.get("AutoRenew").is_none());
    }

    #[test]
    fn test_list_domains_response() {
        let response: ListDomainsResponse = serde_json::from_value(json!({
            "Domains": [{"DomainName": "example.com", "AutoRenew": true, "TransferLock": false, "Expiry": 1735689600}],
            "NextPageMarker": "m-2"
        }))
        .unwrap();
        let domains = response.domains.into_option().unwrap();
        assert_eq!(domains[0].domain_name.as_deref(), Some("example.com"));
        assert_eq!(domains[0].auto_renew, Optional::Present(true));
        assert_eq!(domains[0].transfer_lock, Optional::Present(false));
        assert_eq!(domains[0].expiry.get().map(|t| t.to_rfc3339()).as_deref(), Some("2025-01-01T00:00:00Z"));
        assert_eq!(response.next_page_marker.as_deref(), Some("m-2"));
    }
}
