//! AWS Signature Version 4.
//!
//! Signs a request in four steps: canonical request, string to sign, derived
//! signing key, and the final `Authorization` header.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use url::Url;

type HmacSha256 = Hmac<Sha256>;

const ALGORITHM: &str = "AWS4-HMAC-SHA256";

/// Everything except RFC 3986 unreserved characters.
const URI_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Signs requests for one service in one region.
#[derive(Debug, Clone)]
pub struct SigV4Signer<'a> {
    access_key_id: &'a str,
    secret_access_key: &'a str,
    session_token: Option<&'a str>,
    region: &'a str,
    service: &'a str,
}

impl<'a> SigV4Signer<'a> {
    /// A signer for `service` in `region`.
    pub fn new(
        access_key_id: &'a str,
        secret_access_key: &'a str,
        session_token: Option<&'a str>,
        region: &'a str,
        service: &'a str,
    ) -> Self {
        Self {
            access_key_id,
            secret_access_key,
            session_token,
            region,
            service,
        }
    }

    /// Add `x-amz-date`, `x-amz-security-token` (with a session token) and
    /// `authorization` to `headers`.
    ///
    /// `headers` must already hold `host` and every other header to be signed.
    /// Names must be lowercase.
    pub fn sign(
        &self,
        method: &str,
        url: &Url,
        headers: &mut BTreeMap<String, String>,
        body: &[u8],
        now: DateTime<Utc>,
    ) {
        let date_stamp = now.format("%Y%m%d").to_string();
        let amz_date = now.format("%Y%m%dT%H%M%SZ").to_string();

        headers.insert("x-amz-date".to_string(), amz_date.clone());
        if let Some(token) = self.session_token {
            headers.insert("x-amz-security-token".to_string(), token.to_string());
        }

        let signed_headers = headers.keys().cloned().collect::<Vec<_>>().join(";");
        let canonical_headers: String = headers
            .iter()
            .map(|(k, v)| format!("{k}:{}\n", v.trim()))
            .collect();

        let canonical_request = format!(
            "{method}\n{}\n{}\n{canonical_headers}\n{signed_headers}\n{}",
            canonical_path(url),
            canonical_query(url),
            sha256_hex(body)
        );

        let scope = format!("{date_stamp}/{}/{}/aws4_request", self.region, self.service);
        let string_to_sign = format!(
            "{ALGORITHM}\n{amz_date}\n{scope}\n{}",
            sha256_hex(canonical_request.as_bytes())
        );

        let signature = hex::encode(hmac_sha256(
            &self.signing_key(&date_stamp),
            string_to_sign.as_bytes(),
        ));

        headers.insert(
            "authorization".to_string(),
            format!(
                "{ALGORITHM} Credential={}/{scope}, SignedHeaders={signed_headers}, Signature={signature}",
                self.access_key_id
            ),
        );
    }

    fn signing_key(&self, date_stamp: &str) -> Vec<u8> {
        let k_date = hmac_sha256(
            format!("AWS4{}", self.secret_access_key).as_bytes(),
            date_stamp.as_bytes(),
        );
        let k_region = hmac_sha256(&k_date, self.region.as_bytes());
        let k_service = hmac_sha256(&k_region, self.service.as_bytes());
        hmac_sha256(&k_service, b"aws4_request")
    }
}

/// Percent-encode everything except unreserved characters.
pub fn uri_encode(input: &str) -> String {
    utf8_percent_encode(input, URI_ENCODE_SET).to_string()
}

/// Hex SHA-256 of `data`.
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any length");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

fn canonical_path(url: &Url) -> String {
    let path = url.path();
    if path.is_empty() {
        return "/".to_string();
    }
    path.split('/')
        .map(|segment| {
            let decoded = percent_encoding::percent_decode_str(segment).decode_utf8_lossy();
            uri_encode(&decoded)
        })
        .collect::<Vec<_>>()
        .join("/")
}

fn canonical_query(url: &Url) -> String {
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (uri_encode(&k), uri_encode(&v)))
        .collect();
    pairs.sort();
    pairs
        .into_iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// `host[:port]` as sent in the `Host` header.
pub fn host_header(url: &Url) -> String {
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{host}:{port}"),
        (Some(host), None) => host.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const SECRET: &str = "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY";

    fn at_test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2015, 8, 30, 12, 36, 0).unwrap()
    }

    #[test]
    fn test_get_vanilla_signature() {
        let signer = SigV4Signer::new("AKIDEXAMPLE", SECRET, None, "us-east-1", "service");
        let url = Url::parse("https://example.amazonaws.com/").unwrap();
        let mut headers = BTreeMap::from([("host".to_string(), "example.amazonaws.com".to_string())]);

        signer.sign("GET", &url, &mut headers, b"", at_test_time());

        assert_eq!(headers["x-amz-date"], "20150830T123600Z");
        assert_eq!(
            headers["authorization"],
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/service/aws4_request, \
             SignedHeaders=host;x-amz-date, \
             Signature=5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"
        );
    }

    #[test]
    fn test_session_token_is_signed() {
        let signer = SigV4Signer::new("AKIDEXAMPLE", SECRET, Some("token"), "eu-west-1", "sqs");
        let url = Url::parse("https://sqs.eu-west-1.amazonaws.com/").unwrap();
        let mut headers = BTreeMap::from([("host".to_string(), "sqs.eu-west-1.amazonaws.com".to_string())]);

        signer.sign("POST", &url, &mut headers, b"{}", at_test_time());

        assert_eq!(headers["x-amz-security-token"], "token");
        assert!(headers["authorization"].contains("SignedHeaders=host;x-amz-date;x-amz-security-token"));
        assert!(headers["authorization"].contains("/eu-west-1/sqs/aws4_request"));
    }

    #[test]
    fn test_uri_encode() {
        assert_eq!(uri_encode("abcABC123-_.~"), "abcABC123-_.~");
        assert_eq!(uri_encode("a b/c=d"), "a%20b%2Fc%3Dd");
    }

    #[test]
    fn test_sha256_empty() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_canonical_query_sorted() {
        let url = Url::parse("https://h/?b=2&a=1&a=0").unwrap();
        assert_eq!(canonical_query(&url), "a=0&a=1&b=2");
    }

    #[test]
    fn test_host_header_keeps_explicit_port() {
        assert_eq!(host_header(&Url::parse("http://127.0.0.1:4566/").unwrap()), "127.0.0.1:4566");
        assert_eq!(host_header(&Url::parse("https://sqs.us-east-1.amazonaws.com").unwrap()), "sqs.us-east-1.amazonaws.com");
    }
}
