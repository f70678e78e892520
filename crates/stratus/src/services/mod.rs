//! Service bindings
//!
//! Each module declares the service's [`ServiceSpec`](crate::protocol::ServiceSpec),
//! its request and response shapes, the passive exception shapes it can return,
//! and a resource type reachable from [`Client`](crate::Client).

pub mod costexplorer;
pub mod ecr;
pub mod elbv2;
pub mod glue;
pub mod route53domains;
pub mod secretsmanager;
pub mod sqs;

/// Adds `builder()` to request shapes.
macro_rules! request_builders {
    ($($request:ident => $builder:ident),+ $(,)?) => {
        $(
            impl $request {
                /// Start building this request.
                pub fn builder() -> $builder {
                    $builder::default()
                }
            }
        )+
    };
}

pub(crate) use request_builders;

/// Shape checks shared by the service test modules.
#[cfg(test)]
pub(crate) mod testing {
    use serde::Serialize;
    use serde::de::DeserializeOwned;
    use std::any::type_name;
    use std::fmt::Debug;

    use crate::protocol::{json, query, xml};

    fn sorted(keys: impl IntoIterator<Item = String>) -> Vec<String> {
        let mut keys: Vec<String> = keys.into_iter().collect();
        keys.sort();
        keys
    }

    fn assert_no_optional_set<T: Debug>(request: &T) {
        let rendered = format!("{request:?}");
        assert!(
            !rendered.contains("Present(") && !rendered.contains("Null"),
            "{} has an optional field set: {rendered}",
            type_name::<T>()
        );
    }

    fn assert_nothing_unset<T: Debug>(decoded: &T) {
        let rendered = format!("{decoded:?}");
        assert!(
            !rendered.contains("Unset") && !rendered.contains("Null"),
            "{} left a declared field undecoded: {rendered}",
            type_name::<T>()
        );
    }

    /// A JSON request built from required fields only: every optional field is
    /// `Unset` and the payload carries exactly `keys`.
    pub(crate) fn assert_required_only<T: Serialize + Debug>(request: &T, keys: &[&str]) {
        assert_no_optional_set(request);
        let value = serde_json::to_value(request).unwrap();
        let actual = sorted(value.as_object().into_iter().flat_map(|map| map.keys().cloned()));
        assert_eq!(
            actual,
            sorted(keys.iter().map(|k| k.to_string())),
            "{}",
            type_name::<T>()
        );
    }

    /// The Query counterpart of [`assert_required_only`], over flattened form
    /// parameter names.
    pub(crate) fn assert_required_params<T: Serialize + Debug>(request: &T, params: &[&str]) {
        assert_no_optional_set(request);
        let flat = query::flatten(&serde_json::to_value(request).unwrap());
        assert_eq!(
            sorted(flat.into_iter().map(|(name, _)| name)),
            sorted(params.iter().map(|p| p.to_string())),
            "{}",
            type_name::<T>()
        );
    }

    /// Decode a JSON body that sets every declared field, nested ones included,
    /// and check each one came through.
    pub(crate) fn decode_every_field<T: DeserializeOwned + Default + Debug>(payload: serde_json::Value) -> T {
        let decoded: T = json::decode_body(payload.to_string().as_bytes())
            .unwrap_or_else(|e| panic!("{}: {e}", type_name::<T>()));
        assert_nothing_unset(&decoded);
        decoded
    }

    /// [`decode_every_field`] for a Query response body.
    pub(crate) fn decode_every_xml_field<T: DeserializeOwned + Default + Debug>(body: &str, operation: &str) -> T {
        let decoded: T =
            xml::decode_result(body, operation).unwrap_or_else(|e| panic!("{}: {e}", type_name::<T>()));
        assert_nothing_unset(&decoded);
        decoded
    }
}
