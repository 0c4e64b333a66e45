//! Metric name derivation.
//!
//! Upstream keys are dotted (`proxy.process.cache.bytes_used`); exposition
//! names may only contain `[a-zA-Z0-9:_]`. The mapping is a public naming
//! contract for dashboards and alerts, so it must never change shape.

/// Prefix shared by every exported metric.
pub const NAMESPACE: &str = "trafficserver";

/// Replace each character outside `[A-Za-z0-9:_]` with `_` and lower-case
/// the result.
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == ':' || c == '_' {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Full metric name for an upstream key: `<namespace>_<sanitized key>`.
pub fn metric_name(namespace: &str, key: &str) -> String {
    sanitize(&format!("{namespace}_{key}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::STATS;

    fn is_valid_name(name: &str) -> bool {
        !name.is_empty()
            && name
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b':' || b == b'_')
    }

    #[test]
    fn dotted_key_maps_to_underscores() {
        assert_eq!(
            metric_name(NAMESPACE, "proxy.process.cache.bytes_used"),
            "trafficserver_proxy_process_cache_bytes_used"
        );
    }

    #[test]
    fn upper_case_is_folded() {
        assert_eq!(
            metric_name(NAMESPACE, "proxy.process.http.response_document_size_1K"),
            "trafficserver_proxy_process_http_response_document_size_1k"
        );
    }

    #[test]
    fn colons_and_underscores_survive() {
        assert_eq!(sanitize("a:b_c"), "a:b_c");
    }

    #[test]
    fn each_invalid_char_becomes_one_underscore() {
        assert_eq!(sanitize("a..b"), "a__b");
        assert_eq!(sanitize("x-y z/é"), "x_y_z__");
    }

    #[test]
    fn mapping_is_stable() {
        for field in STATS {
            assert_eq!(
                metric_name(NAMESPACE, field.key),
                metric_name(NAMESPACE, field.key)
            );
        }
    }

    #[test]
    fn every_schema_name_is_well_formed() {
        for field in STATS {
            let name = metric_name(NAMESPACE, field.key);
            assert!(name.starts_with("trafficserver_"), "{name}");
            assert!(is_valid_name(&name), "{name}");
        }
    }

    #[test]
    fn arbitrary_input_stays_in_alphabet() {
        for raw in ["", "UPPER.lower", "plugin.lua.global.gc_bytes", "💥💥", "a\tb\nc"] {
            let name = metric_name(NAMESPACE, raw);
            assert!(name.starts_with("trafficserver_"));
            assert!(is_valid_name(&name), "{name:?}");
        }
    }
}
