/// Decodes a raw query string into ordered key/value pairs.
///
/// Keys are kept as sent so the use cases can reject the ones they do not know.
pub fn raw_query_pairs(query: Option<&str>) -> Vec<(String, String)> {
    query
        .map(|qs| url::form_urlencoded::parse(qs.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_return_nothing_without_query_string() {
        assert!(raw_query_pairs(None).is_empty());
        assert!(raw_query_pairs(Some("")).is_empty());
    }

    #[test]
    fn should_decode_pairs_in_order() {
        let pairs = raw_query_pairs(Some("customer_id=CUST001&name_contains=Holiday%20Gifts"));

        assert_eq!(
            pairs,
            vec![
                ("customer_id".to_string(), "CUST001".to_string()),
                ("name_contains".to_string(), "Holiday Gifts".to_string()),
            ]
        );
    }

    #[test]
    fn should_keep_unknown_and_valueless_keys() {
        let pairs = raw_query_pairs(Some("product_id=9101&sort"));

        assert_eq!(pairs[1], ("sort".to_string(), String::new()));
    }
}
