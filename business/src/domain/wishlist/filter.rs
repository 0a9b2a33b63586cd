use crate::domain::shared::query::{QueryError, contains_ignore_case, query_pairs};
use crate::domain::shared::value_objects::CustomerId;

use super::model::Wishlist;

pub const CUSTOMER_ID_KEY: &str = "customer_id";
pub const NAME_CONTAINS_KEY: &str = "name_contains";

/// Filters accepted by the wishlist listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WishlistFilter {
    /// Exact match on the owner.
    pub customer_id: Option<CustomerId>,
    /// Case-insensitive substring of the name.
    pub name_contains: Option<String>,
}

impl WishlistFilter {
    pub fn from_query<I, K, V>(pairs: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut filter = Self::default();
        for (key, value) in query_pairs(pairs) {
            match key.as_str() {
                CUSTOMER_ID_KEY => filter.customer_id = value.map(CustomerId::new),
                NAME_CONTAINS_KEY => filter.name_contains = value,
                _ => return Err(QueryError::UnknownParameter(key)),
            }
        }
        Ok(filter)
    }

    pub fn matches(&self, wishlist: &Wishlist) -> bool {
        if let Some(customer_id) = &self.customer_id
            && !wishlist.is_owned_by(customer_id)
        {
            return false;
        }
        if let Some(needle) = &self.name_contains
            && !contains_ignore_case(&wishlist.name, needle)
        {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn wishlist(customer_id: &str, name: &str) -> Wishlist {
        Wishlist::from_repository(
            1,
            CustomerId::new(customer_id),
            name.to_string(),
            None,
            vec![],
            Utc::now(),
            Utc::now(),
        )
    }

    #[test]
    fn should_parse_known_keys() {
        let filter =
            WishlistFilter::from_query(vec![("customer_id", "CUST001"), ("name_contains", "gift")])
                .unwrap();

        assert_eq!(filter.customer_id, Some(CustomerId::new("CUST001")));
        assert_eq!(filter.name_contains.as_deref(), Some("gift"));
    }

    #[test]
    fn should_reject_unknown_key_even_with_valid_ones() {
        let result =
            WishlistFilter::from_query(vec![("customer_id", "CUST001"), ("colour", "red")]);

        assert_eq!(result.unwrap_err(), QueryError::UnknownParameter("colour".into()));
    }

    #[test]
    fn should_treat_empty_query_as_no_filter() {
        let filter = WishlistFilter::from_query(Vec::<(String, String)>::new()).unwrap();
        assert_eq!(filter, WishlistFilter::default());
        assert!(filter.matches(&wishlist("CUST001", "Anything")));
    }

    #[test]
    fn should_ignore_blank_values_of_known_keys() {
        let filter =
            WishlistFilter::from_query(vec![("customer_id", ""), ("name_contains", " ")]).unwrap();
        assert_eq!(filter, WishlistFilter::default());
    }

    #[test]
    fn should_reject_unknown_key_with_blank_value() {
        let result = WishlistFilter::from_query(vec![("colour", "")]);
        assert_eq!(result.unwrap_err(), QueryError::UnknownParameter("colour".into()));
    }

    #[test]
    fn should_match_customer_exactly() {
        let filter = WishlistFilter::from_query(vec![("customer_id", "CUST001")]).unwrap();

        assert!(filter.matches(&wishlist("CUST001", "Gifts")));
        assert!(!filter.matches(&wishlist("CUST0011", "Gifts")));
        assert!(!filter.matches(&wishlist("cust001", "Gifts")));
    }

    #[test]
    fn should_match_name_substring_case_insensitively() {
        let filter = WishlistFilter::from_query(vec![
            ("customer_id", "CUST001"),
            ("name_contains", "GIFT"),
        ])
        .unwrap();

        assert!(filter.matches(&wishlist("CUST001", "Holiday Gifts")));
        assert!(!filter.matches(&wishlist("CUST001", "Camping")));
        assert!(!filter.matches(&wishlist("CUST002", "Holiday Gifts")));
    }
}
