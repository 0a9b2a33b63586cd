use crate::domain::shared::query::{QueryError, contains_ignore_case, query_pairs};

use super::model::Item;

pub const PRODUCT_ID_KEY: &str = "product_id";
pub const PRODUCT_NAME_CONTAINS_KEY: &str = "product_name_contains";

/// Filters accepted by the item listing of a single wishlist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFilter {
    pub product_id: Option<i64>,
    pub product_name_contains: Option<String>,
}

impl ItemFilter {
    pub fn from_query<I, K, V>(pairs: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut filter = Self::default();
        for (key, value) in query_pairs(pairs) {
            match key.as_str() {
                PRODUCT_ID_KEY => {
                    filter.product_id = value
                        .map(|v| v.trim().parse::<i64>())
                        .transpose()
                        .map_err(|_| QueryError::InvalidValue(key.clone()))?;
                }
                PRODUCT_NAME_CONTAINS_KEY => filter.product_name_contains = value,
                _ => return Err(QueryError::UnknownParameter(key)),
            }
        }
        Ok(filter)
    }

    pub fn matches(&self, item: &Item) -> bool {
        if let Some(product_id) = self.product_id
            && item.product_id != product_id
        {
            return false;
        }
        if let Some(needle) = &self.product_name_contains
            && !contains_ignore_case(&item.product_name, needle)
        {
            return false;
        }
        true
    }
}
