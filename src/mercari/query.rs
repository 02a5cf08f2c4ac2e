//! Search URL construction.
//!
//! Callers must not depend on the order of the emitted query parameters.

use crate::mercari::models::SearchCondition;

/// Search endpoint used when no override is configured.
pub const DEFAULT_SEARCH_URL: &str = "https://www.mercari.com/jp/search/";

/// Sort token for newest-first results.
pub const SORT_CREATED_DESC: &str = "created_desc";

/// Sort token for oldest-first results.
pub const SORT_CREATED_ASC: &str = "created_asc";

/// Builds the search URL for the default endpoint.
pub fn build_url(condition: &SearchCondition) -> String {
    build_url_with_base(DEFAULT_SEARCH_URL, condition)
}

/// Builds the search URL against a custom endpoint (for testing or mirrors).
pub fn build_url_with_base(base_url: &str, condition: &SearchCondition) -> String {
    let query = query_pairs(condition)
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", base_url, query)
}

/// Returns the encoded `key=value` pairs for a condition.
fn query_pairs(condition: &SearchCondition) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::with_capacity(10);

    push_number(&mut pairs, "page", condition.page);
    pairs.push(("keyword", urlencoding::encode(&condition.keyword).into_owned()));
    push_number(&mut pairs, "category-root", condition.category_root);
    push_number(&mut pairs, "category-child", condition.category_child);
    pairs.push(("brand-name", urlencoding::encode(&condition.brand_name).into_owned()));
    push_number(&mut pairs, "brand-id", condition.brand_id);
    push_number(&mut pairs, "price-min", condition.price_min);
    push_number(&mut pairs, "price-max", condition.price_max);

    let sort = if condition.sort_desc { SORT_CREATED_DESC } else { SORT_CREATED_ASC };
    pairs.push(("sort_order", sort.to_string()));

    if condition.on_sale {
        pairs.push(("status_on_sale", "1".to_string()));
    }

    pairs
}

/// Zero means unset and is never sent.
fn push_number(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: u32) {
    if value != 0 {
        pairs.push((key, value.to_string()));
    }
}
