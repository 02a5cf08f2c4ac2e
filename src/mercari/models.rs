//! Data models for search conditions and listed items.

use serde::{Deserialize, Serialize};

/// Filter and sort parameters for a mercari.jp search.
///
/// Every numeric field uses `0` to mean "unset"; unset fields are left out of
/// the request entirely so the server applies its own default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchCondition {
    /// Free-text search keyword
    pub keyword: String,
    /// Brand id (0 = unset)
    pub brand_id: u32,
    /// Brand name keyword
    pub brand_name: String,
    /// Root category id (0 = unset)
    pub category_root: u32,
    /// Child category id (0 = unset)
    pub category_child: u32,
    /// Minimum price in yen (0 = unset)
    pub price_min: u32,
    /// Maximum price in yen (0 = unset)
    pub price_max: u32,
    /// Result page number (0 = server default)
    pub page: u32,
    /// Newest first when true, oldest first otherwise
    pub sort_desc: bool,
    /// Only request items that are still for sale
    pub on_sale: bool,
}

impl SearchCondition {
    /// Creates a condition with only a keyword set.
    pub fn keyword(keyword: impl Into<String>) -> Self {
        Self { keyword: keyword.into(), ..Self::default() }
    }
}

/// One entry on a search result page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Listing title
    pub name: String,
    /// Price in yen, 0 when the price text could not be read
    pub price: u64,
    /// False when the card carries a sold-out badge
    pub on_sale: bool,
    /// Link to the item page
    pub page_url: String,
    /// Lazy-loaded thumbnail URL
    pub image_url: String,
}
