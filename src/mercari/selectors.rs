//! CSS selectors for mercari.jp search result pages.
//!
//! Update this file when the markup of the search page changes.

use scraper::Selector;
use std::sync::LazyLock;

/// Selectors for the search results page.
pub mod search {
    use super::*;

    /// Heading that announces the number of results.
    pub static HEADLINE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".search-result-head").unwrap());

    /// Headline text shown when nothing matched.
    ///
    /// Plain substring match on localized text: a best-effort signal only.
    pub const NO_RESULTS_MARKER: &str = "検索結果 0件";

    /// Item card container.
    pub static ITEM: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".items-box").unwrap());

    /// Item name inside a card.
    pub static NAME: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".items-box-name").unwrap());

    /// First link inside a card points at the item page.
    pub static LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").unwrap());

    /// Thumbnail image inside a card.
    pub static IMAGE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".items-box-photo > img").unwrap());

    /// Thumbnails are lazy-loaded, so the real URL lives here instead of `src`.
    pub const IMAGE_ATTR: &str = "data-src";

    /// Price text, e.g. "¥ 12,800".
    pub static PRICE: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".items-box-price").unwrap());

    /// Badge overlaid on sold items.
    pub static SOLD_OUT: LazyLock<Selector> =
        LazyLock::new(|| Selector::parse(".item-sold-out-badge").unwrap());
}
