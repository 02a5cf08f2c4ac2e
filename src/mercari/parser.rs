//! HTML extraction for mercari.jp search result pages.
//!
//! Extraction never fails: a field that cannot be found degrades to its zero
//! value and the remaining fields and cards are still processed.

use crate::mercari::models::Item;
use crate::mercari::selectors::search;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

/// Anything that can be queried with a CSS selector.
pub trait Selectable {
    /// Returns the first matching element in document order.
    fn first<'a>(&'a self, selector: &Selector) -> Option<ElementRef<'a>>;

    /// Text content of the first match.
    fn first_text(&self, selector: &Selector) -> Option<String> {
        self.first(selector).map(|e| e.text().collect())
    }

    /// Attribute value of the first match.
    fn first_attr(&self, selector: &Selector, attr: &str) -> Option<String> {
        self.first(selector).and_then(|e| e.value().attr(attr).map(String::from))
    }
}

impl Selectable for Html {
    fn first<'a>(&'a self, selector: &Selector) -> Option<ElementRef<'a>> {
        self.select(selector).next()
    }
}

impl<'e> Selectable for ElementRef<'e> {
    fn first<'a>(&'a self, selector: &Selector) -> Option<ElementRef<'a>> {
        self.select(selector).next()
    }
}

/// Parser for search result pages.
pub struct Parser {
    no_results_marker: String,
}

impl Parser {
    /// Creates a parser for the Japanese storefront.
    pub fn new() -> Self {
        Self { no_results_marker: search::NO_RESULTS_MARKER.to_string() }
    }

    /// Overrides the headline text that marks an empty result page.
    pub fn with_no_results_marker(mut self, marker: impl Into<String>) -> Self {
        self.no_results_marker = marker.into();
        self
    }

    /// Parses a search results page into items, in document order.
    pub fn parse_search(&self, html: &str) -> Vec<Item> {
        let document = Html::parse_document(html);
        self.extract(&document)
    }

    /// Extracts items from an already parsed document.
    pub fn extract(&self, document: &Html) -> Vec<Item> {
        if self.is_empty_result(document) {
            debug!("Headline reports zero results, skipping item scan");
            return Vec::new();
        }

        let items: Vec<Item> = document
            .select(&search::ITEM)
            .map(|card| {
                let item = parse_item_card(&card);
                trace!("Parsed item: {} ({} yen)", item.name, item.price);
                item
            })
            .collect();

        debug!("Parsed {} items", items.len());
        items
    }

    /// Checks the headline for the zero-results marker.
    fn is_empty_result(&self, document: &Html) -> bool {
        document
            .first_text(&search::HEADLINE)
            .is_some_and(|headline| headline.contains(&self.no_results_marker))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts one item card; every field is looked up independently.
pub fn parse_item_card(card: &impl Selectable) -> Item {
    Item {
        name: extract_name(card),
        price: extract_price(card),
        on_sale: extract_on_sale(card),
        page_url: extract_page_url(card),
        image_url: extract_image_url(card),
    }
}

fn extract_name(card: &impl Selectable) -> String {
    card.first_text(&search::NAME).map(|name| name.trim().to_string()).unwrap_or_default()
}

fn extract_page_url(card: &impl Selectable) -> String {
    card.first_attr(&search::LINK, "href").unwrap_or_default()
}

fn extract_image_url(card: &impl Selectable) -> String {
    card.first_attr(&search::IMAGE, search::IMAGE_ATTR).unwrap_or_default()
}

/// A card is on sale unless it carries a sold-out badge with text in it.
fn extract_on_sale(card: &impl Selectable) -> bool {
    card.first_text(&search::SOLD_OUT).map_or(true, |badge| badge.is_empty())
}

fn extract_price(card: &impl Selectable) -> u64 {
    card.first_text(&search::PRICE).map(|text| parse_price(&text)).unwrap_or(0)
}

/// Drops every non-digit and parses the rest; unreadable prices become 0.
pub fn parse_price(text: &str) -> u64 {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}
