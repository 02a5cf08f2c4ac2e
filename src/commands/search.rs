//! Search command implementation.

use crate::config::Config;
use crate::format::Formatter;
use crate::mercari::query::{build_url_with_base, DEFAULT_SEARCH_URL};
use crate::mercari::{MercariClient, MercariSearch, Parser, SearchCondition};
use anyhow::{Context, Result};
use tracing::{debug, info};

/// Executes a single-page item search.
pub struct SearchCommand {
    config: Config,
}

impl SearchCommand {
    /// Creates a new search command.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Executes the search and returns formatted output.
    pub async fn execute(&self, condition: &SearchCondition) -> Result<String> {
        let client = MercariClient::new(&self.config).context("Failed to create HTTP client")?;

        self.execute_with_client(&client, condition).await
    }

    /// Executes the search with a provided client (for testing).
    pub async fn execute_with_client(
        &self,
        client: &impl MercariSearch,
        condition: &SearchCondition,
    ) -> Result<String> {
        debug!("Search condition: {:?}", condition);

        let base_url = self.config.base_url.as_deref().unwrap_or(DEFAULT_SEARCH_URL);
        let url = build_url_with_base(base_url, condition);
        info!("Searching: {}", url);

        let html =
            client.fetch(&url).await.context("Failed to fetch a search result from mercari.jp")?;

        let items = self.parser().parse_search(&html);
        info!("Found {} items", items.len());

        let formatter = Formatter::new(self.config.format);
        Ok(formatter.format_items(&items))
    }

    fn parser(&self) -> Parser {
        match &self.config.no_results_marker {
            Some(marker) => Parser::new().with_no_results_marker(marker.clone()),
            None => Parser::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::mercari::FetchError;
    use async_trait::async_trait;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::{Arc, Mutex};

    /// Mock client returning a canned page or status.
    struct MockMercariClient {
        response: Result<String, u16>,
        call_count: Arc<AtomicU32>,
        last_url: Mutex<Option<String>>,
    }

    impl MockMercariClient {
        fn new(html: impl Into<String>) -> Self {
            Self {
                response: Ok(html.into()),
                call_count: Arc::new(AtomicU32::new(0)),
                last_url: Mutex::new(None),
            }
        }

        fn failing(status: u16) -> Self {
            Self { response: Err(status), ..Self::new("") }
        }

        fn call_count(&self) -> u32 {
            self.call_count.load(Ordering::SeqCst)
        }

        fn last_url(&self) -> String {
            self.last_url.lock().unwrap().clone().unwrap_or_default()
        }
    }

    #[async_trait]
    impl MercariSearch for MockMercariClient {
        async fn fetch(&self, url: &str) -> Result<String, FetchError> {
            self.call_count.fetch_add(1, Ordering::SeqCst);
            *self.last_url.lock().unwrap() = Some(url.to_string());
            self.response.clone().map_err(FetchError::Status)
        }
    }

    fn make_test_config(format: OutputFormat) -> Config {
        Config { format, ..Config::default() }
    }

    /// Splits a URL into its endpoint and an unordered set of query pairs.
    fn split_url(url: &str) -> (String, HashSet<String>) {
        let (base, query) = url.split_once('?').unwrap();
        (base.to_string(), query.split('&').map(String::from).collect())
    }

    fn make_search_html(items: &[(&str, u64, bool)]) -> String {
        let mut html =
            String::from(r#"<html><body><h2 class="search-result-head">検索結果</h2>"#);
        for (i, (name, price, sold)) in items.iter().enumerate() {
            let badge =
                if *sold { r#"<div class="item-sold-out-badge">SOLD</div>"# } else { "" };
            html.push_str(&format!(
                r#"<section class="items-box">
                    <a href="https://item.mercari.com/jp/m{i}/">
                        <figure class="items-box-photo"><img data-src="https://static.mercdn.net/m{i}.jpg">{badge}</figure>
                        <h3 class="items-box-name">{name}</h3>
                        <div class="items-box-price">¥{price}</div>
                    </a>
                </section>"#
            ));
        }
        html.push_str("</body></html>");
        html
    }

    #[tokio::test]
    async fn test_search_command_basic() {
        let html = make_search_html(&[("Camera", 12800, false), ("Lens", 3000, true)]);
        let client = MockMercariClient::new(html);
        let cmd = SearchCommand::new(make_test_config(OutputFormat::Table));

        let output = cmd.execute_with_client(&client, &SearchCondition::keyword("camera")).await;
        let output = output.unwrap();

        assert!(output.contains("Name:       Camera"));
        assert!(output.contains("Price:      12800"));
        assert!(output.contains("Name:       Lens"));
        assert!(output.contains("OnSale:     false"));
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn test_search_command_fetches_built_url() {
        let client = MockMercariClient::new("<html></html>");
        let cmd = SearchCommand::new(make_test_config(OutputFormat::Table));

        let condition = SearchCondition { page: 4, on_sale: true, ..SearchCondition::keyword("bag") };
        cmd.execute_with_client(&client, &condition).await.unwrap();

        let (base, params) = split_url(&client.last_url());
        assert_eq!(base, DEFAULT_SEARCH_URL);

        let expected: HashSet<String> =
            ["page=4", "keyword=bag", "brand-name=", "sort_order=created_asc", "status_on_sale=1"]
                .into_iter()
                .map(String::from)
                .collect();
        assert_eq!(params, expected);
    }

    #[tokio::test]
    async fn test_search_command_uses_configured_base_url() {
        let client = MockMercariClient::new("<html></html>");
        let mut config = make_test_config(OutputFormat::Table);
        config.base_url = Some("http://mirror.local/jp/search/".to_string());
        let cmd = SearchCommand::new(config);

        let condition = SearchCondition { sort_desc: true, ..SearchCondition::default() };
        cmd.execute_with_client(&client, &condition).await.unwrap();

        let (base, params) = split_url(&client.last_url());
        assert_eq!(base, "http://mirror.local/jp/search/");
        assert!(params.contains("sort_order=created_desc"));
        assert!(!params.contains("sort_order=created_asc"));
    }

    #[tokio::test]
    async fn test_search_command_configured_no_results_marker() {
        let html = make_search_html(&[("Recommended", 100, false)])
            .replace("検索結果", "0 results");
        let client = MockMercariClient::new(html);
        let mut config = make_test_config(OutputFormat::Table);
        config.no_results_marker = Some("0 results".to_string());
        let cmd = SearchCommand::new(config);

        let output = cmd.execute_with_client(&client, &SearchCondition::default()).await.unwrap();
        assert_eq!(output, "No items found.");
    }

    #[tokio::test]
    async fn test_search_command_zero_results() {
        let html = make_search_html(&[("Recommended", 100, false)])
            .replace("検索結果", "検索結果 0件");
        let client = MockMercariClient::new(html);
        let cmd = SearchCommand::new(make_test_config(OutputFormat::Table));

        let output = cmd.execute_with_client(&client, &SearchCondition::default()).await.unwrap();
        assert_eq!(output, "No items found.");
    }

    #[tokio::test]
    async fn test_search_command_json_format() {
        let html = make_search_html(&[("Camera", 12800, false)]);
        let client = MockMercariClient::new(html);
        let cmd = SearchCommand::new(make_test_config(OutputFormat::Json));

        let output = cmd.execute_with_client(&client, &SearchCondition::default()).await.unwrap();
        assert!(output.starts_with('['));
        assert!(output.contains("https://static.mercdn.net/m0.jpg"));
    }

    #[tokio::test]
    async fn test_search_command_fetch_error() {
        let client = MockMercariClient::failing(502);
        let cmd = SearchCommand::new(make_test_config(OutputFormat::Table));

        let err = cmd.execute_with_client(&client, &SearchCondition::default()).await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to fetch a search result from mercari.jp");
        let fetch_error = err.downcast_ref::<FetchError>().unwrap();
        assert!(matches!(fetch_error, FetchError::Status(502)));
        assert_eq!(client.call_count(), 1);
    }

    #[test]
    fn test_search_command_blocking() {
        let html = make_search_html(&[("Camera", 12800, false)]);
        let client = MockMercariClient::new(html);
        let cmd = SearchCommand::new(make_test_config(OutputFormat::Csv));

        let output = tokio_test::block_on(
            cmd.execute_with_client(&client, &SearchCondition::default()),
        )
        .unwrap();

        assert!(output.starts_with("name,price,on_sale,page_url,image_url"));
        assert!(output.contains("Camera,12800,true"));
    }
}
