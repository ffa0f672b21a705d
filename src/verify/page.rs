//! Page title extraction from fetched HTML.

use reelscout_common::LookupError;
use scraper::{Html, Selector};

use crate::http::HttpClient;

/// Fetch `url` and return the trimmed text of its `<title>` element.
///
/// `Ok(None)` when the page has no title element or the title is blank.
pub async fn fetch_page_title(http: &HttpClient, url: &str) -> Result<Option<String>, LookupError> {
    let body = http.get_text(url).await?;
    Ok(extract_title(&body))
}

/// Extract the document title from raw HTML.
pub fn extract_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("title").ok()?;
    let title = document
        .select(&selector)
        .next()?
        .text()
        .collect::<String>();
    let title = title.trim();
    (!title.is_empty()).then(|| title.to_owned())
}
