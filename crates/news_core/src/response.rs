use serde::Deserialize;

/// One article from the search response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultItem {
    pub id: String,
    pub title: String,
    pub url: String,
    pub section_name: String,
    pub thumbnail_url: Option<String>,
    pub summary_text: Option<String>,
}

/// The parts of a search response the engine uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPage {
    pub pages: u32,
    pub total: u64,
    pub results: Vec<ResultItem>,
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("response body is not valid JSON: {0}")]
    InvalidJson(serde_json::Error),
    #[error("response body is not a JSON object")]
    NotAnObject,
    #[error("response body has an unexpected shape: {0}")]
    Shape(serde_json::Error),
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    response: Option<Payload>,
}

#[derive(Deserialize)]
struct Payload {
    #[serde(default)]
    pages: Option<u32>,
    #[serde(default)]
    total: Option<u64>,
    #[serde(default)]
    results: Option<Vec<Article>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Article {
    id: String,
    web_title: String,
    web_url: String,
    #[serde(default)]
    section_name: Option<String>,
    #[serde(default)]
    fields: Option<ArticleFields>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArticleFields {
    #[serde(default)]
    thumbnail: Option<String>,
    #[serde(default)]
    trail_text: Option<String>,
}

/// Parses a search response body.
///
/// A missing `response`, `pages` or `results` falls back to one page with no
/// results; a body that is not a JSON object is an error.
pub fn parse_search_response(body: &str) -> Result<SearchPage, ParseError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(ParseError::InvalidJson)?;
    if !value.is_object() {
        return Err(ParseError::NotAnObject);
    }
    let envelope: Envelope = serde_json::from_value(value).map_err(ParseError::Shape)?;
    let payload = envelope.response.unwrap_or(Payload {
        pages: None,
        total: None,
        results: None,
    });

    let results = payload
        .results
        .unwrap_or_default()
        .into_iter()
        .map(|article| {
            let fields = article.fields.unwrap_or(ArticleFields {
                thumbnail: None,
                trail_text: None,
            });
            ResultItem {
                id: article.id,
                title: article.web_title,
                url: article.web_url,
                section_name: article.section_name.unwrap_or_default(),
                thumbnail_url: fields.thumbnail.filter(|t| !t.is_empty()),
                summary_text: fields.trail_text.filter(|t| !t.is_empty()),
            }
        })
        .collect();

    Ok(SearchPage {
        pages: payload.pages.unwrap_or(1).max(1),
        total: payload.total.unwrap_or(0),
        results,
    })
}
