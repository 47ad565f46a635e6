use url::Url;

use crate::SearchState;

pub const DEFAULT_ENDPOINT: &str = "https://content.guardianapis.com/search";
pub const DEFAULT_PAGE_SIZE: u32 = 7;

const ORDER_BY: &str = "newest";
const FIELDS_BASE: &str = "thumbnail";
const FIELDS_WITH_SUMMARY: &str = "thumbnail,trailText";

/// Static API parameters, constant for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub endpoint: Url,
    pub api_key: String,
    pub page_size: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid url"),
            api_key: "test".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Fully-qualified request target ready for transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    url: Url,
}

impl RequestDescriptor {
    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn query_param(&self, name: &str) -> Option<String> {
        self.url
            .query_pairs()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    /// The request URL with the api key masked, for logging.
    pub fn redacted(&self) -> String {
        let mut url = self.url.clone();
        let pairs: Vec<(String, String)> = self
            .url
            .query_pairs()
            .map(|(key, value)| {
                let value = if key == "api-key" {
                    "***".to_string()
                } else {
                    value.into_owned()
                };
                (key.into_owned(), value)
            })
            .collect();
        url.query_pairs_mut().clear().extend_pairs(pairs);
        url.to_string()
    }
}

/// Maps the current search state to a request. Pure and total.
pub fn build_request(api: &ApiConfig, state: &SearchState) -> RequestDescriptor {
    let mut url = api.endpoint.clone();
    {
        let mut params = url.query_pairs_mut();
        params
            .append_pair("api-key", &api.api_key)
            .append_pair("page-size", &api.page_size.to_string())
            .append_pair("page", &state.page().to_string())
            .append_pair("order-by", ORDER_BY)
            .append_pair(
                "show-fields",
                if state.include_summaries() {
                    FIELDS_WITH_SUMMARY
                } else {
                    FIELDS_BASE
                },
            );
        if !state.query().is_empty() {
            params.append_pair("q", state.query());
        }
        if !state.section().is_empty() {
            params.append_pair("section", state.section());
        }
    }
    RequestDescriptor { url }
}
