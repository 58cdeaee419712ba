//! Product List Query Configuration
//!
//! Typed filter/sort/paging state for the product list, serialized to and
//! from the URL query string. Unset fields are omitted entirely.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::DEFAULT_PAGE_LIMIT;

// encodeURIComponent-compatible set
const QUERY_ENCODE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    CreatedAt,
    View,
    Sold,
    Price,
}

impl SortBy {
    pub fn as_str(self) -> &'static str {
        match self {
            SortBy::CreatedAt => "createdAt",
            SortBy::View => "view",
            SortBy::Sold => "sold",
            SortBy::Price => "price",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "createdAt" => Some(SortBy::CreatedAt),
            "view" => Some(SortBy::View),
            "sold" => Some(SortBy::Sold),
            "price" => Some(SortBy::Price),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

impl Order {
    pub fn as_str(self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(Order::Asc),
            "desc" => Some(Order::Desc),
            _ => None,
        }
    }
}

/// Filter/sort/paging state driving `GET products`.
///
/// Any change to this value is a new cache key: the product list refetches
/// whenever it changes.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryConfig {
    pub page: u32,
    pub limit: u32,
    pub sort_by: Option<SortBy>,
    /// Only meaningful together with `sort_by = price`
    pub order: Option<Order>,
    pub category: Option<String>,
    pub price_min: Option<u64>,
    pub price_max: Option<u64>,
    pub rating_filter: Option<u8>,
    pub name: Option<String>,
    pub exclude: Option<String>,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
            sort_by: None,
            order: None,
            category: None,
            price_min: None,
            price_max: None,
            rating_filter: None,
            name: None,
            exclude: None,
        }
    }
}

impl QueryConfig {
    /// Serialize to a `k=v&k=v` query string, omitting unset fields
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<String> = vec![
            format!("page={}", self.page),
            format!("limit={}", self.limit),
        ];
        if let Some(sort_by) = self.sort_by {
            pairs.push(format!("sort_by={}", sort_by.as_str()));
        }
        if let Some(order) = self.order {
            pairs.push(format!("order={}", order.as_str()));
        }
        if let Some(category) = &self.category {
            pairs.push(format!("category={}", encode(category)));
        }
        if let Some(price_min) = self.price_min {
            pairs.push(format!("price_min={price_min}"));
        }
        if let Some(price_max) = self.price_max {
            pairs.push(format!("price_max={price_max}"));
        }
        if let Some(rating) = self.rating_filter {
            pairs.push(format!("rating_filter={rating}"));
        }
        if let Some(name) = &self.name {
            pairs.push(format!("name={}", encode(name)));
        }
        if let Some(exclude) = &self.exclude {
            pairs.push(format!("exclude={}", encode(exclude)));
        }
        pairs.join("&")
    }

    /// Parse from a location search string (leading `?` allowed)
    pub fn from_search(search: &str) -> Self {
        let mut config = Self::default();
        for pair in search.trim_start_matches('?').split('&') {
            let Some((key, raw)) = pair.split_once('=') else {
                continue;
            };
            let Some(value) = decode(raw) else { continue };
            if value.is_empty() {
                continue;
            }
            match key {
                "page" => {
                    if let Ok(page) = value.parse() {
                        config.page = page;
                    }
                }
                "limit" => {
                    if let Ok(limit) = value.parse() {
                        config.limit = limit;
                    }
                }
                "sort_by" => config.sort_by = SortBy::parse(&value),
                "order" => config.order = Order::parse(&value),
                "category" => config.category = Some(value),
                "price_min" => config.price_min = value.parse().ok(),
                "price_max" => config.price_max = value.parse().ok(),
                "rating_filter" => config.rating_filter = value.parse().ok(),
                "name" => config.name = Some(value),
                "exclude" => config.exclude = Some(value),
                _ => {}
            }
        }
        config
    }

    /// Search submit: set the name filter and go back to page 1.
    /// An active price sort is cleared so results come back by relevance.
    pub fn set_search_name(&mut self, name: String) {
        if self.order.is_some() {
            self.order = None;
            self.sort_by = None;
        }
        self.name = if name.is_empty() { None } else { Some(name) };
        self.page = 1;
    }

    /// Sidebar "clear all": drop category/price/rating filters
    pub fn reset_filters(&mut self) {
        self.category = None;
        self.price_min = None;
        self.price_max = None;
        self.rating_filter = None;
        self.page = 1;
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_ENCODE).to_string()
}

fn decode(raw: &str) -> Option<String> {
    let raw = raw.replace('+', " ");
    percent_decode_str(&raw)
        .decode_utf8()
        .ok()
        .map(|cow| cow.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_string() {
        assert_eq!(QueryConfig::default().to_query_string(), "page=1&limit=20");
    }

    #[test]
    fn test_unset_fields_are_omitted() {
        let config = QueryConfig {
            price_max: Some(5000),
            ..Default::default()
        };
        assert_eq!(config.to_query_string(), "page=1&limit=20&price_max=5000");
    }

    #[test]
    fn test_name_is_percent_encoded() {
        let config = QueryConfig {
            name: Some("áo thun".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.to_query_string(),
            "page=1&limit=20&name=%C3%A1o%20thun"
        );
    }

    #[test]
    fn test_search_round_trip() {
        let config = QueryConfig {
            page: 3,
            sort_by: Some(SortBy::Price),
            order: Some(Order::Asc),
            category: Some("60aba4e24efcc70f8892e1c6".to_string()),
            rating_filter: Some(4),
            name: Some("áo thun".to_string()),
            ..Default::default()
        };
        let parsed = QueryConfig::from_search(&format!("?{}", config.to_query_string()));
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_from_search_ignores_junk() {
        let config = QueryConfig::from_search("?page=abc&sort_by=nope&foo=bar");
        assert_eq!(config, QueryConfig::default());
    }

    #[test]
    fn test_search_name_clears_price_sort() {
        let mut config = QueryConfig {
            page: 7,
            sort_by: Some(SortBy::Price),
            order: Some(Order::Desc),
            ..Default::default()
        };
        config.set_search_name("shirt".to_string());
        assert_eq!(config.sort_by, None);
        assert_eq!(config.order, None);
        assert_eq!(config.name.as_deref(), Some("shirt"));
        assert_eq!(config.page, 1);
    }

    #[test]
    fn test_search_name_keeps_non_price_sort() {
        let mut config = QueryConfig {
            sort_by: Some(SortBy::Sold),
            ..Default::default()
        };
        config.set_search_name("shirt".to_string());
        assert_eq!(config.sort_by, Some(SortBy::Sold));
    }

    #[test]
    fn test_reset_filters() {
        let mut config = QueryConfig {
            page: 4,
            category: Some("c".to_string()),
            price_min: Some(1),
            price_max: Some(2),
            rating_filter: Some(5),
            name: Some("kept".to_string()),
            ..Default::default()
        };
        config.reset_filters();
        assert_eq!(config.category, None);
        assert_eq!(config.price_min, None);
        assert_eq!(config.price_max, None);
        assert_eq!(config.rating_filter, None);
        assert_eq!(config.page, 1);
        // the search term survives a filter reset
        assert_eq!(config.name.as_deref(), Some("kept"));
    }
}
