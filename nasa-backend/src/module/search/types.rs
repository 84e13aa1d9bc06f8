use nasa_common::SearchResult;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub collection: Option<Collection>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Collection {
    #[serde(default)]
    pub items: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct SearchItem {
    #[serde(default)]
    pub data: Vec<ItemData>,
    #[serde(default)]
    pub links: Vec<ItemLink>,
}

#[derive(Debug, Deserialize)]
pub struct ItemData {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ItemLink {
    #[serde(default)]
    pub href: Option<String>,
}

impl SearchItem {
    /// First title and first link, if both are present.
    pub fn reduce(self) -> Option<SearchResult> {
        let title = self.data.into_iter().next()?.title?;
        let image_url = self.links.into_iter().next()?.href?;
        Some(SearchResult { title, image_url })
    }
}

impl SearchResponse {
    /// Take the first `limit` items, then reduce each one. Items that cannot
    /// be reduced are dropped rather than replaced by later ones.
    pub fn into_results(self, limit: usize) -> Vec<SearchResult> {
        self.collection
            .unwrap_or_default()
            .items
            .into_iter()
            .take(limit)
            .filter_map(|value| serde_json::from_value::<SearchItem>(value).ok())
            .filter_map(SearchItem::reduce)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_uses_first_title_and_link() {
        let item: SearchItem = serde_json::from_str(
            r#"{
                "data": [{"title": "Pillars of Creation"}, {"title": "ignored"}],
                "links": [{"href": "https://images-assets.nasa.gov/p.jpg"}, {"href": "ignored"}]
            }"#,
        )
        .unwrap();
        assert_eq!(
            item.reduce(),
            Some(SearchResult {
                title: "Pillars of Creation".to_string(),
                image_url: "https://images-assets.nasa.gov/p.jpg".to_string(),
            })
        );
    }

    #[test]
    fn test_unreducible_items_inside_limit_are_dropped() {
        let body = r#"{"collection": {"items": [
            {"data": [{"title": "a"}], "links": [{"href": "a.jpg"}]},
            {"data": [{"title": "no links"}]},
            {"data": [{"title": "c"}], "links": [{"href": "c.jpg"}]},
            {"data": [{"title": "d"}], "links": [{"href": "d.jpg"}]}
        ]}}"#;
        let response: SearchResponse = serde_json::from_str(body).unwrap();
        let titles: Vec<String> = response.into_results(3).into_iter().map(|r| r.title).collect();
        assert_eq!(titles, vec!["a", "c"]);
    }

    #[test]
    fn test_missing_collection_is_empty() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_results(3).is_empty());
    }
}
