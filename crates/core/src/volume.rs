//! Catalog volume records and their display projection.
//!
//! [`VolumeRecord`] is what the upstream volumes-search API returns per
//! result; [`DisplayItem`] is the compact shape sent to clients.

use serde::{Deserialize, Serialize};

/// Title used when a record carries none.
pub const UNTITLED: &str = "Untitled";

/// Author text used in labels when a record lists no authors.
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

// ---------------------------------------------------------------------------
// Upstream shapes
// ---------------------------------------------------------------------------

/// One catalog entry as returned upstream.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "VolumeWire")]
pub struct VolumeRecord {
    pub id: String,
    pub title: Option<String>,
    pub authors: Vec<String>,
    /// Free-form; not guaranteed to be a full date.
    pub published_date: Option<String>,
    pub description: Option<String>,
}

/// One page of upstream search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumePage {
    #[serde(default)]
    pub total_items: u32,
    #[serde(default)]
    pub items: Vec<VolumeRecord>,
}

#[derive(Deserialize)]
struct VolumeWire {
    id: String,
    #[serde(rename = "volumeInfo", default)]
    volume_info: VolumeInfoWire,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VolumeInfoWire {
    title: Option<String>,
    authors: Option<Vec<String>>,
    published_date: Option<String>,
    description: Option<String>,
}

impl From<VolumeWire> for VolumeRecord {
    fn from(wire: VolumeWire) -> Self {
        let info = wire.volume_info;
        Self {
            id: wire.id,
            title: info.title,
            authors: info.authors.unwrap_or_default(),
            published_date: info.published_date,
            description: info.description,
        }
    }
}

// ---------------------------------------------------------------------------
// Display projection
// ---------------------------------------------------------------------------

/// A search result row as presented to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayItem {
    pub id: String,
    /// `"<authors> - <title>"`.
    pub label: String,
    pub authors: Vec<String>,
    pub title: String,
    pub description: Option<String>,
    pub published_date: Option<String>,
}

impl From<VolumeRecord> for DisplayItem {
    fn from(record: VolumeRecord) -> Self {
        let title = record.title.unwrap_or_else(|| UNTITLED.to_string());
        let label = build_label(&record.authors, &title);
        Self {
            id: record.id,
            label,
            authors: record.authors,
            title,
            description: record.description,
            published_date: record.published_date,
        }
    }
}

/// Build the composite display label for a record.
///
/// ```
/// use shelfstat_core::volume::build_label;
/// assert_eq!(build_label(&[], "Dune"), "Unknown author - Dune");
/// ```
pub fn build_label(authors: &[String], title: &str) -> String {
    let author_text = if authors.is_empty() {
        UNKNOWN_AUTHOR.to_string()
    } else {
        authors.join(", ")
    };
    format!("{author_text} - {title}")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: Option<&str>, authors: &[&str]) -> VolumeRecord {
        VolumeRecord {
            id: "vol-1".into(),
            title: title.map(str::to_string),
            authors: authors.iter().map(|a| a.to_string()).collect(),
            published_date: Some("1965-08-01".into()),
            description: None,
        }
    }

    #[test]
    fn label_joins_authors_with_comma() {
        let item = DisplayItem::from(record(Some("The Talisman"), &["Stephen King", "Peter Straub"]));
        assert_eq!(item.label, "Stephen King, Peter Straub - The Talisman");
    }

    #[test]
    fn missing_title_and_authors_fall_back() {
        let item = DisplayItem::from(record(None, &[]));
        assert_eq!(item.title, UNTITLED);
        assert_eq!(item.label, "Unknown author - Untitled");
        assert!(item.authors.is_empty());
    }

    #[test]
    fn display_item_serializes_camel_case() {
        let json = serde_json::to_value(DisplayItem::from(record(Some("Dune"), &["Frank Herbert"])))
            .unwrap();
        assert_eq!(json["publishedDate"], "1965-08-01");
        assert!(json["description"].is_null());
        assert_eq!(json["label"], "Frank Herbert - Dune");
    }

    #[test]
    fn page_parses_upstream_shape() {
        let page: VolumePage = serde_json::from_value(serde_json::json!({
            "kind": "books#volumes",
            "totalItems": 2,
            "items": [
                {
                    "id": "a1",
                    "volumeInfo": {
                        "title": "Dune",
                        "authors": ["Frank Herbert"],
                        "publishedDate": "1965",
                        "description": "Desert planet."
                    }
                },
                { "id": "b2" }
            ]
        }))
        .unwrap();

        assert_eq!(page.total_items, 2);
        assert_eq!(page.items[0].authors, vec!["Frank Herbert".to_string()]);
        assert_eq!(page.items[0].published_date.as_deref(), Some("1965"));
        assert_eq!(page.items[1].title, None);
        assert!(page.items[1].authors.is_empty());
    }

    #[test]
    fn page_without_items_or_total_defaults_to_empty() {
        let page: VolumePage = serde_json::from_str(r#"{"kind":"books#volumes"}"#).unwrap();
        assert_eq!(page, VolumePage::default());
    }
}
