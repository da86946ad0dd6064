//! The flat, UI-facing record produced from each search hit.
//!
//! `DisplayRecord` is what the rest of the application keeps.  The wire types
//! in [`schema`](super::schema) are decoded, mapped through
//! [`DisplayRecord::from_item`], and dropped.
//!
//! ## For contributors
//!
//! The mapping is total: it must produce a record for every structurally
//! valid [`Item`], including one with no `data` entries and no links.  If you
//! add a field here, give it a value for the empty case too.

use chrono::NaiveDateTime;

use super::schema::Item;

/// Shown when a record has no title.
pub const UNTITLED: &str = "Untitled";

/// Shown when a record has no attribution.
pub const DEFAULT_ATTRIBUTION: &str = "NASA";

/// A single photo, normalised from the search response.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct DisplayRecord {
    pub title: Option<String>,

    pub description: Option<String>,

    /// URL of the preview image.
    ///
    /// Never absent: an item without links maps to the empty string.
    pub image_url: String,

    /// Creation date exactly as the API sent it.  Not validated.
    pub date_created: Option<String>,

    /// Producing NASA center (the API's `center` field).
    pub attribution: Option<String>,
}

impl DisplayRecord {
    /// Map a decoded search hit.  Only the first `data` and first `links`
    /// entry are consulted.
    pub fn from_item(item: &Item) -> Self {
        let data = item.data.first();
        let image_url = item
            .links
            .as_deref()
            .and_then(|links| links.first())
            .map(|link| link.href.clone())
            .unwrap_or_default();

        Self {
            title: data.map(|d| d.title.clone()),
            description: data.and_then(|d| d.description.clone()),
            image_url,
            date_created: data.and_then(|d| d.date_created.clone()),
            attribution: data.and_then(|d| d.center.clone()),
        }
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED)
    }

    pub fn display_attribution(&self) -> &str {
        self.attribution.as_deref().unwrap_or(DEFAULT_ATTRIBUTION)
    }

    /// Human-readable creation date.
    ///
    /// `2023-01-01T12:00:00Z` renders as `Jan 1, 2023`.  Anything else falls
    /// back to its first ten characters with `-` turned into `/`.
    pub fn display_date(&self) -> String {
        let Some(raw) = self.date_created.as_deref() else {
            return String::new();
        };

        match NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%SZ") {
            Ok(dt) => dt.format("%b %-d, %Y").to_string(),
            Err(_) => raw.chars().take(10).collect::<String>().replace('-', "/"),
        }
    }
}

impl From<&Item> for DisplayRecord {
    fn from(item: &Item) -> Self {
        Self::from_item(item)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::schema::{ItemData, ItemLink};

    fn data(title: &str) -> ItemData {
        ItemData {
            title: title.to_string(),
            description: Some("desc".to_string()),
            date_created: Some("2023-01-01T12:00:00Z".to_string()),
            center: Some("JPL".to_string()),
        }
    }

    fn link(href: &str) -> ItemLink {
        ItemLink {
            href: href.to_string(),
            rel: Some("preview".to_string()),
            render: None,
        }
    }

    #[test]
    fn maps_first_data_and_first_link() {
        let item = Item {
            data: vec![data("First"), data("Second")],
            links: Some(vec![link("https://example.com/a.jpg"), link("https://example.com/b.jpg")]),
        };

        let record = DisplayRecord::from_item(&item);

        assert_eq!(record.title.as_deref(), Some("First"));
        assert_eq!(record.description.as_deref(), Some("desc"));
        assert_eq!(record.image_url, "https://example.com/a.jpg");
        assert_eq!(record.date_created.as_deref(), Some("2023-01-01T12:00:00Z"));
        assert_eq!(record.attribution.as_deref(), Some("JPL"));
    }

    #[test]
    fn empty_data_and_absent_links_map_to_all_absent() {
        let item = Item { data: vec![], links: None };

        assert_eq!(DisplayRecord::from_item(&item), DisplayRecord::default());
    }

    #[test]
    fn empty_links_yield_empty_image_url() {
        let item = Item {
            data: vec![data("No links")],
            links: Some(vec![]),
        };

        let record = DisplayRecord::from(&item);
        assert_eq!(record.image_url, "");
        assert_eq!(record.title.as_deref(), Some("No links"));
    }

    #[test]
    fn empty_title_is_kept_as_is() {
        let item = Item {
            data: vec![ItemData {
                title: String::new(),
                description: None,
                date_created: None,
                center: None,
            }],
            links: None,
        };

        let record = DisplayRecord::from_item(&item);
        assert_eq!(record.title.as_deref(), Some(""));
        assert!(record.attribution.is_none());
    }

    #[test]
    fn display_fallbacks() {
        let record = DisplayRecord::default();
        assert_eq!(record.display_title(), "Untitled");
        assert_eq!(record.display_attribution(), "NASA");
        assert_eq!(record.display_date(), "");
    }

    #[test]
    fn display_date_formats_iso_timestamp() {
        let record = DisplayRecord {
            date_created: Some("2023-01-01T12:00:00Z".into()),
            ..Default::default()
        };
        assert_eq!(record.display_date(), "Jan 1, 2023");
    }

    #[test]
    fn display_date_falls_back_to_prefix() {
        let record = DisplayRecord {
            date_created: Some("1969-07-20T20:17:40.000+00:00".into()),
            ..Default::default()
        };
        assert_eq!(record.display_date(), "1969/07/20");

        let short = DisplayRecord {
            date_created: Some("1969".into()),
            ..Default::default()
        };
        assert_eq!(short.display_date(), "1969");
    }
}
