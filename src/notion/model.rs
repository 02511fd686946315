//! Wire models for the subset of the Notion API the site reads.
//!
//! Unknown fields are ignored so upstream additions do not break decoding.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use super::NotionError;

/// One styled text fragment.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RichText {
    #[serde(default)]
    pub plain_text: String,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(default)]
    pub href: Option<String>,
}

#[cfg(test)]
impl RichText {
    /// Unstyled, unlinked fragment.
    pub fn plain(text: &str) -> Self {
        Self {
            plain_text: text.to_string(),
            ..Self::default()
        }
    }
}

/// Style flags of a fragment. Only bold and italic are rendered.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Annotations {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
}

/// Date property payload.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DateValue {
    pub start: String,
}

/// Select option payload.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SelectOption {
    pub name: String,
}

/// A typed page property, keyed by its `type` field.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Title {
        #[serde(default)]
        title: Vec<RichText>,
    },
    RichText {
        #[serde(default)]
        rich_text: Vec<RichText>,
    },
    Checkbox {
        #[serde(default)]
        checkbox: bool,
    },
    Date {
        date: Option<DateValue>,
    },
    Select {
        select: Option<SelectOption>,
    },
    #[serde(other)]
    Unsupported,
}

impl PropertyValue {
    /// Text fragments of a title or rich_text property; empty for anything else.
    pub fn fragments(&self) -> &[RichText] {
        match self {
            PropertyValue::Title { title } => title,
            PropertyValue::RichText { rich_text } => rich_text,
            _ => &[],
        }
    }

    pub fn as_checkbox(&self) -> Option<bool> {
        match self {
            PropertyValue::Checkbox { checkbox } => Some(*checkbox),
            _ => None,
        }
    }

    /// Start of a date property, as sent upstream.
    pub fn date_start(&self) -> Option<&str> {
        match self {
            PropertyValue::Date { date: Some(date) } => Some(date.start.as_str()),
            _ => None,
        }
    }

    pub fn select_name(&self) -> Option<&str> {
        match self {
            PropertyValue::Select {
                select: Some(option),
            } => Some(option.name.as_str()),
            _ => None,
        }
    }
}

/// A database row.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
}

impl Page {
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }
}

/// Result of a database query.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct QueryResponse {
    #[serde(default)]
    pub results: Vec<Page>,
    #[serde(default)]
    pub has_more: bool,
}

/// One content block of a page.
///
/// The type-specific payload lives under a key equal to `type`, e.g.
/// `{"type": "paragraph", "paragraph": {"rich_text": [...]}}`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Block {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

impl Block {
    /// Rich text of the block's payload; empty when the block type carries none.
    pub fn rich_text(&self) -> Result<Vec<RichText>, NotionError> {
        match self
            .fields
            .get(&self.kind)
            .and_then(|payload| payload.get("rich_text"))
        {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(value) => serde_json::from_value(value.clone()).map_err(|e| {
                NotionError::Decode(format!("block {} ({}): {}", self.id, self.kind, e))
            }),
        }
    }
}

/// Result of listing a block's children.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BlockList {
    #[serde(default)]
    pub results: Vec<Block>,
    #[serde(default)]
    pub has_more: bool,
}

/// Error body returned by the Notion API on non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_properties_decode() {
        let page: Page = serde_json::from_value(json!({
            "object": "page",
            "id": "page-1",
            "properties": {
                "Title": {"id": "title", "type": "title", "title": [
                    {"type": "text", "plain_text": "Hello", "annotations": {"bold": true, "italic": false, "code": false}, "href": null}
                ]},
                "Published": {"id": "a", "type": "checkbox", "checkbox": true},
                "Date": {"id": "b", "type": "date", "date": {"start": "2024-01-15", "end": null}},
                "Tag": {"id": "c", "type": "select", "select": {"id": "x", "name": "Travel", "color": "blue"}},
                "Views": {"id": "d", "type": "number", "number": 12}
            }
        }))
        .unwrap();

        let title = page.property("Title").unwrap().fragments();
        assert_eq!(title.len(), 1);
        assert_eq!(title[0].plain_text, "Hello");
        assert!(title[0].annotations.bold);
        assert_eq!(page.property("Published").unwrap().as_checkbox(), Some(true));
        assert_eq!(page.property("Date").unwrap().date_start(), Some("2024-01-15"));
        assert_eq!(page.property("Tag").unwrap().select_name(), Some("Travel"));
        assert_eq!(page.property("Views"), Some(&PropertyValue::Unsupported));
    }

    #[test]
    fn test_empty_date_and_select() {
        let page: Page = serde_json::from_value(json!({
            "id": "page-2",
            "properties": {
                "Date": {"type": "date", "date": null},
                "Tag": {"type": "select", "select": null}
            }
        }))
        .unwrap();

        assert_eq!(page.property("Date").unwrap().date_start(), None);
        assert_eq!(page.property("Tag").unwrap().select_name(), None);
        assert!(page.property("Tag").unwrap().fragments().is_empty());
    }

    #[test]
    fn test_block_rich_text() {
        let block: Block = serde_json::from_value(json!({
            "object": "block",
            "id": "b1",
            "type": "heading_2",
            "has_children": false,
            "heading_2": {"rich_text": [{"plain_text": "Day one"}], "is_toggleable": false}
        }))
        .unwrap();

        assert_eq!(block.kind, "heading_2");
        assert_eq!(block.rich_text().unwrap(), vec![RichText::plain("Day one")]);
    }

    #[test]
    fn test_block_without_rich_text() {
        let block: Block = serde_json::from_value(json!({
            "id": "b2",
            "type": "divider",
            "divider": {}
        }))
        .unwrap();

        assert!(block.rich_text().unwrap().is_empty());
    }

    #[test]
    fn test_block_malformed_rich_text() {
        let block: Block = serde_json::from_value(json!({
            "id": "b3",
            "type": "paragraph",
            "paragraph": {"rich_text": "not a list"}
        }))
        .unwrap();

        assert!(matches!(block.rich_text(), Err(NotionError::Decode(_))));
    }
}
