//! Database query bodies (`POST /databases/{id}/query`).

use serde_json::{json, Map, Value};

/// Property filter, serialized in Notion's filter syntax.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Checkbox property equals a value
    Checkbox { property: String, equals: bool },
    /// Rich text property equals a string exactly (case-sensitive)
    RichTextEquals { property: String, equals: String },
    /// All sub-filters must match
    And(Vec<Filter>),
}

impl Filter {
    pub fn checkbox(property: &str, equals: bool) -> Self {
        Filter::Checkbox {
            property: property.to_string(),
            equals,
        }
    }

    pub fn rich_text_equals(property: &str, equals: &str) -> Self {
        Filter::RichTextEquals {
            property: property.to_string(),
            equals: equals.to_string(),
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Filter::Checkbox { property, equals } => json!({
                "property": property,
                "checkbox": { "equals": equals }
            }),
            Filter::RichTextEquals { property, equals } => json!({
                "property": property,
                "rich_text": { "equals": equals }
            }),
            Filter::And(filters) => json!({
                "and": filters.iter().map(Filter::to_json).collect::<Vec<_>>()
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ascending => "ascending",
            Direction::Descending => "descending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub property: String,
    pub direction: Direction,
}

/// Filter and sort for one database query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatabaseQuery {
    pub filter: Option<Filter>,
    pub sorts: Vec<Sort>,
}

impl DatabaseQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn sort(mut self, property: &str, direction: Direction) -> Self {
        self.sorts.push(Sort {
            property: property.to_string(),
            direction,
        });
        self
    }

    /// Request body for the query endpoint.
    pub fn to_body(&self) -> Value {
        let mut body = Map::new();
        if let Some(filter) = &self.filter {
            body.insert("filter".to_string(), filter.to_json());
        }
        if !self.sorts.is_empty() {
            let sorts = self
                .sorts
                .iter()
                .map(|s| json!({ "property": s.property, "direction": s.direction.as_str() }))
                .collect();
            body.insert("sorts".to_string(), Value::Array(sorts));
        }
        Value::Object(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_sorted_body() {
        let query = DatabaseQuery::new()
            .filter(Filter::checkbox("Published", true))
            .sort("Date", Direction::Descending);

        assert_eq!(
            query.to_body(),
            json!({
                "filter": {"property": "Published", "checkbox": {"equals": true}},
                "sorts": [{"property": "Date", "direction": "descending"}]
            })
        );
    }

    #[test]
    fn test_and_filter_body() {
        let query = DatabaseQuery::new().filter(Filter::And(vec![
            Filter::checkbox("Published", true),
            Filter::rich_text_equals("Slug", "my-Post"),
        ]));

        assert_eq!(
            query.to_body(),
            json!({
                "filter": {"and": [
                    {"property": "Published", "checkbox": {"equals": true}},
                    {"property": "Slug", "rich_text": {"equals": "my-Post"}}
                ]}
            })
        );
    }

    #[test]
    fn test_empty_query_body() {
        assert_eq!(DatabaseQuery::new().to_body(), json!({}));
    }
}
