//! Read operations and page/block projections.

use std::cmp::Ordering;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use super::properties;
use crate::config::Config;
use crate::models::{ContentBlock, CountryList, PostContent, PostSummary, VisitedCountry};
use crate::notion::{Block, ContentSource, DatabaseQuery, Direction, Filter, NotionError, Page};
use crate::richtext;

/// Month/year label style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStyle {
    /// "Jan 2024"
    Short,
    /// "January 2024"
    Long,
}

/// Repository for all content reads.
#[derive(Clone)]
pub struct ContentRepository {
    source: Arc<dyn ContentSource>,
    posts_database_id: String,
    countries_database_id: String,
}

impl ContentRepository {
    pub fn new(source: Arc<dyn ContentSource>, config: &Config) -> Self {
        Self {
            source,
            posts_database_id: config.posts_database_id.clone(),
            countries_database_id: config.countries_database_id.clone(),
        }
    }

    // ==================== POSTS ====================

    /// List published posts, newest first.
    pub async fn list_posts(&self) -> Result<Vec<PostSummary>, NotionError> {
        let query = DatabaseQuery::new()
            .filter(Filter::checkbox(properties::PUBLISHED, true))
            .sort(properties::DATE, Direction::Descending);

        let response = self
            .source
            .query_database(&self.posts_database_id, &query)
            .await?;
        if response.has_more {
            tracing::warn!("Posts query has more results; only the first page is returned");
        }

        let mut posts: Vec<PostSummary> = response
            .results
            .iter()
            .filter(|page| is_published(page))
            .map(post_summary_from_page)
            .collect();
        posts.sort_by(|a, b| newest_first(a.date.as_deref(), b.date.as_deref()));

        tracing::debug!("Listed {} published posts", posts.len());
        Ok(posts)
    }

    /// Get a published post and its content blocks by slug.
    pub async fn get_post(&self, slug: &str) -> Result<Option<PostContent>, NotionError> {
        let query = DatabaseQuery::new().filter(Filter::And(vec![
            Filter::checkbox(properties::PUBLISHED, true),
            Filter::rich_text_equals(properties::SLUG, slug),
        ]));

        let response = self
            .source
            .query_database(&self.posts_database_id, &query)
            .await?;

        let Some(page) = response
            .results
            .iter()
            .find(|page| is_published(page) && text_of(page, properties::SLUG) == slug)
        else {
            return Ok(None);
        };

        let children = self.source.list_block_children(&page.id).await?;
        if children.has_more {
            tracing::warn!(
                "Post {} has more blocks; only the first page is returned",
                page.id
            );
        }

        let blocks = children
            .results
            .iter()
            .map(content_block_from_block)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(PostContent {
            title: text_of(page, properties::TITLE),
            month_year: month_year(date_of(page), MonthStyle::Long),
            tag: tag_of(page),
            blocks,
        }))
    }

    // ==================== COUNTRIES ====================

    /// List visited countries sorted by name.
    pub async fn list_countries(&self) -> Result<CountryList, NotionError> {
        let query = DatabaseQuery::new().sort(properties::COUNTRY_NAME, Direction::Ascending);

        let response = self
            .source
            .query_database(&self.countries_database_id, &query)
            .await?;
        if response.has_more {
            tracing::warn!("Countries query has more results; only the first page is returned");
        }

        let countries = countries_from_pages(&response.results);
        tracing::debug!("Listed {} visited countries", countries.visited_codes.len());
        Ok(countries)
    }
}

// ==================== PROJECTIONS ====================

/// Convert a posts-database row to a post summary.
pub fn post_summary_from_page(page: &Page) -> PostSummary {
    let date = date_of(page);

    PostSummary {
        id: page.id.clone(),
        title: text_of(page, properties::TITLE),
        slug: text_of(page, properties::SLUG),
        date: date.map(str::to_string),
        month_year: month_year(date, MonthStyle::Short),
        tag: tag_of(page),
        excerpt: text_of(page, properties::EXCERPT),
    }
}

/// Convert a content block to its type tag and HTML-annotated text.
pub fn content_block_from_block(block: &Block) -> Result<ContentBlock, NotionError> {
    Ok(ContentBlock {
        kind: block.kind.clone(),
        text: richtext::to_html(&block.rich_text()?),
    })
}

/// Build the visited-country lookup and its parallel lists in one pass.
///
/// Rows without a code or a name are skipped. A repeated code overwrites the lookup entry
/// but is still pushed onto both lists.
pub fn countries_from_pages(pages: &[Page]) -> CountryList {
    let mut countries = CountryList::default();

    for page in pages {
        let code = text_of(page, properties::COUNTRY_CODE).trim().to_uppercase();
        let name = text_of(page, properties::COUNTRY_NAME).trim().to_string();
        if code.is_empty() || name.is_empty() {
            continue;
        }

        let flag = text_of(page, properties::COUNTRY_FLAG).trim().to_string();
        let note = text_of(page, properties::COUNTRY_NOTE).trim().to_string();

        countries.visited.insert(
            code.clone(),
            VisitedCountry {
                name: name.clone(),
                flag,
                note,
            },
        );
        countries.visited_codes.push(code);
        countries.visited_names.push(name);
    }

    countries
}

/// Month/year label for an ISO date; empty when absent or unparseable.
///
/// Only the calendar date part is used, so a date-time value keeps the day it was written
/// on regardless of its offset.
pub fn month_year(date: Option<&str>, style: MonthStyle) -> String {
    let Some(parsed) = date.and_then(parse_calendar_date) else {
        return String::new();
    };

    let format = match style {
        MonthStyle::Short => "%b %Y",
        MonthStyle::Long => "%B %Y",
    };
    parsed.format(format).to_string()
}

fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let day = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
}

/// Point in time of an upstream date: RFC 3339 date-times by their instant, plain dates at
/// UTC midnight.
fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

/// Descending by date, undated or unparseable rows last.
fn newest_first(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a.and_then(parse_instant), b.and_then(parse_instant)) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn is_published(page: &Page) -> bool {
    page.property(properties::PUBLISHED)
        .and_then(|p| p.as_checkbox())
        .unwrap_or(false)
}

fn text_of(page: &Page, name: &str) -> String {
    page.property(name)
        .map(|p| richtext::plain_text(p.fragments()))
        .unwrap_or_default()
}

fn date_of(page: &Page) -> Option<&str> {
    page.property(properties::DATE).and_then(|p| p.date_start())
}

fn tag_of(page: &Page) -> String {
    match page.property(properties::TAG) {
        Some(prop) => prop
            .select_name()
            .map(str::to_string)
            .unwrap_or_else(|| richtext::plain_text(prop.fragments())),
        None => String::new(),
    }
}
