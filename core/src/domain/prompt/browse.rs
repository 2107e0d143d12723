//! Server-independent model of the client's list state: search, category
//! filter, sort, fixed-size pagination and the optimistic splices the UI
//! applies after each successful mutation.

use std::cmp::Ordering;

use crate::domain::prompt::entities::prompt::Prompt;

pub const PAGE_SIZE: usize = 12;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    Title,
    Category,
    Author,
}

impl SortField {
    fn value<'a>(&self, prompt: &'a Prompt) -> Option<&'a str> {
        match self {
            SortField::Title => Some(prompt.title.as_str()),
            SortField::Category => Some(prompt.category.as_str()),
            SortField::Author => prompt.author.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort: SortField,
    /// 1-based; out-of-range values are clamped to the valid page range.
    pub page: usize,
}

impl Default for BrowseQuery {
    fn default() -> Self {
        Self {
            search: None,
            category: None,
            sort: SortField::default(),
            page: 1,
        }
    }
}

/// One page of the filtered, sorted library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub items: Vec<Prompt>,
    pub page: usize,
    pub page_count: usize,
    pub total: usize,
}

impl PageView {
    pub fn has_next(&self) -> bool {
        self.page < self.page_count
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// The client's in-memory copy of the library, newest first. Mutation
/// results are spliced in optimistically instead of refetching the list.
#[derive(Debug, Clone, Default)]
pub struct PromptBrowser {
    prompts: Vec<Prompt>,
}

impl PromptBrowser {
    pub fn new(prompts: Vec<Prompt>) -> Self {
        Self { prompts }
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    /// A created record lands at the front, where a refetch would put it.
    pub fn apply_created(&mut self, prompt: Prompt) {
        self.prompts.insert(0, prompt);
    }

    /// An updated record replaces its entry in place, keeping its position.
    pub fn apply_updated(&mut self, prompt: Prompt) {
        if let Some(stored) = self.prompts.iter_mut().find(|p| p.id == prompt.id) {
            *stored = prompt;
        }
    }

    pub fn apply_deleted(&mut self, id: i64) {
        self.prompts.retain(|p| p.id != id);
    }

    pub fn view(&self, query: &BrowseQuery) -> PageView {
        let needle = query
            .search
            .as_deref()
            .map(str::to_lowercase)
            .filter(|s| !s.is_empty());

        let mut hits: Vec<&Prompt> = self
            .prompts
            .iter()
            .filter(|p| {
                needle
                    .as_deref()
                    .is_none_or(|needle| matches_search(p, needle))
            })
            .filter(|p| {
                query
                    .category
                    .as_deref()
                    .is_none_or(|category| p.category == category)
            })
            .collect();

        // Stable sort: records whose sort field is missing compare equal and
        // keep their relative (newest-first) order.
        hits.sort_by(|a, b| compare_by(query.sort, a, b));

        let total = hits.len();
        let page_count = total.div_ceil(PAGE_SIZE).max(1);
        let page = query.page.clamp(1, page_count);
        let start = (page - 1) * PAGE_SIZE;
        let items = hits
            .into_iter()
            .skip(start)
            .take(PAGE_SIZE)
            .cloned()
            .collect();

        PageView {
            items,
            page,
            page_count,
            total,
        }
    }
}

fn matches_search(prompt: &Prompt, needle_lower: &str) -> bool {
    [
        Some(prompt.title.as_str()),
        prompt.description.as_deref(),
        Some(prompt.prompt.as_str()),
        Some(prompt.category.as_str()),
        Some(prompt.kind.as_str()),
        prompt.author.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(needle_lower))
}

// A missing sort field orders as empty: records lacking it stay mutually
// equal (stable sort keeps their relative order) and the comparator remains
// a total order, which sort_by requires.
fn compare_by(field: SortField, a: &Prompt, b: &Prompt) -> Ordering {
    let left = field.value(a).unwrap_or_default();
    let right = field.value(b).unwrap_or_default();
    left.to_lowercase().cmp(&right.to_lowercase())
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    fn prompt(id: i64, title: &str, category: &str, author: Option<&str>) -> Prompt {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(id);
        Prompt {
            id,
            title: title.to_string(),
            description: None,
            prompt: format!("body of {title}"),
            category: category.to_string(),
            kind: "Compose".to_string(),
            author: author.map(str::to_string),
            created_at: at,
            updated_at: at,
        }
    }

    fn library(count: i64) -> PromptBrowser {
        PromptBrowser::new(
            (0..count)
                .rev()
                .map(|i| prompt(i + 1, &format!("Prompt {:02}", i + 1), "Writing", None))
                .collect(),
        )
    }

    #[test]
    fn test_search_case_insensitive_across_fields() {
        let mut haiku = prompt(1, "Haiku helper", "Writing", Some("ada"));
        haiku.description = Some("Turns notes into a POEM".to_string());
        let browser = PromptBrowser::new(vec![
            haiku,
            prompt(2, "SQL tuner", "Coding / Dev", None),
            prompt(3, "Poem starter", "Creative / Fun", None),
        ]);

        let view = browser.view(&BrowseQuery {
            search: Some("poem".to_string()),
            ..BrowseQuery::default()
        });

        let ids: Vec<i64> = view.items.iter().map(|p| p.id).collect();
        assert_eq!(view.total, 2);
        assert!(ids.contains(&1));
        assert!(ids.contains(&3));
        assert!(!ids.contains(&2));
    }

    #[test]
    fn test_records_without_searched_field_do_not_match() {
        let browser = PromptBrowser::new(vec![
            prompt(1, "No author here", "Writing", None),
            prompt(2, "Signed", "Writing", Some("poem-bot")),
        ]);

        let view = browser.view(&BrowseQuery {
            search: Some("poem".to_string()),
            ..BrowseQuery::default()
        });

        assert_eq!(view.total, 1);
        assert_eq!(view.items[0].id, 2);
    }

    #[test]
    fn test_category_filter_conjunctive_with_search() {
        let browser = PromptBrowser::new(vec![
            prompt(1, "Poem one", "Writing", None),
            prompt(2, "Poem two", "Creative / Fun", None),
        ]);

        let view = browser.view(&BrowseQuery {
            search: Some("poem".to_string()),
            category: Some("Creative / Fun".to_string()),
            ..BrowseQuery::default()
        });

        assert_eq!(view.total, 1);
        assert_eq!(view.items[0].id, 2);
    }

    #[test]
    fn test_thirteen_records_split_into_two_pages() {
        let browser = library(13);

        let first = browser.view(&BrowseQuery::default());
        assert_eq!(first.items.len(), PAGE_SIZE);
        assert_eq!(first.page_count, 2);
        assert!(first.has_next());
        assert!(!first.has_previous());

        let second = browser.view(&BrowseQuery {
            page: 2,
            ..BrowseQuery::default()
        });
        assert_eq!(second.items.len(), 1);
        assert!(!second.has_next());
        assert!(second.has_previous());
    }

    #[test]
    fn test_out_of_range_pages_clamp() {
        let browser = library(13);
        let clamped = browser.view(&BrowseQuery {
            page: 99,
            ..BrowseQuery::default()
        });
        assert_eq!(clamped.page, 2);

        let empty = PromptBrowser::default().view(&BrowseQuery::default());
        assert_eq!(empty.page, 1);
        assert_eq!(empty.page_count, 1);
        assert!(empty.items.is_empty());
    }

    #[test]
    fn test_sort_ascending_with_missing_fields_equal() {
        let browser = PromptBrowser::new(vec![
            prompt(1, "zebra", "Writing", None),
            prompt(2, "Apple", "Writing", Some("zoe")),
            prompt(3, "mango", "Writing", None),
            prompt(4, "Banana", "Writing", Some("ada")),
        ]);

        let by_title = browser.view(&BrowseQuery::default());
        let titles: Vec<&str> = by_title.items.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Apple", "Banana", "mango", "zebra"]);

        // Authorless records keep their relative order; authored ones sort.
        let by_author = browser.view(&BrowseQuery {
            sort: SortField::Author,
            ..BrowseQuery::default()
        });
        let ids: Vec<i64> = by_author.items.iter().map(|p| p.id).collect();
        let pos = |id: i64| ids.iter().position(|i| *i == id).unwrap();
        assert!(pos(4) < pos(2));
        assert!(pos(1) < pos(3));
        assert_eq!(&ids[..2], &[1, 3]);
    }

    #[test]
    fn test_optimistic_splices_mirror_mutations() {
        let mut browser = library(3);

        browser.apply_created(prompt(10, "Fresh", "Writing", None));
        assert_eq!(browser.prompts()[0].id, 10);

        let mut replacement = prompt(2, "Renamed", "Writing", None);
        replacement.kind = "Rewrite".to_string();
        browser.apply_updated(replacement);
        let position = browser.prompts().iter().position(|p| p.id == 2).unwrap();
        assert_eq!(browser.prompts()[position].title, "Renamed");
        assert_eq!(browser.prompts().len(), 4);

        browser.apply_deleted(10);
        assert!(browser.prompts().iter().all(|p| p.id != 10));
        assert_eq!(browser.prompts().len(), 3);
    }

    #[test]
    fn test_splice_update_of_unknown_id_is_noop() {
        let mut browser = library(2);
        browser.apply_updated(prompt(99, "Ghost", "Writing", None));
        assert_eq!(browser.prompts().len(), 2);
        assert!(browser.prompts().iter().all(|p| p.id != 99));
    }
}
