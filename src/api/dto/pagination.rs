//! Pagination query parameters and the page payload.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    10
}

/// Query parameters for plain paginated listings.
#[derive(Debug, Deserialize, IntoParams, Validate)]
pub struct PageParams {
    /// Page number (1-based)
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    #[param(minimum = 1, example = 1)]
    pub page: u32,

    /// Number of items per page
    #[serde(default = "default_page_size", rename = "pagesize")]
    #[validate(range(min = 1, max = 100, message = "Page size must be between 1 and 100"))]
    #[param(minimum = 1, maximum = 100, example = 10)]
    pub page_size: u32,
}

impl PageParams {
    /// Offset for database queries.
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.page_size)
    }

    /// Limit for database queries.
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

/// Query parameters for listings that also accept a search keyword.
#[derive(Debug, Deserialize, IntoParams, Validate)]
pub struct ListParams {
    /// Keyword to search for; empty or absent means a plain listing
    #[serde(default)]
    pub keyword: String,

    /// Page number (1-based)
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    #[param(minimum = 1, example = 1)]
    pub page: u32,

    /// Number of items per page
    #[serde(default = "default_page_size", rename = "pagesize")]
    #[validate(range(min = 1, max = 100, message = "Page size must be between 1 and 100"))]
    #[param(minimum = 1, maximum = 100, example = 10)]
    pub page_size: u32,
}

impl ListParams {
    /// The keyword, if one was actually given.
    pub fn keyword(&self) -> Option<&str> {
        if self.keyword.is_empty() {
            None
        } else {
            Some(&self.keyword)
        }
    }

    pub fn page_params(&self) -> PageParams {
        PageParams {
            page: self.page,
            page_size: self.page_size,
        }
    }
}

/// One page of a listing, with the metadata the caller needs to page on.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Total number of pages for the full result set
    #[schema(example = 3)]
    pub total_page: u32,
    /// The requested page (1-based)
    #[schema(example = 1)]
    pub now_page: u32,
    /// The requested page size
    #[schema(example = 10)]
    pub now_page_size: u32,
    /// Items on this page, in listing order
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Builds a page from a slice of items plus the total item count.
    pub fn new(items: Vec<T>, params: &PageParams, total_items: u64) -> Self {
        Self {
            total_page: total_pages(total_items, params.page_size),
            now_page: params.page,
            now_page_size: params.page_size,
            items,
        }
    }
}

/// `ceil(total_items / page_size)` in integer arithmetic.
pub fn total_pages(total_items: u64, page_size: u32) -> u32 {
    if total_items == 0 {
        0
    } else {
        ((total_items - 1) / u64::from(page_size) + 1) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn twenty_five_items_in_pages_of_ten_is_three_pages() {
        assert_eq!(total_pages(25, 10), 3);
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        assert_eq!(total_pages(30, 10), 3);
    }

    #[test]
    fn zero_items_is_zero_pages() {
        assert_eq!(total_pages(0, 10), 0);
    }

    #[test]
    fn offset_is_zero_based() {
        let params = PageParams {
            page: 3,
            page_size: 10,
        };
        assert_eq!(params.offset(), 20);
        assert_eq!(params.limit(), 10);
    }

    #[test]
    fn empty_keyword_means_plain_listing() {
        let params = ListParams {
            keyword: String::new(),
            page: 1,
            page_size: 10,
        };
        assert_eq!(params.keyword(), None);

        let params = ListParams {
            keyword: "pandemic".to_string(),
            page: 1,
            page_size: 10,
        };
        assert_eq!(params.keyword(), Some("pandemic"));
    }

    #[test]
    fn page_serializes_with_camel_case_metadata() {
        let params = PageParams {
            page: 1,
            page_size: 10,
        };
        let page = Page::new(vec![1, 2, 3], &params, 25);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["totalPage"], 3);
        assert_eq!(json["nowPage"], 1);
        assert_eq!(json["nowPageSize"], 10);
        assert_eq!(json["items"].as_array().unwrap().len(), 3);
    }

    proptest! {
        #[test]
        fn total_pages_matches_ceiling_division(total in 1u64..100_000, size in 1u32..=100) {
            let expected = total.div_ceil(u64::from(size)) as u32;
            prop_assert_eq!(total_pages(total, size), expected);
        }

        #[test]
        fn last_page_is_never_empty(total in 1u64..100_000, size in 1u32..=100) {
            let pages = total_pages(total, size);
            let items_before_last = u64::from(pages - 1) * u64::from(size);
            prop_assert!(items_before_last < total);
        }
    }
}
