pub mod filter;
pub mod search;

pub use filter::{Filterable, OrderFilter, StopFilter};
pub use search::Searchable;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryParams {
    pub filter: String,
    pub search: String,
    pub page: usize,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            filter: "all".to_string(),
            search: String::new(),
            page: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryPage<T> {
    pub items: Vec<T>,
    pub total_matching: usize,
    pub total_pages: usize,
    pub page: usize,
    /// Present when the requested page fell outside `1..=total_pages`.
    /// Callers must reconcile their page state with this value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corrected_page: Option<usize>,
}

/// filter → search → paginate over a snapshot. Pure: identical snapshot and
/// params always produce identical output.
pub fn run_query<T>(snapshot: &[T], params: &QueryParams, page_size: usize) -> QueryPage<T>
where
    T: Filterable + Searchable + Clone,
{
    let tokens = search::tokenize(&params.search);
    let matching: Vec<&T> = snapshot
        .iter()
        .filter(|record| record.filter_matches(&params.filter))
        .filter(|record| search::matches_tokens(*record, &tokens))
        .collect();

    let page_size = page_size.max(1);
    let total_matching = matching.len();
    let total_pages = total_matching.div_ceil(page_size).max(1);
    let page = params.page.clamp(1, total_pages);
    let corrected_page = (page != params.page).then_some(page);

    let items = matching
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .cloned()
        .collect();

    QueryPage {
        items,
        total_matching,
        total_pages,
        page,
        corrected_page,
    }
}
