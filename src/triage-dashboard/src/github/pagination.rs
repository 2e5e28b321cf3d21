//! Cursor pagination over GraphQL connections.

use super::GitHubError;
use tracing::{debug, error, warn};

/// One page of a paginated GraphQL connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items on this page.
    pub items: Vec<T>,
    /// Whether the connection reports more pages.
    pub has_next_page: bool,
    /// Cursor of the last item, passed as `after` for the next page.
    pub end_cursor: Option<String>,
}

/// A query that can be fetched one page at a time.
pub(crate) trait PagedQuery {
    type Item;

    /// Describes the query for log output.
    fn describe(&self) -> String;

    /// Fetches the page following `cursor`, or the first page when `cursor` is `None`.
    async fn fetch_page(&mut self, cursor: Option<&str>) -> Result<Page<Self::Item>, GitHubError>;
}

/// Fetches every page of `query`, in order.
///
/// Pages are requested strictly one after another. The loop ends at the first page
/// that reports no further pages or carries no cursor. The first failed page aborts
/// the whole fetch; already collected items are dropped.
pub(crate) async fn collect_pages<Q: PagedQuery>(query: &mut Q) -> Result<Vec<Q::Item>, GitHubError> {
    let mut items = Vec::new();
    let mut cursor: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let page = match query.fetch_page(cursor.as_deref()).await {
            Ok(page) => page,
            Err(e) => {
                error!(
                    query = %query.describe(),
                    cursor = ?cursor,
                    pages_fetched = pages,
                    items_fetched = items.len(),
                    error = %e,
                    "Query failed"
                );
                return Err(e);
            }
        };
        pages += 1;
        items.extend(page.items);

        if !page.has_next_page {
            break;
        }

        match page.end_cursor {
            Some(next) => cursor = Some(next),
            None => {
                warn!(
                    query = %query.describe(),
                    "Page reported more results but no cursor, stopping"
                );
                break;
            }
        }
    }

    debug!(query = %query.describe(), pages, count = items.len(), "Fetched all pages");
    Ok(items)
}
