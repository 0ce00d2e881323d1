//! Cursor based pagination.
//!
//! List calls return one page per response. When more results are
//! available the response carries an `opc-next-page` header, and the cursor
//! it holds is passed back as a query parameter to fetch the next page.
use crate::Request;

/// Trait for any request whose response is paginated.
pub trait PaginatedRequest: Request {
    /// The query parameter carrying the page cursor.
    const PAGE_PARAM: &'static str = "page";

    /// Specify the initial page to start pagination from. Defaults to `None`, which means
    /// pagination will begin from whatever page the API defines as the initial page.
    fn initial_page(&self) -> Option<String> {
        None
    }
}

#[derive(Clone, Debug, PartialEq)]
/// The current pagination state.
pub enum State<T> {
    /// State associated with the initial request.
    Start(Option<T>),
    /// State associated with continuing pagination.
    Next(T),
    /// State denoting that the last page has been reached.
    End,
}

impl<T> Default for State<T> {
    fn default() -> State<T> {
        State::Start(None)
    }
}
