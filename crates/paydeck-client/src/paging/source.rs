use paydeck_common::PaymentsPage;

use super::PageRequest;
use crate::error::Result;

/// Seam between a page controller and whatever answers its queries.
///
/// The server contract behind this trait: records come back in display
/// order, at most `limit` of them, selected by strict comparison against the
/// cursor key; `total` is the size of the whole set as of the fetch.
pub trait PageSource<K> {
    fn fetch(&self, request: &PageRequest<K>) -> Result<PaymentsPage>;
}
