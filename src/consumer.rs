//! Hand-off of a built index to the component that serves it.

use crate::index::SymbolIndex;
use std::sync::Arc;

/// The component a finished [`SymbolIndex`] is handed to (a search widget,
/// a query service, a renderer).
///
/// `init_search` takes `self` by value, so a consumer is initialized
/// exactly once.
pub trait IndexConsumer {
    type Output;

    fn init_search(self, index: Arc<SymbolIndex>) -> Self::Output;
}

impl<F, T> IndexConsumer for F
where
    F: FnOnce(Arc<SymbolIndex>) -> T,
{
    type Output = T;

    fn init_search(self, index: Arc<SymbolIndex>) -> T {
        self(index)
    }
}
