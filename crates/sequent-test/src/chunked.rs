//! A sample external container and its provider adapter.
//!
//! `Chunked` stands in for a container family the engine core knows nothing
//! about; tests register [`chunked_finder`] and build pipelines over it
//! through `sequent::from_provider`.

use std::sync::Arc;

use sequent::ProviderSource;

/// A container storing its elements in segments.
#[derive(Debug, Clone)]
pub struct Chunked<T> {
    chunks: Arc<Vec<Vec<T>>>,
}

impl<T> Chunked<T> {
    pub fn new(chunks: Vec<Vec<T>>) -> Self {
        Chunked {
            chunks: Arc::new(chunks),
        }
    }
}

struct ChunkedAdapter<T> {
    chunks: Arc<Vec<Vec<T>>>,
}

impl<T> ProviderSource<T> for ChunkedAdapter<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn enumerate(&self) -> Box<dyn Iterator<Item = T> + '_> {
        Box::new(self.chunks.iter().flatten().cloned())
    }

    fn try_len(&self) -> Option<usize> {
        Some(self.chunks.iter().map(Vec::len).sum())
    }
}

/// Finder producing an adapter for [`Chunked`] containers; register it with
/// `sequent::register_source_finder`.
pub fn chunked_finder<T>(container: &Chunked<T>) -> Option<Arc<dyn ProviderSource<T>>>
where
    T: Clone + Send + Sync + 'static,
{
    Some(Arc::new(ChunkedAdapter {
        chunks: Arc::clone(&container.chunks),
    }))
}
