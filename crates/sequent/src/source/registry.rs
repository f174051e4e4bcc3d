//! External source-adapter finders.
//!
//! Containers the core knows nothing about plug in through here: a provider
//! registers a finder keyed by the container's concrete type, and pipeline
//! construction over such a container asks the registry for an adapter.
//!
//! The registry is a single append-only snapshot swapped atomically under a
//! lock; lookups clone the current snapshot and run lock-free. Registration
//! is idempotent - a finder id already present for the same container type
//! is ignored.

use std::any::{Any, TypeId};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use tracing::debug;

use super::Source;

/// Capability surface an external provider implements for its container.
///
/// Mirrors [`Source`] with dynamic dispatch at the boundary; the capability
/// probes default to declining.
pub trait ProviderSource<T>: Send + Sync {
    /// Starts an independent traversal.
    fn enumerate(&self) -> Box<dyn Iterator<Item = T> + '_>;

    /// The whole container as one contiguous block, if backed by one.
    fn try_slice(&self) -> Option<&[T]> {
        None
    }

    /// The element count, if known without traversal.
    fn try_len(&self) -> Option<usize> {
        None
    }
}

/// A provider-backed source found through the registry.
pub struct DynSource<T> {
    adapter: Arc<dyn ProviderSource<T>>,
}

impl<T> Clone for DynSource<T> {
    fn clone(&self) -> Self {
        DynSource {
            adapter: Arc::clone(&self.adapter),
        }
    }
}

impl<T> std::fmt::Debug for DynSource<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynSource").finish()
    }
}

impl<T> Source for DynSource<T>
where
    T: Clone + Send + Sync + 'static,
{
    type Item = T;

    type Iter<'s>
        = Box<dyn Iterator<Item = T> + 's>
    where
        Self: 's;

    fn enumerate(&self) -> Box<dyn Iterator<Item = T> + '_> {
        self.adapter.enumerate()
    }

    fn try_slice(&self) -> Option<&[T]> {
        self.adapter.try_slice()
    }

    fn try_len(&self) -> Option<usize> {
        self.adapter.try_len()
    }
}

type FinderFn = Box<dyn Fn(&dyn Any) -> Option<Box<dyn Any>> + Send + Sync>;

struct FinderEntry {
    id: &'static str,
    container: TypeId,
    find: FinderFn,
}

static FINDERS: OnceLock<RwLock<Arc<[Arc<FinderEntry>]>>> = OnceLock::new();

fn finders() -> &'static RwLock<Arc<[Arc<FinderEntry>]>> {
    FINDERS.get_or_init(|| RwLock::new(Arc::from(Vec::new())))
}

fn snapshot() -> Arc<[Arc<FinderEntry>]> {
    finders()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Registers a finder producing adapters for containers of type `C`.
///
/// Append-only and idempotent: an id already registered for the same
/// container type is a no-op, and earlier registrations take precedence
/// during lookup.
pub fn register_source_finder<C, T, F>(id: &'static str, find: F)
where
    C: Any,
    T: Clone + Send + Sync + 'static,
    F: Fn(&C) -> Option<Arc<dyn ProviderSource<T>>> + Send + Sync + 'static,
{
    let mut guard = finders().write().unwrap_or_else(PoisonError::into_inner);
    let container = TypeId::of::<C>();
    if guard
        .iter()
        .any(|entry| entry.id == id && entry.container == container)
    {
        debug!(finder = id, "source finder already registered; ignored");
        return;
    }

    let erased: FinderFn = Box::new(move |any| {
        let concrete = any.downcast_ref::<C>()?;
        let adapter = find(concrete)?;
        Some(Box::new(adapter) as Box<dyn Any>)
    });

    let mut entries: Vec<Arc<FinderEntry>> = guard.iter().cloned().collect();
    entries.push(Arc::new(FinderEntry {
        id,
        container,
        find: erased,
    }));
    *guard = Arc::from(entries);
    debug!(finder = id, "source finder registered");
}

/// Looks up a provider adapter for `container`, in registration order.
pub fn find_provider<C, T>(container: &C) -> Option<DynSource<T>>
where
    C: Any,
    T: Clone + Send + Sync + 'static,
{
    let wanted = TypeId::of::<C>();
    for entry in snapshot()
        .iter()
        .filter(|entry| entry.container == wanted)
    {
        if let Some(found) = (entry.find)(container) {
            if let Ok(adapter) = found.downcast::<Arc<dyn ProviderSource<T>>>() {
                return Some(DynSource { adapter: *adapter });
            }
        }
    }
    None
}

/// The ids of every registered finder, in registration order.
pub fn registered_finders() -> Vec<&'static str> {
    snapshot().iter().map(|entry| entry.id).collect()
}
