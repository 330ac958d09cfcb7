//! Request de-duplication keyed by request parameters.

use std::{
    cell::RefCell,
    collections::{BTreeMap, VecDeque},
    future::Future,
};

use futures::future::{FutureExt, LocalBoxFuture, Shared};

pub type SharedRequest<V> = Shared<LocalBoxFuture<'static, Result<V, String>>>;

/// Keys kept by [`RequestCache::new`].
pub const RECENT_REQUESTS: usize = 8;

/// Maps a parameter tuple to one shared request.
///
/// Awaiting a key that is in flight joins the running request, awaiting a key
/// that already succeeded resolves immediately. A failed request stays in the
/// map only until the same key is asked for again, which starts a new one.
///
/// Only the most recently requested keys are kept. Evicting an entry never
/// cancels it: whoever holds the shared future still gets the result.
pub struct RequestCache<K, V> {
    entries: RefCell<BTreeMap<K, SharedRequest<V>>>,
    recent: RefCell<VecDeque<K>>,
    capacity: usize,
}

impl<K: Ord + Clone, V: Clone + 'static> Default for RequestCache<K, V> {
    fn default() -> Self {
        Self::with_capacity(RECENT_REQUESTS)
    }
}

impl<K: Ord + Clone, V: Clone + 'static> RequestCache<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// `capacity` is clamped to at least one so the current key always stays.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RefCell::new(BTreeMap::new()),
            recent: RefCell::new(VecDeque::new()),
            capacity: capacity.max(1),
        }
    }

    pub fn request<F, Fut>(&self, key: &K, start: F) -> SharedRequest<V>
    where
        F: FnOnce(K) -> Fut,
        Fut: Future<Output = Result<V, String>> + 'static,
    {
        self.touch(key);
        let mut entries = self.entries.borrow_mut();
        if let Some(existing) = entries.get(key) {
            if !matches!(existing.peek(), Some(Err(_))) {
                return existing.clone();
            }
        }
        let request = start(key.clone()).boxed_local().shared();
        entries.insert(key.clone(), request.clone());
        request
    }

    /// Marks `key` as the newest and drops the oldest keys past capacity.
    fn touch(&self, key: &K) {
        let mut recent = self.recent.borrow_mut();
        recent.retain(|k| k != key);
        recent.push_back(key.clone());
        let mut entries = self.entries.borrow_mut();
        while recent.len() > self.capacity {
            if let Some(oldest) = recent.pop_front() {
                entries.remove(&oldest);
            }
        }
    }
}

/// What the view observes for the current request.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchStatus<V> {
    Pending,
    Ready(V),
    Failed(String),
}

impl<V: Clone> FetchStatus<V> {
    /// `completed` is the last finished request together with the key it was
    /// issued for. A completion for any other key is stale and reads as pending.
    pub fn for_request<K: PartialEq>(current: &K, completed: Option<&(K, Result<V, String>)>) -> Self {
        match completed {
            Some((key, _)) if key != current => Self::Pending,
            Some((_, Ok(value))) => Self::Ready(value.clone()),
            Some((_, Err(message))) => Self::Failed(message.clone()),
            None => Self::Pending,
        }
    }
}
