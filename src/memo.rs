// Memoized properties.
// A value slot owned by one object, filled by the first read.

use std::future::Future;

use tokio::sync::OnceCell;
use tracing::debug;

/// Lazily computed value attached to a single owning object.
///
/// The first `get_or_*` call runs the computation and stores its result;
/// every later read returns that stored value. Each owner holds its own
/// slots, so two clients never share a cached value. Nothing is evicted.
///
/// Backed by [`tokio::sync::OnceCell`]: concurrent first reads through a
/// shared reference wait on a single computation rather than racing.
#[derive(Debug)]
pub struct Memoized<T> {
    name: &'static str,
    cell: OnceCell<T>,
}

impl<T> Memoized<T> {
    /// Create an empty slot. `name` only labels log output.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            cell: OnceCell::new(),
        }
    }

    /// The stored value, if it has been computed.
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    pub fn is_computed(&self) -> bool {
        self.cell.initialized()
    }

    /// Return the stored value, computing it on the first call.
    pub async fn get_or_compute<F, Fut>(&self, compute: F) -> &T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        self.cell
            .get_or_init(move || async move {
                debug!(property = self.name, "computing memoized value");
                compute().await
            })
            .await
    }

    /// Like [`get_or_compute`](Self::get_or_compute) for fallible work.
    /// An error is returned as-is and leaves the slot empty.
    pub async fn get_or_try_compute<E, F, Fut>(&self, compute: F) -> Result<&T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.cell
            .get_or_try_init(move || async move {
                debug!(property = self.name, "computing memoized value");
                compute().await
            })
            .await
    }
}
