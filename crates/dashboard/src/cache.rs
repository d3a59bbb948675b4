/// Memoizes the most recently computed view, keyed on the query parameters
/// that produced it.
///
/// Recomputation is idempotent and side-effect-free, so this is purely a
/// cost saving: a render cycle that re-requests the same parameters reuses
/// the stored view instead of re-running the O(n log n) query. The cache
/// does not observe the underlying snapshot; callers that swap in a new
/// snapshot must `clear()` first.
#[derive(Debug)]
pub struct ViewCache<Q, V> {
    slot: Option<(Q, V)>,
}

impl<Q, V> Default for ViewCache<Q, V> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<Q, V> ViewCache<Q, V>
where
    Q: Clone + PartialEq,
{
    pub fn new() -> Self {
        Self { slot: None }
    }

    /// Returns the view for `params`, computing it only when the parameters
    /// differ from the previous call.
    pub fn get_or_compute(&mut self, params: &Q, compute: impl FnOnce(&Q) -> V) -> &V {
        match self.slot.take() {
            Some((cached, view)) if cached == *params => {
                let (_, view) = self.slot.insert((cached, view));
                view
            }
            _ => {
                let (_, view) = self.slot.insert((params.clone(), compute(params)));
                view
            }
        }
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }
}
