use super::{RouterError, RouterOptions, RouterResult};
use crate::tree::{Match, Route, Tree};
use crate::types::BoxError;
use parking_lot::RwLock;
use std::sync::{Arc, OnceLock};

/// Build-then-publish wrapper around a [`Tree`].
///
/// Routes are added under a write lock while the router is open. `seal`
/// moves the tree into an immutable `Arc` snapshot; from then on lookups
/// read the snapshot without locking and further additions are rejected.
#[derive(Debug)]
pub struct Router<H> {
    building: RwLock<Tree<H>>,
    readonly: OnceLock<Arc<Tree<H>>>,
}

impl<H: PartialEq> Router<H> {
    pub fn new(options: Option<RouterOptions>) -> RouterResult<Self> {
        let tree = Tree::with_options(options.unwrap_or_default())?;
        Ok(Self {
            building: RwLock::new(tree),
            readonly: OnceLock::new(),
        })
    }

    pub fn add(&self, pattern: &str, handler: H) -> RouterResult<()> {
        self.add_route(pattern, Route::Handler(handler))
    }

    pub fn add_with<F>(&self, pattern: &str, transform: F) -> RouterResult<()>
    where
        F: FnOnce(Option<&H>) -> Result<H, BoxError> + Send + 'static,
    {
        self.add_route(pattern, Route::Transform(Box::new(transform)))
    }

    pub fn add_subtree(&self, pattern: &str, subtree: Tree<H>) -> RouterResult<()> {
        self.add_route(pattern, Route::Subtree(subtree))
    }

    pub fn add_route(&self, pattern: &str, route: Route<H>) -> RouterResult<()> {
        let mut guard = self.building.write();

        if self.readonly.get().is_some() {
            return Err(RouterError::AddWhileSealed {
                pattern: pattern.to_string(),
            });
        }

        guard.insert_route(pattern, route)?;
        Ok(())
    }

    /// Publishes the routes added so far. Sealing twice is a no-op.
    pub fn seal(&self) {
        let mut guard = self.building.write();
        if self.readonly.get().is_some() {
            return;
        }

        let tree = std::mem::take(&mut *guard);
        tracing::event!(
            tracing::Level::DEBUG,
            operation = "seal",
            routes = tree.len() as u64,
            "router sealed"
        );
        let _ = self.readonly.set(Arc::new(tree));
    }

    pub fn is_sealed(&self) -> bool {
        self.readonly.get().is_some()
    }
}

impl<H> Router<H> {
    pub fn find_first(&self, path: &str) -> RouterResult<Option<Match<'_, H>>> {
        Ok(self.sealed()?.match_first(path))
    }

    pub fn find_all(&self, path: &str) -> RouterResult<Vec<Match<'_, H>>> {
        Ok(self.sealed()?.match_all(path))
    }

    pub fn find_both(&self, path: &str) -> RouterResult<(Option<Match<'_, H>>, Vec<Match<'_, H>>)> {
        Ok(self.sealed()?.match_both(path))
    }

    pub fn readonly(&self) -> RouterResult<Arc<Tree<H>>> {
        self.readonly
            .get()
            .cloned()
            .ok_or(RouterError::ReadOnlyUnavailable)
    }

    fn sealed(&self) -> RouterResult<&Tree<H>> {
        self.readonly
            .get()
            .map(|tree| tree.as_ref())
            .ok_or(RouterError::FindWhileMutable)
    }
}
