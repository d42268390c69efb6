//! A catalog bound to its persistence backend.

use statusdef_model::{CategoryDefinition, ItemDefinition};
use tracing::warn;

use crate::catalog::{Catalog, ConfirmDelete};
use crate::error::StoreResult;
use crate::kv::KeyValueStore;
use crate::session::EditingSession;

/// Loads a [`Catalog`] at open and writes it back after every accepted
/// mutation.
///
/// Each mutation is applied to a copy first and only swapped in once the write
/// succeeded. Both registries go out in one [`KeyValueStore::put_all`], so a
/// failed write leaves both the backend and the in-memory catalog as they
/// were. Rejected mutations perform no write.
pub struct DefinitionStore<S: KeyValueStore> {
    backend: S,
    catalog: Catalog,
}

impl<S: KeyValueStore> DefinitionStore<S> {
    /// Loads the catalog persisted in `backend`.
    pub fn open(backend: S) -> StoreResult<Self> {
        let catalog = Catalog::load(&backend)?;
        Ok(Self { backend, catalog })
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    /// Sets the category filter. Session state; never persisted.
    pub fn select_category(&mut self, key: Option<&str>) -> bool {
        self.catalog.select_category(key)
    }

    pub fn upsert_category(&mut self, def: CategoryDefinition) -> StoreResult<bool> {
        self.apply(|catalog| catalog.upsert_category(def))
    }

    pub fn upsert_item(&mut self, def: ItemDefinition) -> StoreResult<bool> {
        self.apply(|catalog| catalog.upsert_item(def))
    }

    pub fn delete_category(&mut self, key: &str) -> StoreResult<Option<CategoryDefinition>> {
        self.apply_removal(|catalog| catalog.delete_category(key))
    }

    pub fn delete_item(&mut self, key: &str) -> StoreResult<Option<ItemDefinition>> {
        self.apply_removal(|catalog| catalog.delete_item(key))
    }

    pub fn delete_category_confirmed(
        &mut self,
        key: &str,
        confirm: &dyn ConfirmDelete,
    ) -> StoreResult<Option<CategoryDefinition>> {
        self.apply_removal(|catalog| catalog.delete_category_confirmed(key, confirm))
    }

    pub fn delete_item_confirmed(
        &mut self,
        key: &str,
        confirm: &dyn ConfirmDelete,
    ) -> StoreResult<Option<ItemDefinition>> {
        self.apply_removal(|catalog| catalog.delete_item_confirmed(key, confirm))
    }

    /// Re-derives every stored format. Writes only when something changed.
    pub fn refresh_formats(&mut self) -> StoreResult<usize> {
        let mut changed = 0;
        self.apply(|catalog| {
            changed = catalog.refresh_formats();
            changed > 0
        })?;
        Ok(changed)
    }

    /// Commits the session's category draft, closing it once persisted.
    pub fn commit_category_draft(&mut self, session: &mut EditingSession) -> StoreResult<bool> {
        let Some(editor) = session.category_editor() else {
            return Ok(false);
        };
        let accepted = self.upsert_category(editor.draft().clone())?;
        if accepted {
            session.cancel_category();
        }
        Ok(accepted)
    }

    /// Commits the session's item draft, closing it once persisted.
    pub fn commit_item_draft(&mut self, session: &mut EditingSession) -> StoreResult<bool> {
        let Some(editor) = session.item_editor() else {
            return Ok(false);
        };
        let accepted = self.upsert_item(editor.draft().clone())?;
        if accepted {
            session.cancel_item();
        }
        Ok(accepted)
    }

    /// Applies several mutations to one copy of the catalog and writes it once.
    ///
    /// Nothing is written when the catalog ends up unchanged. A failed write
    /// discards every mutation made in `mutate`.
    pub fn batch<T>(&mut self, mutate: impl FnOnce(&mut Catalog) -> T) -> StoreResult<T> {
        let mut next = self.catalog.clone();
        let output = mutate(&mut next);
        if next != self.catalog {
            self.persist(next)?;
        }
        Ok(output)
    }

    fn apply(&mut self, mutate: impl FnOnce(&mut Catalog) -> bool) -> StoreResult<bool> {
        let mut next = self.catalog.clone();
        if !mutate(&mut next) {
            return Ok(false);
        }
        self.persist(next)?;
        Ok(true)
    }

    fn persist(&mut self, next: Catalog) -> StoreResult<()> {
        if let Err(e) = next.save(&mut self.backend) {
            warn!(error = %e, "Failed to persist catalog; mutation discarded");
            return Err(e);
        }
        self.catalog = next;
        Ok(())
    }

    fn apply_removal<T>(
        &mut self,
        remove: impl FnOnce(&mut Catalog) -> Option<T>,
    ) -> StoreResult<Option<T>> {
        let mut removed = None;
        self.apply(|catalog| {
            removed = remove(catalog);
            removed.is_some()
        })?;
        Ok(removed)
    }
}
