use std::sync::Arc;

use parking_lot::RwLock;

use crate::config::Config;
use crate::store::Store;

/// Cheap-to-clone handle the router hands every handler. The store is
/// injected rather than global so tests can spin up their own.
#[derive(Clone)]
pub struct State {
    store: Arc<RwLock<Store>>,
    pub config: Arc<Config>,
}

impl State {
    pub fn new(config: Config) -> Self {
        Self {
            store: Arc::new(RwLock::new(Store::seeded())),
            config: Arc::new(config),
        }
    }

    pub fn read<T>(&self, func: impl FnOnce(&Store) -> T) -> T {
        func(&self.store.read())
    }

    /// Handlers take the write lock once for their whole mutation, so
    /// multi-collection steps like accept-request never interleave.
    pub fn write<T>(&self, func: impl FnOnce(&mut Store) -> T) -> T {
        func(&mut self.store.write())
    }
}
