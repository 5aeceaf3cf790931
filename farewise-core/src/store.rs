//! Read access to persisted network data.
//!
//! The routing core never performs I/O. A [`NetworkStore`] hands it a fully
//! materialised [`NetworkSnapshot`] per query; streaming or partial loads are
//! not supported because every pass needs the complete relation set.

use crate::NetworkSnapshot;

/// Load every location and relation in one synchronous read.
///
/// # Examples
///
/// ```rust
/// use std::convert::Infallible;
/// use farewise_core::{Location, NetworkSnapshot, NetworkStore};
///
/// struct FixedStore(NetworkSnapshot);
///
/// impl NetworkStore for FixedStore {
///     type Error = Infallible;
///
///     fn load_network(&self) -> Result<NetworkSnapshot, Self::Error> {
///         Ok(self.0.clone())
///     }
/// }
///
/// let store = FixedStore(NetworkSnapshot::new(vec![Location::new(101, "Quito")], Vec::new()));
/// let snapshot = store.load_network()?;
/// assert_eq!(snapshot.locations.len(), 1);
/// # Ok::<(), Infallible>(())
/// ```
pub trait NetworkStore {
    /// Failure raised while reading the underlying data.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Return a snapshot of the whole network.
    fn load_network(&self) -> Result<NetworkSnapshot, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::NetworkStore;
    use crate::test_support::{MemoryNetworkStore, five_location_network};
    use rstest::rstest;

    #[rstest]
    fn memory_store_returns_its_snapshot() {
        let network = five_location_network();
        let store = MemoryNetworkStore::new(network.clone());
        let loaded = store.load_network().expect("memory store never fails");
        assert_eq!(loaded, network);
    }

    #[rstest]
    fn default_memory_store_is_empty() {
        let loaded = MemoryNetworkStore::default()
            .load_network()
            .expect("memory store never fails");
        assert!(loaded.locations.is_empty());
        assert!(loaded.relations.is_empty());
    }
}
