use std::sync::Arc;

use cambio_core::{Asset, Oracle, PriceSample};

use crate::Cambio;

/// Registered connectors followed by request-supplied ones.
///
/// The two lists are concatenated, not merged: a connector present in both is
/// scanned twice and so contributes twice the samples for that hop.
#[derive(Debug, Clone, Copy)]
pub struct ConnectorPool<'a> {
    registered: &'a [Asset],
    custom: &'a [Asset],
}

impl<'a> ConnectorPool<'a> {
    /// Pool over `registered` then `custom`.
    #[must_use]
    pub const fn new(registered: &'a [Asset], custom: &'a [Asset]) -> Self {
        Self { registered, custom }
    }

    /// Every connector in scan order, duplicates included.
    pub fn iter(&self) -> impl Iterator<Item = Asset> + 'a {
        self.registered.iter().chain(self.custom.iter()).copied()
    }

    /// Total entries, duplicates included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.registered.len() + self.custom.len()
    }

    /// True when neither list has entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Connectors usable between `src` and `dst`: a hop cannot be an endpoint.
    #[must_use]
    pub fn candidates(&self, src: Asset, dst: Asset) -> Vec<Asset> {
        self.iter().filter(|c| *c != src && *c != dst).collect()
    }
}

impl Cambio {
    /// Query every oracle through every connector for one `(src, dst)` pair.
    ///
    /// Queries run concurrently; samples come back in connector-major,
    /// oracle-minor order, matching a sequential scan.
    pub(crate) async fn scan(
        &self,
        connectors: &[Asset],
        oracles: &[Arc<dyn Oracle>],
        src: Asset,
        dst: Asset,
    ) -> Vec<PriceSample> {
        let adapter = &self.adapter;
        let tasks = connectors.iter().flat_map(move |&connector| {
            oracles
                .iter()
                .map(move |o| adapter.query_sample(o.as_ref(), src, dst, connector))
        });
        futures::future::join_all(tasks).await
    }
}
