use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use cambio_core::{Asset, WrappedForm, WrappingResolver};

/// Resolver backed by a table; assets without an entry resolve to themselves.
#[derive(Clone, Default)]
pub struct StaticResolver {
    forms: Arc<Mutex<HashMap<Asset, Vec<WrappedForm>>>>,
}

impl StaticResolver {
    /// Empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the forms `asset` expands to, replacing any previous entry.
    #[must_use]
    pub fn with_forms(self, asset: Asset, forms: Vec<WrappedForm>) -> Self {
        self.set_forms(asset, forms);
        self
    }

    /// Set the forms `asset` expands to while the resolver is in use.
    pub fn set_forms(&self, asset: Asset, forms: Vec<WrappedForm>) {
        self.forms
            .lock()
            .expect("resolver table poisoned")
            .insert(asset, forms);
    }
}

#[async_trait]
impl WrappingResolver for StaticResolver {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn wrapped_forms(&self, asset: Asset) -> Vec<WrappedForm> {
        self.forms
            .lock()
            .expect("resolver table poisoned")
            .get(&asset)
            .cloned()
            .unwrap_or_else(|| vec![WrappedForm::identity(asset)])
    }
}
