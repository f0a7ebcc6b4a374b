use async_trait::async_trait;

use crate::{Asset, WrappedForm};

/// Expands an asset into its representative forms.
///
/// A yield-bearing token might resolve to itself and to its underlying deposit
/// asset, each with the rate converting one unit of the original. The order of
/// the returned forms is significant: the engine stops at the first source and
/// destination forms sharing an asset.
#[async_trait]
pub trait WrappingResolver: Send + Sync {
    /// Label used in registry notifications and logs.
    fn name(&self) -> &'static str;

    /// Representative forms of `asset`. May be empty.
    async fn wrapped_forms(&self, asset: Asset) -> Vec<WrappedForm>;
}

/// Resolver that maps every asset to itself at a 1:1 rate.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityResolver;

#[async_trait]
impl WrappingResolver for IdentityResolver {
    fn name(&self) -> &'static str {
        "identity"
    }

    async fn wrapped_forms(&self, asset: Asset) -> Vec<WrappedForm> {
        vec![WrappedForm::identity(asset)]
    }
}

/// Expand `asset` into the forms the engine iterates over.
///
/// With `use_wrapping == false` the resolver is not consulted and the single
/// identity form is returned.
pub async fn expand(
    resolver: &dyn WrappingResolver,
    asset: Asset,
    use_wrapping: bool,
) -> Vec<WrappedForm> {
    if use_wrapping {
        resolver.wrapped_forms(asset).await
    } else {
        vec![WrappedForm::identity(asset)]
    }
}
