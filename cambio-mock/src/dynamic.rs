use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use cambio_core::{Address, Asset, Oracle, OracleError, PriceSample, U256};

/// Instruction for how a query should behave.
#[derive(Clone, Debug)]
pub enum MockBehavior {
    /// Return the provided sample immediately.
    Return(PriceSample),
    /// Fail immediately with the provided error.
    Fail(OracleError),
    /// Hang indefinitely (simulate an unresponsive source).
    Hang,
}

impl MockBehavior {
    /// Shorthand for `Return(PriceSample::new(rate, weight))`.
    #[must_use]
    pub const fn rate(rate: U256, weight: U256) -> Self {
        Self::Return(PriceSample::new(rate, weight))
    }
}

/// Query key: `(src, dst, connector)`.
pub type QueryKey = (Asset, Asset, Asset);

struct InternalState {
    rules: HashMap<QueryKey, MockBehavior>,
    fallback: MockBehavior,
    queries: Vec<QueryKey>,
}

impl Default for InternalState {
    fn default() -> Self {
        Self {
            rules: HashMap::new(),
            fallback: MockBehavior::Fail(OracleError::Reverted("no rule".to_string())),
            queries: Vec::new(),
        }
    }
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
#[derive(Clone)]
pub struct MockOracleController {
    state: Arc<Mutex<InternalState>>,
}

impl MockOracleController {
    /// Set the behavior for one `(src, dst, connector)` query.
    pub async fn set_behavior(&self, src: Asset, dst: Asset, connector: Asset, behavior: MockBehavior) {
        let mut guard = self.state.lock().await;
        guard.rules.insert((src, dst, connector), behavior);
    }

    /// Set the behavior for queries without a specific rule (defaults to `Fail`).
    pub async fn set_fallback(&self, behavior: MockBehavior) {
        let mut guard = self.state.lock().await;
        guard.fallback = behavior;
    }

    /// Every query received so far, in arrival order.
    pub async fn queries(&self) -> Vec<QueryKey> {
        self.state.lock().await.queries.clone()
    }

    /// Number of queries received so far.
    pub async fn call_count(&self) -> usize {
        self.state.lock().await.queries.len()
    }

    /// Forget recorded queries; rules are kept.
    pub async fn clear_queries(&self) {
        self.state.lock().await.queries.clear();
    }
}

/// Oracle whose answers are scripted per query through a [`MockOracleController`].
pub struct DynamicMockOracle {
    address: Address,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockOracle {
    /// Create a mock oracle at `address` and its controller.
    #[must_use]
    pub fn new_with_controller(address: Address) -> (Arc<dyn Oracle>, MockOracleController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = MockOracleController {
            state: Arc::clone(&state),
        };
        let oracle = Arc::new(Self { address, state });
        (oracle, controller)
    }
}

#[async_trait]
impl Oracle for DynamicMockOracle {
    fn address(&self) -> Address {
        self.address
    }

    fn name(&self) -> &'static str {
        "cambio-mock"
    }

    async fn get_rate(
        &self,
        src: Asset,
        dst: Asset,
        connector: Asset,
    ) -> Result<PriceSample, OracleError> {
        // Resolve the behavior without holding the lock across a hang.
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.queries.push((src, dst, connector));
            guard
                .rules
                .get(&(src, dst, connector))
                .cloned()
                .unwrap_or_else(|| guard.fallback.clone())
        };
        match behavior {
            MockBehavior::Return(sample) => Ok(sample),
            MockBehavior::Fail(e) => Err(e),
            MockBehavior::Hang => {
                std::future::pending::<()>().await;
                unreachable!()
            }
        }
    }
}
