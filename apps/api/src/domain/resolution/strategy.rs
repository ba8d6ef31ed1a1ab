use crate::domain::society::Society;

/// One way of pulling a component identifier out of normalized address text.
///
/// Implementations only ever return identifiers borrowed from `society`, which is
/// what guarantees resolved components are registered values.
pub trait ExtractionStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn extract<'s>(&self, society: &'s Society, text: &str) -> Option<&'s str>;
}

/// Ordered list of strategies tried until one succeeds.
pub struct StrategyChain {
    component: &'static str,
    strategies: Vec<Box<dyn ExtractionStrategy>>,
}

impl StrategyChain {
    pub fn new(component: &'static str, strategies: Vec<Box<dyn ExtractionStrategy>>) -> Self {
        Self {
            component,
            strategies,
        }
    }

    pub fn component(&self) -> &'static str {
        self.component
    }

    pub fn strategy_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    pub fn extract<'s>(&self, society: &'s Society, text: &str) -> Option<&'s str> {
        for strategy in &self.strategies {
            if let Some(id) = strategy.extract(society, text) {
                tracing::debug!(
                    component = self.component,
                    strategy = strategy.name(),
                    id,
                    "component extracted"
                );
                return Some(id);
            }
        }
        tracing::debug!(component = self.component, "no strategy matched");
        None
    }
}

impl std::fmt::Debug for StrategyChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyChain")
            .field("component", &self.component)
            .field("strategies", &self.strategy_names())
            .finish()
    }
}
