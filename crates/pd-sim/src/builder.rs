//! Fluent builder for constructing a [`Sim`].

use pd_core::{SimConfig, SimRng};
use pd_exchange::{ExchangeHost, Trader};

use crate::{Sim, SimError, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .trader(source)
///     .traders(trucks)
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:  SimConfig,
    traders: Vec<Box<dyn Trader>>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, traders: Vec::new() }
    }

    /// Add one trader.
    pub fn trader<T: Trader + 'static>(mut self, trader: T) -> Self {
        self.traders.push(Box::new(trader));
        self
    }

    /// Add many traders of one type.
    pub fn traders<T, I>(mut self, traders: I) -> Self
    where
        T: Trader + 'static,
        I: IntoIterator<Item = T>,
    {
        self.traders.extend(traders.into_iter().map(|t| Box::new(t) as Box<dyn Trader>));
        self
    }

    /// Validate the config, order traders by id, and return a ready-to-run
    /// [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;

        let mut traders = self.traders;
        traders.sort_by_key(|t| t.id());
        if let Some(pair) = traders.windows(2).find(|w| w[0].id() == w[1].id()) {
            return Err(SimError::DuplicateTrader(pair[0].id()));
        }

        // Exchange tie-breaks draw from their own child stream.
        let mut root = SimRng::new(self.config.seed);
        let host = ExchangeHost::with_rng(root.child(0));

        Ok(Sim {
            clock: self.config.make_clock(),
            config: self.config,
            host,
            traders,
        })
    }
}
