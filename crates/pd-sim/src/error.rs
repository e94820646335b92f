use pd_core::{AgentId, PdError, Tick};
use pd_exchange::ExchangeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] PdError),

    #[error("two traders share {0}")]
    DuplicateTrader(AgentId),

    #[error("exchange failed at {tick}: {source}")]
    Exchange {
        tick:   Tick,
        #[source]
        source: ExchangeError,
    },
}

pub type SimResult<T> = Result<T, SimError>;
