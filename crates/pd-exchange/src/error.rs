use pd_core::{AgentId, RequestId, TradeId};
use pd_material::MaterialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("resource buffer violation: {0}")]
    Material(#[from] MaterialError),

    #[error("bid references unknown request {0}")]
    UnknownRequest(RequestId),

    #[error("{trader} responded to {trade}, which was not matched to it")]
    ForeignResponse {
        trader: AgentId,
        trade:  TradeId,
    },
}

pub type ExchangeResult<T> = Result<T, ExchangeError>;
