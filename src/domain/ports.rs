use crate::domain::model::{SignupAck, SignupPayload};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Network boundary of the form controller.
#[async_trait]
pub trait SignupGateway: Send + Sync {
    async fn submit(&self, payload: &SignupPayload) -> Result<SignupAck>;
}
