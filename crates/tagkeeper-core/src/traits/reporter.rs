use crate::errors::GatewayResult;
use crate::models::Evaluation;

/// Delivers evaluations to the external rules engine.
pub trait IEvaluationReporter: Send + Sync {
    fn report(&self, evaluation: &Evaluation, correlation_token: &str) -> GatewayResult<()>;
}
