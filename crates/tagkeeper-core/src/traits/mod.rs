mod catalog;
mod remediation;
mod reporter;

pub use catalog::ICatalogGateway;
pub use remediation::IRemediationGateway;
pub use reporter::IEvaluationReporter;
