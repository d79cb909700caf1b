mod catalog_record;
mod evaluation;
mod notification;
mod status;
mod tag_set;
mod verdict;

pub use catalog_record::{CatalogLookup, CatalogRecord};
pub use evaluation::Evaluation;
pub use notification::ChangeNotification;
pub use status::InvocationStatus;
pub use tag_set::TagSet;
pub use verdict::{ComplianceType, Verdict};
