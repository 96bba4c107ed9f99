pub mod branched;
pub mod counted;
pub mod predicates;
pub mod single;

pub use crate::domain::model::{PairRecord, RunReport, SingleOutcome};
pub use crate::domain::ports::{FunctionSource, ReportSink};
pub use crate::utils::error::Result;
