pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{registry::FunctionRegistry, runner::FlowRunner};
pub use config::cli::{FileSink, StdoutSink};
pub use config::flow_config::FlowConfig;
pub use core::branched::{Branch, BranchedCounter, CounterResults};
pub use core::counted::{Counted, SeqCounter};
pub use core::predicates::CountPredicate;
pub use core::single::{ApplyOrTakeAction, SingleElementTarget};
pub use utils::error::{FlowError, Result};
