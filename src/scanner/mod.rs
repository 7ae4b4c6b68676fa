//! Directory size distribution
//!
//! # Architecture
//!
//! - **walker**: recursive, single-task size walk of one path
//! - **dispatcher**: one walker task per immediate child of a root, joined over a channel
//! - **reporter**: output abstraction fed by the dispatcher

mod dispatcher;
mod reporter;
mod walker;

pub use dispatcher::compute_distribution;
pub use reporter::{DistributionReporter, JsonReporter, NoopReporter, TextReporter};
pub use walker::walk_size;
