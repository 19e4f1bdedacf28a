pub mod counter_sweep;
pub mod runner;

pub use counter_sweep::CounterSweepJob;
pub use runner::JobRunner;
