mod counter_store;

pub use counter_store::InMemoryCounterStore;
