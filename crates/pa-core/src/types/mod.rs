//! Common vocabularies used across pa-* crates

pub mod counter_type;
pub mod region;

pub use counter_type::CounterType;
pub use region::Region;
