pub mod allocator;
pub mod availability;
pub mod classifier;
pub mod clock;
pub mod id;
pub mod model;
pub mod policy;
pub mod registration;
