//! Database request/response models, one module per table.

pub mod cars;
pub mod drivers;
pub mod manufacturers;
