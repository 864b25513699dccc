pub mod categories;
pub mod document;
pub mod health;
pub mod legacy;
pub mod services;

pub use health::health_check;
