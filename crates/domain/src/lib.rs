//! Homepage Editor Domain Layer
pub mod category;
pub mod config;
pub mod document;
pub mod errors;
pub mod service;

mod single_entry;

pub use category::Category;
pub use config::{CliOverrides, Config};
pub use document::Document;
pub use errors::DomainError;
pub use service::{ExtraFields, FieldUpdate, NewService, Service, ServiceFields, ServiceUpdate};
