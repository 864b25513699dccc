pub mod category;
pub mod service;

pub use category::{CategoryResponse, CreateCategoryRequest, LegacyCategoryForm};
pub use service::{CreateServiceRequest, OptionalField, ServiceResponse, UpdateServiceRequest};
