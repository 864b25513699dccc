pub mod categories;
pub mod document;
pub mod services;

pub use categories::{CreateCategoryUseCase, DeleteCategoryUseCase};
pub use document::GetDocumentUseCase;
pub use services::{CreateServiceUseCase, DeleteServiceUseCase, UpdateServiceUseCase};
