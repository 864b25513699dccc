mod create_category;
mod delete_category;

pub use create_category::CreateCategoryUseCase;
pub use delete_category::DeleteCategoryUseCase;
