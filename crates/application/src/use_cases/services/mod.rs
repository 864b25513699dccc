mod create_service;
mod delete_service;
mod update_service;

pub use create_service::CreateServiceUseCase;
pub use delete_service::DeleteServiceUseCase;
pub use update_service::UpdateServiceUseCase;
