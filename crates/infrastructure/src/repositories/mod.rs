pub mod yaml_document_store;

pub use yaml_document_store::YamlDocumentStore;
