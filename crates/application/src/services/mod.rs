mod document_session;

pub use document_session::DocumentSession;
