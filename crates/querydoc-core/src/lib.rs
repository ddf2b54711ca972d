pub mod document;
pub mod named_ref;
pub mod schema;
pub mod suggestion;
mod translate;
pub mod types;

pub use translate::translate;
pub use translate::TranslateError;
