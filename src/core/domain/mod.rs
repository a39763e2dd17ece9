//! Domain types.

mod bundle;
mod session;
mod user;
mod vocabulary;

pub use bundle::ExportBundle;
pub use session::CurrentUser;
pub use user::User;
pub use vocabulary::{current_timestamp, NewVocabularyItem, VocabularyItem};
