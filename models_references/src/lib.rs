//! Wire types shared between the references backend, its client, and the website gateway.

pub mod error;
pub mod locale;
pub mod reference;
pub mod user;

pub use error::{ErrorResponse, OasstErrorCode, OasstErrorResponse};
pub use locale::Locale;
pub use reference::{Reference, ReferencesQuery};
pub use user::{AuthMethod, BackendUser};
