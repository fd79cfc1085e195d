pub mod articles;
pub mod auth;

pub use articles::ArticleDto;
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
