pub mod token;

pub use token::HmacTokenManager;
