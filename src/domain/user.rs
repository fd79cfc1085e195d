// src/domain/user.rs
use crate::domain::errors::{DomainError, DomainResult};

/// Identifier of an authenticated principal. Users themselves live in the
/// upstream identity provider; this crate only ever sees their id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub i64);

impl UserId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("user id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}
