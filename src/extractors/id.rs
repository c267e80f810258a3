//! Integer path id for a resource. A segment that is not an integer answers the
//! resource's not-found, as an unmatched route would.

use crate::error::AppError;
use crate::resource::Resource;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use std::marker::PhantomData;

pub struct ResourceId<R> {
    pub id: i32,
    _resource: PhantomData<fn() -> R>,
}

impl<R> ResourceId<R> {
    pub fn new(id: i32) -> Self {
        ResourceId {
            id,
            _resource: PhantomData,
        }
    }
}

pub fn parse_id<R: Resource>(raw: &str) -> Result<ResourceId<R>, AppError> {
    raw.parse::<i32>()
        .map(ResourceId::new)
        .map_err(|_| R::not_found())
}

#[async_trait]
impl<S, R> FromRequestParts<S> for ResourceId<R>
where
    S: Send + Sync,
    R: Resource,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| R::not_found())?;
        parse_id::<R>(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ad, User};

    #[test]
    fn integer_segments_parse() {
        assert_eq!(parse_id::<User>("42").unwrap().id, 42);
    }

    #[test]
    fn other_segments_are_not_found() {
        let err = parse_id::<Ad>("abc").err().unwrap();
        assert!(matches!(err, AppError::NotFound(ref m) if m == "Ad not found"));
        assert!(parse_id::<User>("99999999999").is_err());
        assert!(parse_id::<User>("").is_err());
    }
}
