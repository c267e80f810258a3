//! Resource handlers: create, read, update, delete. Each one is generic over
//! [`Resource`] and runs inside the request's [`Session`].

use crate::error::{AppError, StoreError};
use crate::extractors::{ResourceId, ValidJson};
use crate::resource::Resource;
use crate::response::{Created, Deleted};
use crate::session::Session;
use crate::validation::Validate;
use axum::Json;
use sqlx::PgConnection;

pub async fn create<R: Resource>(
    mut session: Session,
    ValidJson(input): ValidJson<R::Create>,
) -> Result<Json<Created>, AppError> {
    input.validate()?;
    let outcome = R::insert(session.conn(), &input).await;
    let id = session.settle(outcome).await.map_err(R::write_error)?;
    tracing::info!(resource = R::NAME, id, "created");
    Ok(Json(Created { id }))
}

pub async fn read<R: Resource>(
    target: ResourceId<R>,
    mut session: Session,
) -> Result<Json<R>, AppError> {
    let outcome = R::fetch(session.conn(), target.id).await;
    let entity = session.settle(outcome).await?.ok_or_else(R::not_found)?;
    Ok(Json(entity))
}

pub async fn update<R: Resource>(
    target: ResourceId<R>,
    mut session: Session,
    ValidJson(patch): ValidJson<R::Patch>,
) -> Result<Json<R>, AppError> {
    patch.validate()?;
    let outcome = patch_and_save::<R>(session.conn(), target.id, patch).await;
    let entity = session
        .settle(outcome)
        .await
        .map_err(R::write_error)?
        .ok_or_else(R::not_found)?;
    tracing::info!(resource = R::NAME, id = target.id, "updated");
    Ok(Json(entity))
}

pub async fn delete<R: Resource>(
    target: ResourceId<R>,
    mut session: Session,
) -> Result<Json<Deleted>, AppError> {
    let outcome = R::delete(session.conn(), target.id).await;
    if !session.settle(outcome).await? {
        return Err(R::not_found());
    }
    tracing::info!(resource = R::NAME, id = target.id, "deleted");
    Ok(Json(Deleted::new()))
}

async fn patch_and_save<R: Resource>(
    conn: &mut PgConnection,
    id: i32,
    patch: R::Patch,
) -> Result<Option<R>, StoreError> {
    let Some(mut entity) = R::fetch(&mut *conn, id).await? else {
        return Ok(None);
    };
    entity.apply(patch);
    entity.save(conn).await
}
