use super::validation::{FieldRule, RequestValidator};
use crate::context::RequestContext;
use crate::dto::{ListParams, NameRequest, NamedResponse};
use crate::error::AppError;
use crate::repository::NamedRepository;

const NAME: FieldRule = FieldRule::length(3, 23);

/// Category and size service; both are plain named lookups.
#[derive(Clone)]
pub struct NamedService {
    repo: NamedRepository,
}

impl NamedService {
    pub fn new(repo: NamedRepository) -> Self {
        NamedService { repo }
    }

    pub async fn get_all(&self, ctx: &RequestContext, params: ListParams) -> Result<Vec<NamedResponse>, AppError> {
        let rows = self.repo.find_all(ctx, params).await?;
        Ok(rows.into_iter().map(NamedResponse::from).collect())
    }

    pub async fn create(&self, ctx: &RequestContext, req: NameRequest) -> Result<NamedResponse, AppError> {
        RequestValidator::check("name", &req.name, &NAME)?;
        let row = self.repo.save(ctx, &req.name).await?;
        tracing::info!(entity = self.repo.entity(), id = row.id, "created");
        Ok(row.into())
    }

    pub async fn update(&self, ctx: &RequestContext, id: i32, req: NameRequest) -> Result<(), AppError> {
        RequestValidator::check("name", &req.name, &NAME)?;
        self.repo.update(ctx, id, &req.name).await
    }

    pub async fn delete(&self, ctx: &RequestContext, id: i32) -> Result<(), AppError> {
        self.repo.delete(ctx, id).await
    }
}
