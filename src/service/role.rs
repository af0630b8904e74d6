use super::validation::{FieldRule, RequestValidator};
use crate::context::RequestContext;
use crate::dto::{CreateRole, ListParams, RoleResponse};
use crate::error::AppError;
use crate::repository::RoleRepository;

const ROLE_NAME: FieldRule = FieldRule::length(3, 23);

#[derive(Clone)]
pub struct RoleService {
    repo: RoleRepository,
}

impl RoleService {
    pub fn new(repo: RoleRepository) -> Self {
        RoleService { repo }
    }

    pub async fn get_all(&self, ctx: &RequestContext, params: ListParams) -> Result<Vec<RoleResponse>, AppError> {
        let rows = self.repo.find_all(ctx, params).await?;
        Ok(rows.into_iter().map(RoleResponse::from).collect())
    }

    pub async fn get_by_id(&self, ctx: &RequestContext, id: i32) -> Result<RoleResponse, AppError> {
        Ok(self.repo.find_by_id(ctx, id).await?.into())
    }

    pub async fn create(&self, ctx: &RequestContext, req: CreateRole) -> Result<RoleResponse, AppError> {
        RequestValidator::check("role_name", &req.role_name, &ROLE_NAME)?;
        let row = self.repo.save(ctx, &req.role_name).await?;
        tracing::info!(entity = "role", id = row.id, "created");
        Ok(row.into())
    }

    pub async fn delete(&self, ctx: &RequestContext, id: i32) -> Result<(), AppError> {
        self.repo.delete(ctx, id).await
    }
}
