use super::password::hash_password;
use super::validation::{FieldRule, RequestValidator};
use crate::context::RequestContext;
use crate::dto::{CreateEmployee, EmployeeResponse, ListParams, UpdateEmployee};
use crate::error::AppError;
use crate::models::NewEmployee;
use crate::repository::EmployeeRepository;
use crate::sql::FieldSet;
use uuid::Uuid;

const EMPLOYEE_NAME: FieldRule = FieldRule::length(3, 23);
const NEW_PASSWORD: FieldRule = FieldRule::length(8, 23);
const CHANGED_PASSWORD: FieldRule = FieldRule::min_length(8);
const WAREHOUSE_CODE: FieldRule = FieldRule::uuid();

#[derive(Clone)]
pub struct EmployeeService {
    repo: EmployeeRepository,
}

impl EmployeeService {
    pub fn new(repo: EmployeeRepository) -> Self {
        EmployeeService { repo }
    }

    pub async fn get_all(&self, ctx: &RequestContext, params: ListParams) -> Result<Vec<EmployeeResponse>, AppError> {
        let rows = self.repo.find_all(ctx, params).await?;
        Ok(rows.into_iter().map(EmployeeResponse::from).collect())
    }

    pub async fn get_all_by_warehouse(
        &self,
        ctx: &RequestContext,
        warehouse_code: Uuid,
        params: ListParams,
    ) -> Result<Vec<EmployeeResponse>, AppError> {
        let rows = self.repo.find_all_by_warehouse(ctx, warehouse_code, params).await?;
        Ok(rows.into_iter().map(EmployeeResponse::from).collect())
    }

    pub async fn get_by_code(&self, ctx: &RequestContext, employee_code: &str) -> Result<EmployeeResponse, AppError> {
        Ok(self.repo.find_by_code(ctx, employee_code).await?.into())
    }

    /// Hashes the password and generates `user_id` and `employee_code`.
    pub async fn create(&self, ctx: &RequestContext, req: CreateEmployee) -> Result<EmployeeResponse, AppError> {
        RequestValidator::check("employee_name", &req.employee_name, &EMPLOYEE_NAME)?;
        RequestValidator::check("password", &req.password, &NEW_PASSWORD)?;
        RequestValidator::check("warehouse_code", &req.warehouse_code, &WAREHOUSE_CODE)?;
        RequestValidator::check_minimum("id_role", req.id_role.into(), 1)?;
        let warehouse_code = Uuid::parse_str(&req.warehouse_code)
            .map_err(|_| AppError::Validation("warehouse_code must be a valid UUID".into()))?;

        let employee = NewEmployee {
            user_id: Uuid::new_v4().to_string(),
            employee_name: req.employee_name,
            password_hash: hash_password(req.password).await?,
            employee_code: Uuid::new_v4().to_string(),
            id_role: req.id_role,
            warehouse_code,
        };
        let id = self.repo.save(ctx, &employee).await?;
        tracing::info!(entity = "employee", id, code = %employee.employee_code, "created");
        Ok(EmployeeResponse {
            user_id: employee.user_id,
            name: employee.employee_name,
            role: employee.id_role,
            employee_code: employee.employee_code,
            warehouse_code: employee.warehouse_code.to_string(),
        })
    }

    /// Selective update. A provided password is hashed before it joins the
    /// field set; a role id of 0 is treated as not provided.
    pub async fn update(&self, ctx: &RequestContext, employee_code: &str, req: UpdateEmployee) -> Result<(), AppError> {
        if employee_code.is_empty() {
            return Err(AppError::Validation("employee code is required".into()));
        }
        RequestValidator::check_optional("employee_name", req.employee_name.as_deref(), &EMPLOYEE_NAME)?;
        RequestValidator::check_optional("password", req.password.as_deref(), &CHANGED_PASSWORD)?;

        let password = match req.password.filter(|p| !p.is_empty()) {
            Some(plain) => Some(hash_password(plain).await?),
            None => None,
        };
        let fields = FieldSet::new()
            .with("employee_name", req.employee_name)
            .with("password", password)
            .with("id_role", req.id_role.filter(|role| *role != 0));
        self.repo.update(ctx, employee_code, fields).await
    }

    pub async fn delete(&self, ctx: &RequestContext, employee_code: &str) -> Result<(), AppError> {
        self.repo.delete(ctx, employee_code).await
    }
}
