use super::validation::{FieldRule, RequestValidator};
use crate::context::RequestContext;
use crate::dto::{CreateProduct, ListParams, ProductResponse, UpdateProduct};
use crate::error::AppError;
use crate::models::NewProduct;
use crate::repository::ProductRepository;
use uuid::Uuid;

const PRODUCT_NAME: FieldRule = FieldRule::length(3, 40);

#[derive(Clone)]
pub struct ProductService {
    repo: ProductRepository,
}

impl ProductService {
    pub fn new(repo: ProductRepository) -> Self {
        ProductService { repo }
    }

    pub async fn get_all(&self, ctx: &RequestContext, params: ListParams) -> Result<Vec<ProductResponse>, AppError> {
        let rows = self.repo.find_all(ctx, params).await?;
        Ok(rows.into_iter().map(ProductResponse::from).collect())
    }

    pub async fn get_by_id(&self, ctx: &RequestContext, id: i32) -> Result<ProductResponse, AppError> {
        Ok(self.repo.find_by_id(ctx, id).await?.into())
    }

    pub async fn create(&self, ctx: &RequestContext, req: CreateProduct) -> Result<ProductResponse, AppError> {
        RequestValidator::check("product_name", &req.product_name, &PRODUCT_NAME)?;
        RequestValidator::check_minimum("price", req.price, 0)?;
        RequestValidator::check_minimum("id_category", req.id_category.into(), 1)?;
        let product = NewProduct {
            product_name: req.product_name,
            price: req.price,
            description_product: req.description_product.filter(|d| !d.is_empty()),
            product_code: Uuid::new_v4().to_string(),
            id_category: req.id_category,
        };
        let id = self.repo.save(ctx, &product).await?;
        tracing::info!(entity = "product", id, "created");
        Ok(ProductResponse {
            id,
            product_name: product.product_name,
            price: product.price,
            description_product: product.description_product,
            product_code: product.product_code,
            id_category: product.id_category,
        })
    }

    pub async fn update(&self, ctx: &RequestContext, id: i32, req: UpdateProduct) -> Result<(), AppError> {
        RequestValidator::check_optional("product_name", req.product_name.as_deref(), &PRODUCT_NAME)?;
        if let Some(price) = req.price {
            RequestValidator::check_minimum("price", price, 0)?;
        }
        if let Some(category) = req.id_category {
            RequestValidator::check_minimum("id_category", category.into(), 1)?;
        }
        self.repo.update(ctx, id, req.into_fields()).await
    }

    pub async fn delete(&self, ctx: &RequestContext, id: i32) -> Result<(), AppError> {
        self.repo.delete(ctx, id).await
    }
}
