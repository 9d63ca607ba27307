// src/application/use_cases/brands/create.rs
use super::BrandUseCase;
use crate::{
    application::{error::ApplicationResult, use_cases::reject},
    domain::{
        brand::{Brand, NewBrand},
        constants::BRAND_EXISTS,
        errors::ValidationErrors,
        validation::{BRAND_RULES, check_described_entity},
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateBrandCommand {
    pub name: String,
    pub description: String,
}

impl BrandUseCase {
    pub async fn create_brand(
        &self,
        command: CreateBrandCommand,
    ) -> ApplicationResult<Brand> {
        let mut errors = ValidationErrors::new();
        check_described_entity(
            &command.name,
            &command.description,
            &BRAND_RULES,
            &mut errors,
        );
        if self.repo.exists_by_name(&command.name).await? {
            errors.push(BRAND_EXISTS);
        }
        errors
            .into_result()
            .map_err(|errors| reject("create_brand", errors))?;

        let created = self
            .repo
            .insert(NewBrand {
                name: command.name,
                description: command.description,
            })
            .await?;
        tracing::info!(brand_id = %created.id, "brand created");
        Ok(created)
    }
}
