// src/application/use_cases/categories/create.rs
use super::CategoryUseCase;
use crate::{
    application::{error::ApplicationResult, use_cases::reject},
    domain::{
        category::{Category, NewCategory},
        constants::CATEGORY_EXISTS,
        errors::ValidationErrors,
        validation::{CATEGORY_RULES, check_described_entity},
    },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCategoryCommand {
    pub name: String,
    pub description: String,
}

impl CategoryUseCase {
    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<Category> {
        let mut errors = ValidationErrors::new();
        check_described_entity(
            &command.name,
            &command.description,
            &CATEGORY_RULES,
            &mut errors,
        );
        if self.repo.exists_by_name(&command.name).await? {
            errors.push(CATEGORY_EXISTS);
        }
        errors
            .into_result()
            .map_err(|errors| reject("create_category", errors))?;

        let created = self
            .repo
            .insert(NewCategory {
                name: command.name,
                description: command.description,
            })
            .await?;
        tracing::info!(category_id = %created.id, "category created");
        Ok(created)
    }
}
