// src/application/use_cases/articles/create.rs
use super::ArticleUseCase;
use crate::{
    application::{error::ApplicationResult, use_cases::reject},
    domain::{
        article::{Article, NewArticle},
        brand::BrandId,
        category::CategoryId,
        constants::{
            ARTICLE_EXISTS, FIELD_BRAND_ID_MISSING, FIELD_DESCRIPTION_EMPTY, FIELD_NAME_EMPTY,
            brand_not_found, category_not_found,
        },
        errors::{DomainResult, ValidationErrors},
        validation::{
            check_category_count, check_price, check_quantity, distinct_category_ids,
            require_text,
        },
    },
};
use rust_decimal::Decimal;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateArticleCommand {
    pub name: String,
    pub description: String,
    pub price: Option<Decimal>,
    pub quantity: Option<i32>,
    pub brand_id: Option<i64>,
    pub category_ids: Vec<i64>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

/// Fields left unset stay missing and are reported by validation.
#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    command: CreateArticleCommand,
}

impl CreateArticleCommandBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.command.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.command.description = description.into();
        self
    }

    pub fn price(mut self, price: Decimal) -> Self {
        self.command.price = Some(price);
        self
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.command.quantity = Some(quantity);
        self
    }

    pub fn brand_id(mut self, brand_id: i64) -> Self {
        self.command.brand_id = Some(brand_id);
        self
    }

    pub fn category_ids(mut self, ids: impl IntoIterator<Item = i64>) -> Self {
        self.command.category_ids = ids.into_iter().collect();
        self
    }

    pub fn build(self) -> CreateArticleCommand {
        self.command
    }
}

impl ArticleUseCase {
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<Article> {
        let mut errors = ValidationErrors::new();

        require_text(&command.name, FIELD_NAME_EMPTY, &mut errors);
        require_text(&command.description, FIELD_DESCRIPTION_EMPTY, &mut errors);
        let price = check_price(command.price, &mut errors);
        let quantity = check_quantity(command.quantity, &mut errors);
        check_category_count(&command.category_ids, &mut errors);
        let category_ids = distinct_category_ids(&command.category_ids, &mut errors);
        self.check_categories_exist(&category_ids, &mut errors).await?;
        let brand_id = self.check_brand_exists(command.brand_id, &mut errors).await?;

        if self.article_repo.exists_by_name(&command.name).await? {
            errors.push(ARTICLE_EXISTS);
        }

        let new_article = match (price, quantity, brand_id) {
            (Some(price), Some(quantity), Some(brand_id)) if errors.is_empty() => NewArticle {
                name: command.name,
                description: command.description,
                price,
                quantity,
                brand_id,
                category_ids: category_ids.into_iter().map(CategoryId).collect(),
            },
            _ => return Err(reject("create_article", errors)),
        };

        let created = self.article_repo.insert(new_article).await?;
        tracing::info!(
            article_id = i64::from(created.id),
            categories = created.categories.len(),
            "article created"
        );
        Ok(created)
    }

    async fn check_categories_exist(
        &self,
        category_ids: &[i64],
        errors: &mut ValidationErrors,
    ) -> DomainResult<()> {
        for &id in category_ids {
            if !self.category_repo.exists_by_id(CategoryId(id)).await? {
                errors.push(category_not_found(id));
            }
        }
        Ok(())
    }

    /// Returns the brand id only when it was supplied and the brand exists.
    async fn check_brand_exists(
        &self,
        brand_id: Option<i64>,
        errors: &mut ValidationErrors,
    ) -> DomainResult<Option<BrandId>> {
        let Some(id) = brand_id else {
            errors.push(FIELD_BRAND_ID_MISSING);
            return Ok(None);
        };

        if self.brand_repo.exists_by_id(BrandId(id)).await? {
            Ok(Some(BrandId(id)))
        } else {
            errors.push(brand_not_found(id));
            Ok(None)
        }
    }
}
