// src/infrastructure/repositories/postgres_category.rs
use super::map_sqlx;
use crate::domain::category::{
    Category, CategoryId, CategoryRepository, CategorySortKey, NewCategory,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::{PageRequest, Pagination};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresCategoryRepository {
    pool: PgPool,
}

impl PostgresCategoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CategoryRow {
    id: i64,
    name: String,
    description: String,
}

impl TryFrom<CategoryRow> for Category {
    type Error = DomainError;

    fn try_from(row: CategoryRow) -> Result<Self, Self::Error> {
        Ok(Category {
            id: CategoryId::new(row.id)?,
            name: row.name,
            description: row.description,
        })
    }
}

fn order_column(key: CategorySortKey) -> &'static str {
    match key {
        CategorySortKey::Name => "LOWER(name)",
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let row = sqlx::query_as::<_, CategoryRow>(
            "INSERT INTO categories (name, description) VALUES ($1, $2)
             RETURNING id, name, description",
        )
        .bind(&category.name)
        .bind(&category.description)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Category::try_from(row)
    }

    async fn exists_by_name(&self, name: &str) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM categories WHERE name = $1)")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn exists_by_id(&self, id: CategoryId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
            .bind(i64::from(id))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn list_page(
        &self,
        request: PageRequest<CategorySortKey>,
    ) -> DomainResult<Pagination<Category>> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM categories")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT id, name, description FROM categories ORDER BY ");
        builder.push(order_column(request.sort_by));
        builder.push(" ");
        builder.push(request.direction.as_sql());
        builder.push(", id ASC LIMIT ");
        builder.push_bind(request.limit());
        builder.push(" OFFSET ");
        builder.push_bind(request.offset());

        let rows = builder
            .build_query_as::<CategoryRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let categories = rows
            .into_iter()
            .map(Category::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Pagination::for_request(
            categories,
            &request,
            u64::try_from(total).unwrap_or_default(),
        ))
    }
}
