// src/infrastructure/repositories/postgres_brand.rs
use super::map_sqlx;
use crate::domain::brand::{
    Brand, BrandId, BrandRepository, BrandSortKey, NewBrand,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::{PageRequest, Pagination};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresBrandRepository {
    pool: PgPool,
}

impl PostgresBrandRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BrandRow {
    id: i64,
    name: String,
    description: String,
}

impl TryFrom<BrandRow> for Brand {
    type Error = DomainError;

    fn try_from(row: BrandRow) -> Result<Self, Self::Error> {
        Ok(Brand {
            id: BrandId::new(row.id)?,
            name: row.name,
            description: row.description,
        })
    }
}

fn order_column(key: BrandSortKey) -> &'static str {
    match key {
        BrandSortKey::Name => "LOWER(name)",
    }
}

#[async_trait]
impl BrandRepository for PostgresBrandRepository {
    async fn insert(&self, brand: NewBrand) -> DomainResult<Brand> {
        let row = sqlx::query_as::<_, BrandRow>(
            "INSERT INTO brands (name, description) VALUES ($1, $2)
             RETURNING id, name, description",
        )
        .bind(&brand.name)
        .bind(&brand.description)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Brand::try_from(row)
    }

    async fn exists_by_name(&self, name: &str) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM brands WHERE name = $1)")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn exists_by_id(&self, id: BrandId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM brands WHERE id = $1)")
            .bind(i64::from(id))
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn list_page(
        &self,
        request: PageRequest<BrandSortKey>,
    ) -> DomainResult<Pagination<Brand>> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM brands")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT id, name, description FROM brands ORDER BY ");
        builder.push(order_column(request.sort_by));
        builder.push(" ");
        builder.push(request.direction.as_sql());
        builder.push(", id ASC LIMIT ");
        builder.push_bind(request.limit());
        builder.push(" OFFSET ");
        builder.push_bind(request.offset());

        let rows = builder
            .build_query_as::<BrandRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let brands = rows
            .into_iter()
            .map(Brand::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Pagination::for_request(
            brands,
            &request,
            u64::try_from(total).unwrap_or_default(),
        ))
    }
}
