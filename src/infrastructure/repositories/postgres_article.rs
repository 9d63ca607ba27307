// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleId, ArticleRepository, ArticleSortKey, BrandSummary, CategorySummary,
    NewArticle,
};
use crate::domain::brand::BrandId;
use crate::domain::category::CategoryId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::{PageRequest, Pagination};
use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::collections::HashMap;

const ARTICLE_SELECT: &str = "SELECT a.id, a.name, a.description, a.price, a.quantity, \
     a.brand_id, b.name AS brand_name \
     FROM articles a JOIN brands b ON b.id = a.brand_id";

#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    name: String,
    description: String,
    price: Decimal,
    quantity: i32,
    brand_id: i64,
    brand_name: String,
}

#[derive(Debug, FromRow)]
struct ArticleCategoryRow {
    article_id: i64,
    category_id: i64,
    category_name: String,
}

impl ArticleRow {
    fn into_article(self, categories: Vec<CategorySummary>) -> DomainResult<Article> {
        Ok(Article {
            id: ArticleId::new(self.id)?,
            name: self.name,
            description: self.description,
            price: self.price,
            quantity: self.quantity,
            brand: BrandSummary {
                id: BrandId::new(self.brand_id)?,
                name: self.brand_name,
            },
            categories,
        })
    }
}

/// SQL ordering expression for a sort key. `CategoryName` orders by the name of
/// the article's first category.
fn order_expression(key: ArticleSortKey) -> &'static str {
    match key {
        ArticleSortKey::Name => "LOWER(a.name)",
        ArticleSortKey::BrandName => "LOWER(b.name)",
        ArticleSortKey::CategoryName => {
            "(SELECT LOWER(c.name) FROM article_categories ac \
              JOIN categories c ON c.id = ac.category_id \
              WHERE ac.article_id = a.id ORDER BY ac.position LIMIT 1)"
        }
    }
}

impl PostgresArticleRepository {
    async fn load_categories(
        &self,
        article_ids: &[i64],
    ) -> DomainResult<HashMap<i64, Vec<CategorySummary>>> {
        let rows = sqlx::query_as::<_, ArticleCategoryRow>(
            "SELECT ac.article_id, c.id AS category_id, c.name AS category_name
             FROM article_categories ac JOIN categories c ON c.id = ac.category_id
             WHERE ac.article_id = ANY($1)
             ORDER BY ac.article_id, ac.position",
        )
        .bind(article_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut grouped: HashMap<i64, Vec<CategorySummary>> = HashMap::new();
        for row in rows {
            grouped
                .entry(row.article_id)
                .or_default()
                .push(CategorySummary {
                    id: CategoryId::new(row.category_id)?,
                    name: row.category_name,
                });
        }
        Ok(grouped)
    }

    async fn assemble(&self, rows: Vec<ArticleRow>) -> DomainResult<Vec<Article>> {
        let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
        let mut categories = self.load_categories(&ids).await?;

        rows.into_iter()
            .map(|row| {
                let linked = categories.remove(&row.id).unwrap_or_default();
                row.into_article(linked)
            })
            .collect()
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!("{ARTICLE_SELECT} WHERE a.id = $1"))
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        match row {
            Some(row) => Ok(self.assemble(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            name,
            description,
            price,
            quantity,
            brand_id,
            category_ids,
        } = article;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO articles (name, description, price, quantity, brand_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(&name)
        .bind(&description)
        .bind(price)
        .bind(quantity)
        .bind(i64::from(brand_id))
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        for (position, category_id) in category_ids.iter().enumerate() {
            let position = i16::try_from(position)
                .map_err(|_| DomainError::invalid("too many categories for one article"))?;
            sqlx::query(
                "INSERT INTO article_categories (article_id, category_id, position)
                 VALUES ($1, $2, $3)",
            )
            .bind(id)
            .bind(i64::from(*category_id))
            .bind(position)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)?;

        let id = ArticleId::new(id)?;
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound("article vanished after insert".into()))
    }

    async fn exists_by_name(&self, name: &str) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM articles WHERE name = $1)")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    async fn list_page(
        &self,
        request: PageRequest<ArticleSortKey>,
    ) -> DomainResult<Pagination<Article>> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM articles")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(ARTICLE_SELECT);
        builder.push(" ORDER BY ");
        builder.push(order_expression(request.sort_by));
        builder.push(" ");
        builder.push(request.direction.as_sql());
        builder.push(" NULLS LAST, a.id ASC LIMIT ");
        builder.push_bind(request.limit());
        builder.push(" OFFSET ");
        builder.push_bind(request.offset());

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let articles = self.assemble(rows).await?;
        Ok(Pagination::for_request(
            articles,
            &request,
            u64::try_from(total).unwrap_or_default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_ordering_uses_first_linked_category() {
        let expr = order_expression(ArticleSortKey::CategoryName);
        assert!(expr.contains("ORDER BY ac.position LIMIT 1"));
        assert_eq!(order_expression(ArticleSortKey::BrandName), "LOWER(b.name)");
    }
}
