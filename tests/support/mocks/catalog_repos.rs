// tests/support/mocks/catalog_repos.rs
use async_trait::async_trait;
use std::cmp::Ordering;
use std::sync::{Arc, Mutex, MutexGuard};

use stock_catalog::domain::article::{
    Article, ArticleId, ArticleRepository, ArticleSortKey, BrandSummary, CategorySummary,
    NewArticle,
};
use stock_catalog::domain::brand::{Brand, BrandId, BrandRepository, BrandSortKey, NewBrand};
use stock_catalog::domain::category::{
    Category, CategoryId, CategoryRepository, CategorySortKey, NewCategory,
};
use stock_catalog::domain::errors::{DomainError, DomainResult};
use stock_catalog::domain::pagination::{PageRequest, Pagination, SortDirection};

/* -------------------------------- shared store -------------------------------- */

#[derive(Default)]
struct StoreState {
    categories: Vec<Category>,
    brands: Vec<Brand>,
    articles: Vec<Article>,
    category_inserts: usize,
    brand_inserts: usize,
    article_inserts: usize,
}

/// In-memory catalog shared by the three repository mocks so articles can
/// resolve brand and category names. Counts the insert calls each port receives.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<StoreState>,
}

impl InMemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn lock(&self) -> MutexGuard<'_, StoreState> {
        self.state.lock().expect("store mutex poisoned")
    }

    /// Adds a category directly, bypassing the use case and the insert counter.
    pub fn seed_category(&self, name: &str, description: &str) -> Category {
        let mut state = self.lock();
        let category = Category {
            id: CategoryId(next_id(state.categories.len())),
            name: name.into(),
            description: description.into(),
        };
        state.categories.push(category.clone());
        category
    }

    pub fn seed_brand(&self, name: &str, description: &str) -> Brand {
        let mut state = self.lock();
        let brand = Brand {
            id: BrandId(next_id(state.brands.len())),
            name: name.into(),
            description: description.into(),
        };
        state.brands.push(brand.clone());
        brand
    }

    pub fn category_insert_calls(&self) -> usize {
        self.lock().category_inserts
    }

    pub fn brand_insert_calls(&self) -> usize {
        self.lock().brand_inserts
    }

    pub fn article_insert_calls(&self) -> usize {
        self.lock().article_inserts
    }

    pub fn categories(&self) -> Vec<Category> {
        self.lock().categories.clone()
    }

    pub fn brands(&self) -> Vec<Brand> {
        self.lock().brands.clone()
    }

    pub fn articles(&self) -> Vec<Article> {
        self.lock().articles.clone()
    }

    pub fn category_repo(self: &Arc<Self>) -> Arc<dyn CategoryRepository> {
        Arc::new(InMemoryCategoryRepo(Arc::clone(self)))
    }

    pub fn brand_repo(self: &Arc<Self>) -> Arc<dyn BrandRepository> {
        Arc::new(InMemoryBrandRepo(Arc::clone(self)))
    }

    pub fn article_repo(self: &Arc<Self>) -> Arc<dyn ArticleRepository> {
        Arc::new(InMemoryArticleRepo(Arc::clone(self)))
    }
}

/// Store-assigned id for the next row of a collection holding `len` rows.
fn next_id(len: usize) -> i64 {
    i64::try_from(len).expect("collection length fits in i64") + 1
}

fn ordered(ord: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ord,
        SortDirection::Desc => ord.reverse(),
    }
}

/// Case-insensitive ordering on `key`, ties broken by ascending id.
fn sort_items<T>(
    items: &mut [T],
    direction: SortDirection,
    key: impl Fn(&T) -> String,
    id: impl Fn(&T) -> i64,
) {
    items.sort_by(|a, b| {
        ordered(key(a).to_lowercase().cmp(&key(b).to_lowercase()), direction)
            .then_with(|| id(a).cmp(&id(b)))
    });
}

fn paginate<T, K>(items: Vec<T>, request: &PageRequest<K>) -> Pagination<T> {
    let total = u64::try_from(items.len()).expect("length fits in u64");
    let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
    let limit = usize::try_from(request.limit()).unwrap_or(usize::MAX);
    let content = items.into_iter().skip(offset).take(limit).collect();
    Pagination::for_request(content, request, total)
}

/* -------------------------------- CategoryRepository -------------------------------- */

pub struct InMemoryCategoryRepo(pub Arc<InMemoryStore>);

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepo {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut state = self.0.lock();
        state.category_inserts += 1;
        let stored = Category {
            id: CategoryId(next_id(state.categories.len())),
            name: category.name,
            description: category.description,
        };
        state.categories.push(stored.clone());
        Ok(stored)
    }

    async fn exists_by_name(&self, name: &str) -> DomainResult<bool> {
        Ok(self.0.lock().categories.iter().any(|c| c.name == name))
    }

    async fn exists_by_id(&self, id: CategoryId) -> DomainResult<bool> {
        Ok(self.0.lock().categories.iter().any(|c| c.id == id))
    }

    async fn list_page(
        &self,
        request: PageRequest<CategorySortKey>,
    ) -> DomainResult<Pagination<Category>> {
        let mut items = self.0.categories();
        sort_items(&mut items, request.direction, |c| c.name.clone(), |c| c.id.0);
        Ok(paginate(items, &request))
    }
}

/* -------------------------------- BrandRepository -------------------------------- */

pub struct InMemoryBrandRepo(pub Arc<InMemoryStore>);

#[async_trait]
impl BrandRepository for InMemoryBrandRepo {
    async fn insert(&self, brand: NewBrand) -> DomainResult<Brand> {
        let mut state = self.0.lock();
        state.brand_inserts += 1;
        let stored = Brand {
            id: BrandId(next_id(state.brands.len())),
            name: brand.name,
            description: brand.description,
        };
        state.brands.push(stored.clone());
        Ok(stored)
    }

    async fn exists_by_name(&self, name: &str) -> DomainResult<bool> {
        Ok(self.0.lock().brands.iter().any(|b| b.name == name))
    }

    async fn exists_by_id(&self, id: BrandId) -> DomainResult<bool> {
        Ok(self.0.lock().brands.iter().any(|b| b.id == id))
    }

    async fn list_page(
        &self,
        request: PageRequest<BrandSortKey>,
    ) -> DomainResult<Pagination<Brand>> {
        let mut items = self.0.brands();
        sort_items(&mut items, request.direction, |b| b.name.clone(), |b| b.id.0);
        Ok(paginate(items, &request))
    }
}

/* -------------------------------- ArticleRepository -------------------------------- */

pub struct InMemoryArticleRepo(pub Arc<InMemoryStore>);

#[async_trait]
impl ArticleRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut state = self.0.lock();
        state.article_inserts += 1;

        let brand = state
            .brands
            .iter()
            .find(|b| b.id == article.brand_id)
            .map(|b| BrandSummary {
                id: b.id,
                name: b.name.clone(),
            })
            .ok_or_else(|| DomainError::NotFound("brand not found".into()))?;

        let categories = article
            .category_ids
            .iter()
            .map(|id| {
                state
                    .categories
                    .iter()
                    .find(|c| c.id == *id)
                    .map(|c| CategorySummary {
                        id: c.id,
                        name: c.name.clone(),
                    })
                    .ok_or_else(|| DomainError::NotFound("category not found".into()))
            })
            .collect::<DomainResult<Vec<_>>>()?;

        let stored = Article {
            id: ArticleId(next_id(state.articles.len())),
            name: article.name,
            description: article.description,
            price: article.price,
            quantity: article.quantity,
            brand,
            categories,
        };
        state.articles.push(stored.clone());
        Ok(stored)
    }

    async fn exists_by_name(&self, name: &str) -> DomainResult<bool> {
        Ok(self.0.lock().articles.iter().any(|a| a.name == name))
    }

    async fn list_page(
        &self,
        request: PageRequest<ArticleSortKey>,
    ) -> DomainResult<Pagination<Article>> {
        let mut items = self.0.articles();
        let key = |a: &Article| match request.sort_by {
            ArticleSortKey::Name => a.name.clone(),
            ArticleSortKey::BrandName => a.brand.name.clone(),
            ArticleSortKey::CategoryName => a
                .categories
                .first()
                .map(|c| c.name.clone())
                .unwrap_or_default(),
        };
        sort_items(&mut items, request.direction, key, |a| a.id.0);
        Ok(paginate(items, &request))
    }
}
