use tasklist_core::category::{prepare_category, CategoryInput};
use tasklist_core::error::CoreError;
use tasklist_core::filter::{build_category_predicates, CategoryFilter};
use tasklist_core::pagination::{PageRequest, PaginationMeta};
use tasklist_core::sorting::{resolve_category_sort, SortParams};
use tasklist_core::types::{validate_id, DbId};
use tasklist_db::models::category::Category;
use tasklist_db::query::ListQuery;
use tasklist_db::store::CategoryStore;

const ENTITY: &str = "Category";

/// Category operations on top of a [`CategoryStore`].
///
/// Name uniqueness is enforced by the database index, not pre-checked here.
#[derive(Debug, Clone)]
pub struct CategoryService<S> {
    store: S,
}

impl<S: CategoryStore> CategoryService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn create(&self, input: &CategoryInput) -> Result<Category, CoreError> {
        let draft = prepare_category(input)?;
        let category = self.store.create_category(&draft).await?;

        tracing::info!(category_id = category.id, name = %category.name, "Category created");
        Ok(category)
    }

    pub async fn get(&self, id: DbId) -> Result<Category, CoreError> {
        validate_id(id, "category")?;
        self.store
            .find_category(id)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })
    }

    pub async fn update(&self, id: DbId, input: &CategoryInput) -> Result<Category, CoreError> {
        validate_id(id, "category")?;
        let draft = prepare_category(input)?;
        let category = self
            .store
            .update_category(id, &draft)
            .await?
            .ok_or(CoreError::NotFound { entity: ENTITY, id })?;

        tracing::info!(category_id = id, "Category updated");
        Ok(category)
    }

    /// Soft-delete a category that no live todo references.
    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        validate_id(id, "category")?;
        if self.store.find_category(id).await?.is_none() {
            return Err(CoreError::NotFound { entity: ENTITY, id });
        }

        let todo_count = self.store.count_category_todos(id).await?;
        if todo_count > 0 {
            tracing::debug!(category_id = id, todo_count, "Category still referenced");
            return Err(CoreError::Conflict(
                "cannot delete category with associated todos".into(),
            ));
        }

        if !self.store.soft_delete_category(id).await? {
            return Err(CoreError::NotFound { entity: ENTITY, id });
        }

        tracing::info!(category_id = id, "Category deleted");
        Ok(())
    }

    pub async fn list(
        &self,
        filter: &CategoryFilter,
        sort: &SortParams,
        page: PageRequest,
    ) -> Result<(Vec<Category>, PaginationMeta), CoreError> {
        let list = ListQuery {
            predicates: build_category_predicates(filter),
            sort: resolve_category_sort(sort),
            page,
        };
        self.store.list_categories(&list).await
    }

    /// Every live category, ordered by name.
    pub async fn all(&self) -> Result<Vec<Category>, CoreError> {
        self.store.all_categories().await
    }
}
