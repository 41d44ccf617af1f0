//! Item management service

use serde::Deserialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::{Item, ItemSummary};
use shared::validation;

/// Service for managing stock-keeping items
#[derive(Clone)]
pub struct ItemService {
    db: PgPool,
}

/// Input for creating or updating an item
#[derive(Debug, Deserialize)]
pub struct ItemInput {
    pub name: String,
    pub description: Option<String>,
    pub unit: Option<String>,
}

impl ItemService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create a new item together with its zero-quantity inventory
    /// record. Both rows are inserted in one database transaction so an
    /// item never exists without its inventory counter.
    pub async fn create_item(&self, input: ItemInput) -> AppResult<Item> {
        Self::validate(&input)?;

        let mut tx = self.db.begin().await?;

        let item = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (name, description, unit)
            VALUES ($1, $2, $3)
            RETURNING id, name, description, unit, created_at
            "#,
        )
        .bind(input.name.trim())
        .bind(&input.description)
        .bind(&input.unit)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::on_unique_violation(e, "item name"))?;

        sqlx::query("INSERT INTO inventory (item_id, quantity) VALUES ($1, 0)")
            .bind(item.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(item)
    }

    /// Update an existing item's descriptive fields
    pub async fn update_item(&self, item_id: i64, input: ItemInput) -> AppResult<Item> {
        Self::validate(&input)?;

        let item = sqlx::query_as::<_, Item>(
            r#"
            UPDATE items
            SET name = $1, description = $2, unit = $3
            WHERE id = $4
            RETURNING id, name, description, unit, created_at
            "#,
        )
        .bind(input.name.trim())
        .bind(&input.description)
        .bind(&input.unit)
        .bind(item_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| AppError::on_unique_violation(e, "item name"))?
        .ok_or_else(|| AppError::NotFound("Item".to_string()))?;

        Ok(item)
    }

    /// List all items, ordered by name
    pub async fn list_items(&self) -> AppResult<Vec<ItemSummary>> {
        let items =
            sqlx::query_as::<_, ItemSummary>("SELECT id, name FROM items ORDER BY name")
                .fetch_all(&self.db)
                .await?;

        Ok(items)
    }

    /// Get full item details by id
    pub async fn get_item(&self, item_id: i64) -> AppResult<Item> {
        let item = sqlx::query_as::<_, Item>(
            "SELECT id, name, description, unit, created_at FROM items WHERE id = $1",
        )
        .bind(item_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Item".to_string()))?;

        Ok(item)
    }

    fn validate(input: &ItemInput) -> AppResult<()> {
        if let Err(msg) = validation::validate_name(&input.name) {
            return Err(AppError::Validation {
                field: "name".to_string(),
                message: msg.to_string(),
            });
        }
        Ok(())
    }
}
