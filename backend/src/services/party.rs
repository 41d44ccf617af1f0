//! Party management service

use serde::Deserialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::models::{Party, PartySummary};
use shared::validation;

/// Service for managing counterparties (customers and suppliers)
#[derive(Clone)]
pub struct PartyService {
    db: PgPool,
}

/// Input for creating or updating a party
#[derive(Debug, Deserialize)]
pub struct PartyInput {
    pub name: String,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

impl PartyService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Create a new party. The unique name constraint is enforced by the
    /// store; a violation surfaces as a duplicate-entry rejection.
    pub async fn create_party(&self, input: PartyInput) -> AppResult<Party> {
        Self::validate(&input)?;

        let party = sqlx::query_as::<_, Party>(
            r#"
            INSERT INTO parties (name, contact_person, phone, email, address)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, contact_person, phone, email, address, created_at
            "#,
        )
        .bind(input.name.trim())
        .bind(&input.contact_person)
        .bind(&input.phone)
        .bind(&input.email)
        .bind(&input.address)
        .fetch_one(&self.db)
        .await
        .map_err(|e| AppError::on_unique_violation(e, "party name"))?;

        Ok(party)
    }

    /// Update an existing party. The id stays stable; only the
    /// descriptive fields change.
    pub async fn update_party(&self, party_id: i64, input: PartyInput) -> AppResult<Party> {
        Self::validate(&input)?;

        let party = sqlx::query_as::<_, Party>(
            r#"
            UPDATE parties
            SET name = $1, contact_person = $2, phone = $3, email = $4, address = $5
            WHERE id = $6
            RETURNING id, name, contact_person, phone, email, address, created_at
            "#,
        )
        .bind(input.name.trim())
        .bind(&input.contact_person)
        .bind(&input.phone)
        .bind(&input.email)
        .bind(&input.address)
        .bind(party_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| AppError::on_unique_violation(e, "party name"))?
        .ok_or_else(|| AppError::NotFound("Party".to_string()))?;

        Ok(party)
    }

    /// List all parties, ordered by name
    pub async fn list_parties(&self) -> AppResult<Vec<PartySummary>> {
        let parties = sqlx::query_as::<_, PartySummary>(
            "SELECT id, name FROM parties ORDER BY name",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(parties)
    }

    /// Get full party details by id
    pub async fn get_party(&self, party_id: i64) -> AppResult<Party> {
        let party = sqlx::query_as::<_, Party>(
            r#"
            SELECT id, name, contact_person, phone, email, address, created_at
            FROM parties
            WHERE id = $1
            "#,
        )
        .bind(party_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Party".to_string()))?;

        Ok(party)
    }

    fn validate(input: &PartyInput) -> AppResult<()> {
        if let Err(msg) = validation::validate_name(&input.name) {
            return Err(AppError::Validation {
                field: "name".to_string(),
                message: msg.to_string(),
            });
        }

        if let Some(email) = input.email.as_deref() {
            if !email.is_empty() {
                if let Err(msg) = validation::validate_email(email) {
                    return Err(AppError::Validation {
                        field: "email".to_string(),
                        message: msg.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}
