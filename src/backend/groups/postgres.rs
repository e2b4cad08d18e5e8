//! PostgreSQL group store
//!
//! Groups live in the `groups` table with `users`/`members` as `TEXT[]`
//! columns; posts live in `posts`, keyed by member. Union and removal are
//! single `UPDATE` statements so they stay atomic per row.

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Row};

use super::store::{GroupStore, StoreError};
use crate::shared::groups::{GroupDocument, MembershipField, Post};

pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn column(field: MembershipField) -> &'static str {
    match field {
        MembershipField::Users => "users",
        MembershipField::Members => "members",
    }
}

#[async_trait::async_trait]
impl GroupStore for PostgresStore {
    async fn list_groups(&self) -> Result<Vec<GroupDocument>, StoreError> {
        let rows = sqlx::query("SELECT id, name, users, members, created FROM groups ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|row| -> Result<GroupDocument, StoreError> {
                Ok(GroupDocument {
                    id: row.try_get("id")?,
                    name: row.try_get("name")?,
                    users: row.try_get::<Option<Vec<String>>, _>("users")?,
                    members: row.try_get::<Option<Vec<String>>, _>("members")?,
                    created: row.try_get::<Option<DateTime<Utc>>, _>("created")?,
                })
            })
            .collect()
    }

    async fn array_union(
        &self,
        group_id: &str,
        field: MembershipField,
        value: &str,
    ) -> Result<(), StoreError> {
        let col = column(field);
        let sql = format!(
            "UPDATE groups SET {col} = CASE \
                WHEN $2 = ANY(COALESCE({col}, '{{}}'::TEXT[])) THEN {col} \
                ELSE array_append(COALESCE({col}, '{{}}'::TEXT[]), $2) \
             END \
             WHERE id = $1"
        );

        let result = sqlx::query(&sql)
            .bind(group_id)
            .bind(value)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(group_id));
        }
        Ok(())
    }

    async fn array_remove(
        &self,
        group_id: &str,
        field: MembershipField,
        value: &str,
    ) -> Result<(), StoreError> {
        let col = column(field);
        let sql = format!(
            "UPDATE groups SET {col} = array_remove(COALESCE({col}, '{{}}'::TEXT[]), $2) WHERE id = $1"
        );

        let result = sqlx::query(&sql)
            .bind(group_id)
            .bind(value)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found(group_id));
        }
        Ok(())
    }

    async fn posts_by_member(&self, member: &str) -> Result<Vec<Post>, StoreError> {
        let rows = sqlx::query("SELECT id, categories FROM posts WHERE member = $1 ORDER BY id")
            .bind(member)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|row| -> Result<Post, StoreError> {
                Ok(Post {
                    id: row.try_get("id")?,
                    categories: row
                        .try_get::<Option<Vec<String>>, _>("categories")?
                        .unwrap_or_default(),
                })
            })
            .collect()
    }
}
