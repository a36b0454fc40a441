//! Generic CRUD repository shared by every table.

use std::marker::PhantomData;

use inventory_core::types::DbId;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, Postgres, QueryBuilder};

use crate::error::RepoError;
use crate::DbPool;

/// A value bound to a single column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Int(i32),
}

/// A column paired with the value to write into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    pub column: &'static str,
    pub value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    pub fn text(column: &'static str, value: &'a str) -> Self {
        Self {
            column,
            value: FieldValue::Text(value),
        }
    }

    pub fn int(column: &'static str, value: i32) -> Self {
        Self {
            column,
            value: FieldValue::Int(value),
        }
    }
}

/// Binds a table to its row type, DTOs and column layout.
///
/// Implementors never build SQL themselves. They only report which columns
/// carry which values; [`EntityRepo`] turns that into statements.
pub trait EntitySchema: Send + Sync + 'static {
    type Row: for<'r> FromRow<'r, PgRow> + Send + Unpin + 'static;
    type Create: Sync;
    type Update: Sync;

    /// Entity name used in errors and log fields.
    const ENTITY: &'static str;
    const TABLE: &'static str;
    /// Full column list returned by every statement, in `Row` field order.
    const COLUMNS: &'static str;

    /// Every column written on insert, paired with its value.
    fn insert_fields(input: &Self::Create) -> Vec<Field<'_>>;

    /// The mutable fields present in `input`, in schema order.
    ///
    /// Presence is `Option::is_some`; an empty string or zero is still a
    /// change.
    fn changed_fields(input: &Self::Update) -> Vec<Field<'_>>;
}

fn push_value<'a>(query: &mut QueryBuilder<'a, Postgres>, value: FieldValue<'a>) {
    match value {
        FieldValue::Text(v) => query.push_bind(v),
        FieldValue::Int(v) => query.push_bind(v),
    };
}

/// `INSERT INTO <table> (<cols>) VALUES ($1, ..) RETURNING <all cols>`.
pub fn build_insert<'a, S: EntitySchema>(fields: &[Field<'a>]) -> QueryBuilder<'a, Postgres> {
    let columns: Vec<&str> = fields.iter().map(|f| f.column).collect();

    let mut query = QueryBuilder::new(format!(
        "INSERT INTO {} ({}) VALUES (",
        S::TABLE,
        columns.join(", ")
    ));
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            query.push(", ");
        }
        push_value(&mut query, field.value);
    }
    query.push(") RETURNING ").push(S::COLUMNS);
    query
}

/// `UPDATE <table> SET c1 = $1, .. WHERE id = $n RETURNING <all cols>`.
///
/// The SET clause holds exactly `changes`, one placeholder each. Callers must
/// reject an empty `changes` beforehand.
pub fn build_update<'a, S: EntitySchema>(
    id: DbId,
    changes: &[Field<'a>],
) -> QueryBuilder<'a, Postgres> {
    let mut query = QueryBuilder::new(format!("UPDATE {} SET ", S::TABLE));
    for (i, field) in changes.iter().enumerate() {
        if i > 0 {
            query.push(", ");
        }
        query.push(field.column).push(" = ");
        push_value(&mut query, field.value);
    }
    query
        .push(" WHERE id = ")
        .push_bind(id)
        .push(" RETURNING ")
        .push(S::COLUMNS);
    query
}

/// CRUD operations over one table.
///
/// Holds its own handle to the pool; cloning is cheap.
pub struct EntityRepo<S> {
    pool: DbPool,
    _schema: PhantomData<fn() -> S>,
}

impl<S> Clone for EntityRepo<S> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _schema: PhantomData,
        }
    }
}

impl<S: EntitySchema> EntityRepo<S> {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            _schema: PhantomData,
        }
    }

    /// List all rows, most recently created first.
    pub async fn list(&self) -> Result<Vec<S::Row>, RepoError> {
        let query = format!(
            "SELECT {} FROM {} ORDER BY created_at DESC, id DESC",
            S::COLUMNS,
            S::TABLE
        );
        let rows = sqlx::query_as::<_, S::Row>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Find a row by primary key.
    pub async fn find_by_id(&self, id: DbId) -> Result<Option<S::Row>, RepoError> {
        let query = format!(
            "SELECT {} FROM {} WHERE id = $1 LIMIT 1",
            S::COLUMNS,
            S::TABLE
        );
        let row = sqlx::query_as::<_, S::Row>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Like [`Self::find_by_id`], but a missing row is [`RepoError::NotFound`].
    pub async fn get_by_id(&self, id: DbId) -> Result<S::Row, RepoError> {
        self.find_by_id(id).await?.ok_or(RepoError::NotFound {
            entity: S::ENTITY,
            id,
        })
    }

    /// Insert a new row, returning it as stored (with `id` and `created_at`).
    pub async fn create(&self, input: &S::Create) -> Result<S::Row, RepoError> {
        let fields = S::insert_fields(input);
        let mut query = build_insert::<S>(&fields);
        query
            .build_query_as::<S::Row>()
            .fetch_one(&self.pool)
            .await
            .map_err(|err| RepoError::from_write(S::ENTITY, err))
    }

    /// Apply the present fields of `input` to row `id` in one statement.
    ///
    /// Returns the full row after the update. With no present fields this
    /// fails with [`RepoError::NoFieldsProvided`] without touching the
    /// database, whether or not `id` exists.
    pub async fn update_partial(
        &self,
        id: DbId,
        input: &S::Update,
    ) -> Result<S::Row, RepoError> {
        let changes = S::changed_fields(input);
        if changes.is_empty() {
            return Err(RepoError::NoFieldsProvided { entity: S::ENTITY });
        }

        let columns: Vec<&str> = changes.iter().map(|f| f.column).collect();
        tracing::debug!(entity = S::ENTITY, id, ?columns, "Applying partial update");

        let mut query = build_update::<S>(id, &changes);
        query
            .build_query_as::<S::Row>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| RepoError::from_write(S::ENTITY, err))?
            .ok_or(RepoError::NotFound {
                entity: S::ENTITY,
                id,
            })
    }

    /// Delete row `id`, returning it as it was just before deletion.
    pub async fn delete_by_id(&self, id: DbId) -> Result<S::Row, RepoError> {
        let query = format!(
            "DELETE FROM {} WHERE id = $1 RETURNING {}",
            S::TABLE,
            S::COLUMNS
        );
        sqlx::query_as::<_, S::Row>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepoError::NotFound {
                entity: S::ENTITY,
                id,
            })
    }
}
