//! `SQLite` repository implementation for todo item storage.

use super::{
    models::{NewTodoRow, TodoChangeset, TodoRow},
    schema::todos,
};
use crate::todo::{
    domain::{Description, PersistedTodoData, Title, TodoId, TodoItem, TodoStatus},
    ports::{TodoRepository, TodoRepositoryError, TodoRepositoryResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel::sqlite::SqliteConnection;
use uuid::Uuid;

/// `SQLite` connection pool type used by todo adapters.
pub type TodoSqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// Idempotent schema bootstrap statement.
const CREATE_TODOS_TABLE: &str = "\
    CREATE TABLE IF NOT EXISTS todos (\
        id TEXT PRIMARY KEY NOT NULL,\
        title TEXT NOT NULL,\
        description TEXT NOT NULL,\
        status TEXT NOT NULL,\
        created_at TEXT NOT NULL,\
        updated_at TEXT NOT NULL\
    )";

/// `SQLite`-backed todo repository.
///
/// Connections are scoped per operation: each call checks a connection
/// out of the pool, runs its statements on the blocking thread pool, and
/// returns the connection before resolving.
#[derive(Debug, Clone)]
pub struct SqliteTodoRepository {
    pool: TodoSqlitePool,
}

impl SqliteTodoRepository {
    /// Creates a new repository from a `SQLite` connection pool.
    #[must_use]
    pub const fn new(pool: TodoSqlitePool) -> Self {
        Self { pool }
    }

    /// Creates the `todos` table when it does not already exist.
    ///
    /// Safe to call on every startup.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Persistence`] when the statement
    /// cannot be executed.
    pub async fn run_migrations(&self) -> TodoRepositoryResult<()> {
        self.run_blocking(|connection| {
            diesel::sql_query(CREATE_TODOS_TABLE)
                .execute(connection)
                .map_err(TodoRepositoryError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn run_blocking<F, T>(&self, f: F) -> TodoRepositoryResult<T>
    where
        F: FnOnce(&mut SqliteConnection) -> TodoRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TodoRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TodoRepositoryError::persistence)?
    }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
    async fn create(&self, item: &TodoItem) -> TodoRepositoryResult<()> {
        let item_id = item.id();
        let new_row = to_new_row(item);

        self.run_blocking(move |connection| {
            diesel::insert_into(todos::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TodoRepositoryError::Duplicate(item_id)
                    }
                    _ => TodoRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn get(&self, id: TodoId) -> TodoRepositoryResult<TodoItem> {
        self.run_blocking(move |connection| {
            let row = todos::table
                .filter(todos::id.eq(id.to_string()))
                .select(TodoRow::as_select())
                .first::<TodoRow>(connection)
                .optional()
                .map_err(TodoRepositoryError::persistence)?;
            row.map_or(Err(TodoRepositoryError::NotFound(id)), row_to_item)
        })
        .await
    }

    async fn list(&self) -> TodoRepositoryResult<Vec<TodoItem>> {
        self.run_blocking(|connection| {
            let rows = todos::table
                .select(TodoRow::as_select())
                .load::<TodoRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            rows.into_iter().map(row_to_item).collect()
        })
        .await
    }

    async fn update(&self, item: &TodoItem) -> TodoRepositoryResult<()> {
        let item_id = item.id();
        let changeset = to_changeset(item);

        self.run_blocking(move |connection| {
            let affected = diesel::update(todos::table.filter(todos::id.eq(item_id.to_string())))
                .set(&changeset)
                .execute(connection)
                .map_err(TodoRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TodoRepositoryError::NotFound(item_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: TodoId) -> TodoRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(todos::table.filter(todos::id.eq(id.to_string())))
                .execute(connection)
                .map_err(TodoRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TodoRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn to_new_row(item: &TodoItem) -> NewTodoRow {
    NewTodoRow {
        id: item.id().to_string(),
        title: item.title().as_str().to_owned(),
        description: item.description().as_str().to_owned(),
        status: item.status().as_str().to_owned(),
        created_at: item.created_at().to_rfc3339(),
        updated_at: item.updated_at().to_rfc3339(),
    }
}

fn to_changeset(item: &TodoItem) -> TodoChangeset {
    TodoChangeset {
        title: item.title().as_str().to_owned(),
        description: item.description().as_str().to_owned(),
        status: item.status().as_str().to_owned(),
        updated_at: item.updated_at().to_rfc3339(),
    }
}

fn row_to_item(row: TodoRow) -> TodoRepositoryResult<TodoItem> {
    let TodoRow {
        id,
        title,
        description,
        status,
        created_at,
        updated_at,
    } = row;

    let parsed_id = Uuid::parse_str(&id).map_err(TodoRepositoryError::persistence)?;
    let parsed_status =
        TodoStatus::try_from(status.as_str()).map_err(TodoRepositoryError::persistence)?;

    let data = PersistedTodoData {
        id: TodoId::from_uuid(parsed_id),
        title: Title::new(title).map_err(TodoRepositoryError::persistence)?,
        description: Description::new(description).map_err(TodoRepositoryError::persistence)?,
        status: parsed_status,
        created_at: parse_timestamp(&created_at)?,
        updated_at: parse_timestamp(&updated_at)?,
    };
    Ok(TodoItem::from_persisted(data))
}

fn parse_timestamp(value: &str) -> TodoRepositoryResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(TodoRepositoryError::persistence)
}
