//! Registry persistence adapter for the `usr` table.
//!
//! Every statement is built by sea-query, so all values travel as bound
//! parameters, including the columns of a partial update.

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

use super::entities::usr::{self, ActiveModel, Entity as UsrEntity};
use common::{AppError, AppResult, OptionExt};
use domain::{DomainError, NewUser, User, UserPatch};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Registry operations, injected into the HTTP layer.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new row; the id is assigned by the database
    async fn add_user(&self, user: NewUser) -> AppResult<()>;

    /// Delete the row with `id`, `NotFound` when nothing was deleted
    async fn delete_user(&self, id: i32) -> AppResult<()>;

    /// Write the columns present in `patch`, `NotFound` when nothing was updated
    async fn update_user(&self, id: i32, patch: UserPatch) -> AppResult<()>;

    /// Fetch a single user
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// Fetch every user, in whatever order the database returns them
    async fn get_all_users(&self) -> AppResult<Vec<User>>;
}

/// Registry backed by a pooled database connection.
pub struct Registry {
    db: DatabaseConnection,
}

impl Registry {
    /// Create new registry over a connection pool
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for Registry {
    async fn add_user(&self, user: NewUser) -> AppResult<()> {
        let active_model = ActiveModel {
            name: Set(user.name),
            surname: Set(user.surname),
            position: Set(user.position.label().to_string()),
            project: Set(user.project),
            ..Default::default()
        };

        UsrEntity::insert(active_model)
            .exec_without_returning(&self.db)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        let result = UsrEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            tracing::debug!(id, "No rows affected on delete");
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn update_user(&self, id: i32, patch: UserPatch) -> AppResult<()> {
        if patch.is_empty() {
            return Err(DomainError::EmptyPatch.into());
        }

        let mut update = UsrEntity::update_many();
        if let Some(name) = patch.name {
            update = update.col_expr(usr::Column::Name, Expr::value(name));
        }
        if let Some(surname) = patch.surname {
            update = update.col_expr(usr::Column::Surname, Expr::value(surname));
        }
        if let Some(position) = patch.position {
            update = update.col_expr(usr::Column::Position, Expr::value(position.label()));
        }
        if let Some(project) = patch.project {
            update = update.col_expr(usr::Column::Project, Expr::value(project));
        }

        let result = update
            .filter(usr::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            tracing::debug!(id, "No rows affected on update");
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn get_user(&self, id: i32) -> AppResult<User> {
        let model = UsrEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?
            .ok_or_not_found()?;

        Ok(User::try_from(model)?)
    }

    async fn get_all_users(&self) -> AppResult<Vec<User>> {
        let models = UsrEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        tracing::debug!(rows = models.len(), "Fetched registry rows");
        let users = models
            .into_iter()
            .map(User::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::Grade;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, Transaction};

    fn exec_result(rows_affected: u64) -> MockExecResult {
        MockExecResult {
            last_insert_id: 0,
            rows_affected,
        }
    }

    fn row(id: i32, name: &str, surname: &str, position: &str, project: &str) -> usr::Model {
        usr::Model {
            id,
            name: name.to_string(),
            surname: surname.to_string(),
            position: position.to_string(),
            project: project.to_string(),
        }
    }

    #[tokio::test]
    async fn add_user_inserts_grade_label() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec_result(1)])
            .into_connection();
        let registry = Registry::new(db);

        let result = registry
            .add_user(NewUser {
                name: "And".to_string(),
                surname: "Ersen".to_string(),
                position: Grade::Trainee,
                project: "Test".to_string(),
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(
            registry.db.into_transaction_log(),
            vec![Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"INSERT INTO "usr" ("name", "surname", "position", "project") VALUES ($1, $2, $3, $4)"#,
                ["And".into(), "Ersen".into(), "trainee".into(), "Test".into()],
            )]
        );
    }

    #[tokio::test]
    async fn add_user_reports_storage_failure() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let registry = Registry::new(db);

        let result = registry
            .add_user(NewUser {
                name: "And".to_string(),
                surname: "Ersen".to_string(),
                position: Grade::Junior,
                project: "Test".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Database(_))));
    }

    #[tokio::test]
    async fn delete_user_binds_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec_result(1)])
            .into_connection();
        let registry = Registry::new(db);

        assert!(registry.delete_user(5).await.is_ok());
        assert_eq!(
            registry.db.into_transaction_log(),
            vec![Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"DELETE FROM "usr" WHERE "usr"."id" = $1"#,
                [5i32.into()],
            )]
        );
    }

    #[tokio::test]
    async fn delete_user_without_affected_rows_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec_result(0)])
            .into_connection();
        let registry = Registry::new(db);

        let result = registry.delete_user(5).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn update_user_touches_only_supplied_columns() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec_result(1)])
            .into_connection();
        let registry = Registry::new(db);

        let patch = UserPatch {
            project: Some("X".to_string()),
            ..Default::default()
        };
        assert!(registry.update_user(5, patch).await.is_ok());
        assert_eq!(
            registry.db.into_transaction_log(),
            vec![Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"UPDATE "usr" SET "project" = $1 WHERE "usr"."id" = $2"#,
                ["X".into(), 5i32.into()],
            )]
        );
    }

    #[tokio::test]
    async fn update_user_binds_hostile_values() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec_result(1)])
            .into_connection();
        let registry = Registry::new(db);

        let patch = UserPatch {
            name: Some("Andi".to_string()),
            position: Some(Grade::Middle),
            project: Some("x', name='pwned".to_string()),
            ..Default::default()
        };
        assert!(registry.update_user(7, patch).await.is_ok());
        assert_eq!(
            registry.db.into_transaction_log(),
            vec![Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"UPDATE "usr" SET "name" = $1, "position" = $2, "project" = $3 WHERE "usr"."id" = $4"#,
                [
                    "Andi".into(),
                    "middle".into(),
                    "x', name='pwned".into(),
                    7i32.into()
                ],
            )]
        );
    }

    #[tokio::test]
    async fn update_user_without_affected_rows_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec_result(0)])
            .into_connection();
        let registry = Registry::new(db);

        let patch = UserPatch {
            surname: Some("Erseni".to_string()),
            ..Default::default()
        };
        let result = registry.update_user(5, patch).await;
        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn update_user_rejects_empty_patch_without_query() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let registry = Registry::new(db);

        let result = registry.update_user(5, UserPatch::default()).await;

        assert!(matches!(result, Err(AppError::BadArgument(_))));
        assert!(registry.db.into_transaction_log().is_empty());
    }

    #[tokio::test]
    async fn get_user_decodes_label_to_code() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(5, "And", "Ersen", "middle", "Test")]])
            .into_connection();
        let registry = Registry::new(db);

        let user = registry.get_user(5).await.unwrap();

        assert_eq!(
            user,
            User {
                id: 5,
                name: "And".to_string(),
                surname: "Ersen".to_string(),
                position: Grade::Middle,
                project: "Test".to_string(),
            }
        );
        assert_eq!(
            registry.db.into_transaction_log(),
            vec![Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"SELECT "usr"."id", "usr"."name", "usr"."surname", "usr"."position", "usr"."project" FROM "usr" WHERE "usr"."id" = $1 LIMIT $2"#,
                [5i32.into(), 1u64.into()],
            )]
        );
    }

    #[tokio::test]
    async fn middle_grade_survives_insert_and_fetch() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([exec_result(1)])
            .append_query_results([vec![row(5, "And", "Ersen", "middle", "Test")]])
            .into_connection();
        let registry = Registry::new(db);

        registry
            .add_user(NewUser {
                name: "And".to_string(),
                surname: "Ersen".to_string(),
                position: Grade::try_from(3).unwrap(),
                project: "Test".to_string(),
            })
            .await
            .unwrap();
        let fetched = registry.get_user(5).await.unwrap();

        assert_eq!(fetched.position.code(), 3);
        let log = registry.db.into_transaction_log();
        assert_eq!(log.len(), 2);
        assert_eq!(
            log[0],
            Transaction::from_sql_and_values(
                DatabaseBackend::Postgres,
                r#"INSERT INTO "usr" ("name", "surname", "position", "project") VALUES ($1, $2, $3, $4)"#,
                ["And".into(), "Ersen".into(), "middle".into(), "Test".into()],
            )
        );
    }

    #[tokio::test]
    async fn get_user_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<usr::Model>::new()])
            .into_connection();
        let registry = Registry::new(db);

        assert!(matches!(registry.get_user(5).await, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn get_user_with_corrupt_label_is_internal() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(5, "And", "Ersen", "boss", "Test")]])
            .into_connection();
        let registry = Registry::new(db);

        assert!(matches!(registry.get_user(5).await, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn get_all_users_returns_every_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                row(1, "And1", "Ersen1", "middle", "Test1"),
                row(2, "And2", "Ersen2", "senior", "Test2"),
                row(3, "And3", "Ersen3", "trainee", "Test3"),
            ]])
            .into_connection();
        let registry = Registry::new(db);

        let users = registry.get_all_users().await.unwrap();

        let positions: Vec<i32> = users.iter().map(|u| u.position.code()).collect();
        assert_eq!(positions, [3, 4, 1]);
        assert_eq!(users[1].name, "And2");
    }

    #[tokio::test]
    async fn get_all_users_reports_storage_failure() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let registry = Registry::new(db);

        assert!(matches!(
            registry.get_all_users().await,
            Err(AppError::Database(_))
        ));
    }
}
