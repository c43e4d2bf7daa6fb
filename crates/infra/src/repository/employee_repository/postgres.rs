//! PostgreSQL 実装の EmployeeRepository

use async_trait::async_trait;
use roster_domain::employee::{Employee, EmployeeId};
use sqlx::PgPool;

use super::EmployeeRepository;
use crate::error::InfraError;

/// `employees` テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct EmployeeRow {
    employee_id:          i64,
    employee_name:        Option<String>,
    employee_description: Option<String>,
}

impl EmployeeRow {
    fn into_employee(self) -> Result<Employee, InfraError> {
        let id = EmployeeId::new(self.employee_id).map_err(|e| {
            InfraError::unexpected(format!("employees.employee_id が不正です: {e}"))
        })?;
        Ok(Employee::from_db(
            id,
            self.employee_name,
            self.employee_description,
        ))
    }
}

/// PostgreSQL 実装の EmployeeRepository
#[derive(Debug, Clone)]
pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// IDENTITY で採番して挿入する
    ///
    /// 呼び出し元が指定した ID で使用中の値が払い出された場合は、
    /// 挿入をスキップして次の値で再試行する。
    async fn insert_new(&self, employee: &Employee) -> Result<EmployeeRow, InfraError> {
        loop {
            let row = sqlx::query_as::<_, EmployeeRow>(
                r#"
                INSERT INTO employees (employee_name, employee_description)
                VALUES ($1, $2)
                ON CONFLICT (employee_id) DO NOTHING
                RETURNING employee_id, employee_name, employee_description
                "#,
            )
            .bind(employee.name())
            .bind(employee.description())
            .fetch_optional(&self.pool)
            .await?;

            if let Some(row) = row {
                return Ok(row);
            }
            tracing::debug!("採番した ID が使用中のため再試行します");
        }
    }

    /// 指定 ID で upsert する
    ///
    /// IDENTITY のシーケンスは進めない。
    async fn upsert(&self, id: EmployeeId, employee: &Employee) -> Result<EmployeeRow, InfraError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            INSERT INTO employees (employee_id, employee_name, employee_description)
            VALUES ($1, $2, $3)
            ON CONFLICT (employee_id) DO UPDATE
            SET employee_name = EXCLUDED.employee_name,
                employee_description = EXCLUDED.employee_description
            RETURNING employee_id, employee_name, employee_description
            "#,
        )
        .bind(id.as_i64())
        .bind(employee.name())
        .bind(employee.description())
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(employee_id = ?employee.id()))]
    async fn save(&self, employee: &Employee) -> Result<Employee, InfraError> {
        let row = match employee.id() {
            None => self.insert_new(employee).await?,
            Some(id) => self.upsert(id, employee).await?,
        };
        row.into_employee()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, InfraError> {
        let row = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT employee_id, employee_name, employee_description
            FROM employees
            WHERE employee_id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(EmployeeRow::into_employee).transpose()
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Employee>, InfraError> {
        let rows = sqlx::query_as::<_, EmployeeRow>(
            r#"
            SELECT employee_id, employee_name, employee_description
            FROM employees
            ORDER BY employee_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(EmployeeRow::into_employee).collect()
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete_by_id(&self, id: &EmployeeId) -> Result<(), InfraError> {
        sqlx::query(
            r#"
            DELETE FROM employees
            WHERE employee_id = $1
            "#,
        )
        .bind(id.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
