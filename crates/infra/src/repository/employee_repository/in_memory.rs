//! インメモリ実装の EmployeeRepository
//!
//! `DATABASE_URL` 未設定時の組み込みストア。プロセス終了でデータは失われる。

use std::collections::BTreeMap;

use async_trait::async_trait;
use roster_domain::employee::{Employee, EmployeeId};
use tokio::sync::RwLock;

use super::EmployeeRepository;
use crate::error::InfraError;

#[derive(Debug, Default)]
struct Store {
    employees: BTreeMap<EmployeeId, Employee>,
    /// 自動採番で最後に払い出した ID（呼び出し元が指定した ID では進めない）
    last_id:   i64,
}

impl Store {
    /// 次の自動採番 ID を払い出す
    ///
    /// 呼び出し元が指定した ID で使用中の値は飛ばす。
    fn next_id(&mut self) -> Result<EmployeeId, InfraError> {
        loop {
            let next = self
                .last_id
                .checked_add(1)
                .ok_or_else(|| InfraError::unexpected("従業員 ID の採番が上限に達しました"))?;
            self.last_id = next;

            let id = EmployeeId::new(next).map_err(|e| InfraError::unexpected(e.to_string()))?;
            if !self.employees.contains_key(&id) {
                return Ok(id);
            }
        }
    }
}

/// インメモリ実装の EmployeeRepository
///
/// 書き込みは `RwLock` で直列化される。
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    store: RwLock<Store>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(employee_id = ?employee.id()))]
    async fn save(&self, employee: &Employee) -> Result<Employee, InfraError> {
        let mut store = self.store.write().await;

        let id = match employee.id() {
            Some(id) => id,
            None => store.next_id()?,
        };

        let saved = employee.clone().with_id(id);
        store.employees.insert(id, saved.clone());
        Ok(saved)
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, InfraError> {
        Ok(self.store.read().await.employees.get(id).cloned())
    }

    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<Employee>, InfraError> {
        Ok(self.store.read().await.employees.values().cloned().collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete_by_id(&self, id: &EmployeeId) -> Result<(), InfraError> {
        self.store.write().await.employees.remove(id);
        Ok(())
    }
}
