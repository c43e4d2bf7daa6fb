//! # テスト用モックリポジトリ
//!
//! ユースケーステストで使用するインメモリモック。
//! 呼び出しを記録するため、「不正な入力はストアに到達しない」ことを検証できる。
//!
//! ```toml
//! [dev-dependencies]
//! roster-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use roster_domain::employee::{Employee, EmployeeId};

use crate::{error::InfraError, repository::EmployeeRepository};

/// 記録されたリポジトリ呼び出し
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeRepositoryCall {
    Save(Employee),
    FindById(EmployeeId),
    FindAll,
    DeleteById(EmployeeId),
}

#[derive(Default)]
struct MockState {
    employees: Vec<Employee>,
    next_id:   i64,
    calls:     Vec<EmployeeRepositoryCall>,
}

// ===== MockEmployeeRepository =====

#[derive(Clone, Default)]
pub struct MockEmployeeRepository {
    state: Arc<Mutex<MockState>>,
}

impl MockEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 呼び出しを記録せずに従業員を登録する
    ///
    /// `employee` の ID は設定済みであること。
    pub fn add_employee(&self, employee: Employee) {
        let mut state = self.state.lock().unwrap();
        let id = employee.id().expect("ID 設定済みの従業員を登録すること");
        state.employees.retain(|e| e.id() != Some(id));
        state.employees.push(employee);
    }

    /// 記録された呼び出しを取得する
    pub fn calls(&self) -> Vec<EmployeeRepositoryCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// 呼び出しが一度もないか
    pub fn is_untouched(&self) -> bool {
        self.state.lock().unwrap().calls.is_empty()
    }
}

#[async_trait]
impl EmployeeRepository for MockEmployeeRepository {
    async fn save(&self, employee: &Employee) -> Result<Employee, InfraError> {
        let mut state = self.state.lock().unwrap();
        state
            .calls
            .push(EmployeeRepositoryCall::Save(employee.clone()));

        let id = match employee.id() {
            Some(id) => id,
            None => loop {
                state.next_id += 1;
                let candidate = EmployeeId::new(state.next_id).unwrap();
                if !state.employees.iter().any(|e| e.id() == Some(candidate)) {
                    break candidate;
                }
            },
        };
        let saved = employee.clone().with_id(id);
        state.employees.retain(|e| e.id() != Some(id));
        state.employees.push(saved.clone());
        Ok(saved)
    }

    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, InfraError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(EmployeeRepositoryCall::FindById(*id));
        Ok(state
            .employees
            .iter()
            .find(|e| e.id() == Some(*id))
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, InfraError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(EmployeeRepositoryCall::FindAll);
        let mut employees = state.employees.clone();
        employees.sort_by_key(Employee::id);
        Ok(employees)
    }

    async fn delete_by_id(&self, id: &EmployeeId) -> Result<(), InfraError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(EmployeeRepositoryCall::DeleteById(*id));
        state.employees.retain(|e| e.id() != Some(*id));
        Ok(())
    }
}
