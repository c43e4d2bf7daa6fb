//! 従業員ユースケース
//!
//! ハンドラの検証とは独立に入力を再検証する。不正な入力はリポジトリに到達しない。

use std::sync::Arc;

use roster_domain::{
    DomainError,
    employee::{Employee, EmployeeId},
};
use roster_infra::repository::EmployeeRepository;
use roster_shared::{event_log::event, log_business_event};

use crate::error::CoreError;

const EMPLOYEE_ENTITY: &str = "従業員";

/// 従業員の保存・更新の入力
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeInput {
    pub employee_id: Option<i64>,
    pub name:        Option<String>,
    pub description: Option<String>,
}

impl EmployeeInput {
    /// 保存用のエンティティに変換する
    ///
    /// 0 以下の ID は未設定として扱う（新規作成）。
    fn into_employee(self) -> Employee {
        let id = self
            .employee_id
            .and_then(|value| EmployeeId::new(value).ok());
        Employee::new(id, self.name, self.description)
    }
}

/// 従業員ユースケース
pub struct EmployeeUseCaseImpl {
    repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeUseCaseImpl {
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    /// 従業員を保存する
    ///
    /// ID 未設定なら新規作成、設定済みならその ID のレコードを上書きする。
    pub async fn save_employee(&self, input: Option<EmployeeInput>) -> Result<Employee, CoreError> {
        let input = input.ok_or_else(missing_body)?;
        let employee = input.into_employee();
        let is_new = employee.is_new();

        let saved = self.repository.save(&employee).await?;

        let action = if is_new {
            event::action::EMPLOYEE_CREATED
        } else {
            event::action::EMPLOYEE_UPDATED
        };
        log_saved(action, &saved);

        Ok(saved)
    }

    /// 従業員を更新する
    ///
    /// ID は必須。該当レコードの有無は確認せず upsert する。
    pub async fn update_employee(
        &self,
        input: Option<EmployeeInput>,
    ) -> Result<Employee, CoreError> {
        let input = input.ok_or_else(missing_body)?;
        let id = require_id(input.employee_id)?;
        let employee = Employee::new(Some(id), input.name, input.description);

        let saved = self.repository.save(&employee).await?;
        log_saved(event::action::EMPLOYEE_UPDATED, &saved);

        Ok(saved)
    }

    /// 全従業員を取得する
    pub async fn list_employees(&self) -> Result<Vec<Employee>, CoreError> {
        Ok(self.repository.find_all().await?)
    }

    /// ID で従業員を取得する
    ///
    /// 該当レコードがない場合は [`CoreError::NotFound`]。
    pub async fn get_employee(&self, employee_id: Option<i64>) -> Result<Employee, CoreError> {
        let id = require_id(employee_id)?;

        self.repository.find_by_id(&id).await?.ok_or_else(|| {
            DomainError::NotFound {
                entity_type: EMPLOYEE_ENTITY,
                id:          id.to_string(),
            }
            .into()
        })
    }

    /// ID で従業員を削除する
    ///
    /// 該当レコードがなくてもエラーにならない。
    pub async fn delete_employee(&self, employee_id: Option<i64>) -> Result<(), CoreError> {
        let id = require_id(employee_id)?;

        self.repository.delete_by_id(&id).await?;

        log_business_event!(
            event.category = event::category::EMPLOYEE,
            event.action = event::action::EMPLOYEE_DELETED,
            event.entity_type = event::entity_type::EMPLOYEE,
            event.entity_id = %id,
            event.result = event::result::SUCCESS,
            "従業員を削除"
        );

        Ok(())
    }
}

fn missing_body() -> CoreError {
    CoreError::BadRequest("従業員を指定してください".to_string())
}

fn require_id(employee_id: Option<i64>) -> Result<EmployeeId, CoreError> {
    let value =
        employee_id.ok_or_else(|| CoreError::BadRequest("従業員 ID を指定してください".to_string()))?;
    Ok(EmployeeId::new(value)?)
}

fn log_saved(action: &'static str, employee: &Employee) {
    let entity_id = employee
        .id()
        .map(|id| id.to_string())
        .unwrap_or_default();

    log_business_event!(
        event.category = event::category::EMPLOYEE,
        event.action = action,
        event.entity_type = event::entity_type::EMPLOYEE,
        event.entity_id = %entity_id,
        event.result = event::result::SUCCESS,
        "従業員を保存"
    );
}
