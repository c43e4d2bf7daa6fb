//! # 従業員
//!
//! 従業員台帳の唯一のエンティティ。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 説明 |
//! |---|------------|------|
//! | [`EmployeeId`] | 従業員 ID | 永続化層が初回保存時に採番する正の整数 |
//! | [`Employee`] | 従業員 | 名前と説明を持つレコード。他エンティティとの関連はない |
//!
//! ## ライフサイクル
//!
//! - ID 未設定の従業員を保存すると、永続化層が ID を採番して新規作成する
//! - ID 設定済みの従業員を保存すると、その ID のレコードを上書きする（upsert）
//! - ID 指定で削除する
//!
//! ## 使用例
//!
//! ```rust
//! use roster_domain::employee::{Employee, EmployeeId};
//!
//! let draft = Employee::new(
//!     None,
//!     Some("John Doe".to_string()),
//!     Some("Senior Developer".to_string()),
//! );
//! assert!(draft.is_new());
//!
//! let saved = draft.with_id(EmployeeId::new(1).unwrap());
//! assert_eq!(saved.id().map(|id| id.as_i64()), Some(1));
//! assert_eq!(saved.name(), Some("John Doe"));
//! ```

use derive_more::Display;

use crate::DomainError;

/// 従業員 ID（正の整数）
///
/// 0 以下の値は構築できない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display("{_0}")]
pub struct EmployeeId(i64);

impl EmployeeId {
    /// 従業員 ID を作成する
    ///
    /// # エラー
    ///
    /// `value` が 0 以下の場合は [`DomainError::Validation`] を返す。
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value <= 0 {
            return Err(DomainError::Validation(format!(
                "従業員 ID は正の整数である必要があります: {value}"
            )));
        }
        Ok(Self(value))
    }

    /// 内部の整数値を取得する
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for EmployeeId {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// 従業員エンティティ
///
/// # 不変条件
///
/// - `id` が `Some` の場合、その値は正の整数（[`EmployeeId`] が保証）
/// - `id` が `None` の場合は未保存
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    id:          Option<EmployeeId>,
    name:        Option<String>,
    description: Option<String>,
}

impl Employee {
    /// 従業員を作成する
    ///
    /// `id` が `None` なら新規、`Some` なら既存レコードの指定とみなす。
    pub fn new(
        id: Option<EmployeeId>,
        name: Option<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            description,
        }
    }

    /// 永続化済みのレコードから復元する
    pub fn from_db(id: EmployeeId, name: Option<String>, description: Option<String>) -> Self {
        Self {
            id: Some(id),
            name,
            description,
        }
    }

    /// ID を設定した従業員を返す
    ///
    /// 永続化層が採番した ID を反映するために使用する。
    pub fn with_id(self, id: EmployeeId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    /// 未保存（ID 未設定）かどうか
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    // Getter メソッド

    pub fn id(&self) -> Option<EmployeeId> {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
