//! # EmployeeRepository
//!
//! 従業員の永続化を担当するリポジトリ。
//!
//! ## 契約
//!
//! | 操作 | 振る舞い |
//! |------|---------|
//! | `save` | ID 未設定なら採番して挿入、設定済みならその ID のレコードを上書き（upsert） |
//! | `find_by_id` | 存在すれば `Some`、なければ `None`（エラーにしない） |
//! | `find_all` | 全件を ID 昇順で返す |
//! | `delete_by_id` | 存在すれば削除、なければ何もしない |
//!
//! 存在確認や楽観的ロックは行わない。同一 ID への同時更新は後勝ちになる。
//!
//! ## 実装
//!
//! - [`PostgresEmployeeRepository`]: `employees` テーブル
//! - [`InMemoryEmployeeRepository`]: プロセス内の `BTreeMap`（DB 未設定時・テスト用）

mod in_memory;
mod postgres;

use async_trait::async_trait;
pub use in_memory::InMemoryEmployeeRepository;
pub use postgres::PostgresEmployeeRepository;
use roster_domain::employee::{Employee, EmployeeId};

use crate::error::InfraError;

/// 従業員リポジトリトレイト
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// 従業員を保存する（upsert）
    ///
    /// 保存後の従業員（新規の場合は採番済みの ID を含む）を返す。
    async fn save(&self, employee: &Employee) -> Result<Employee, InfraError>;

    /// ID で従業員を検索する
    async fn find_by_id(&self, id: &EmployeeId) -> Result<Option<Employee>, InfraError>;

    /// 全従業員を取得する
    async fn find_all(&self) -> Result<Vec<Employee>, InfraError>;

    /// ID で従業員を削除する
    async fn delete_by_id(&self, id: &EmployeeId) -> Result<(), InfraError>;
}
