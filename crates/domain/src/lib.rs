//! # Roster ドメイン層
//!
//! 従業員台帳のドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`employee::Employee`]）
//! - **値オブジェクト**: 検証済みの識別子（[`employee::EmployeeId`]）
//! - **ドメインエラー**: 入力値の検証失敗や存在しないエンティティを表現する
//!
//! ## 依存関係の方向
//!
//! ```text
//! employee-service → infra → domain
//!         ↘                    ↑
//!           ───────────────────
//! ```
//!
//! ドメイン層はインフラ層（DB、HTTP）には一切依存しない。
//!
//! ## 使用例
//!
//! ```rust
//! use roster_domain::{DomainError, employee::EmployeeId};
//!
//! let id = EmployeeId::new(1).unwrap();
//! assert_eq!(id.as_i64(), 1);
//!
//! assert!(matches!(EmployeeId::new(0), Err(DomainError::Validation(_))));
//! ```

pub mod employee;
pub mod error;

pub use error::DomainError;
