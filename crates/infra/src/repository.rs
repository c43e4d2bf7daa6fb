//! # リポジトリ
//!
//! 永続化の抽象（トレイト）と具体実装を提供する。
//!
//! - **依存性逆転**: ユースケース層はトレイトにのみ依存する
//! - **実装の切り替え**: `DATABASE_URL` の有無で PostgreSQL / インメモリを選択する
//! - **テスタビリティ**: トレイト経由でモック可能

pub mod employee_repository;

pub use employee_repository::{
    EmployeeRepository,
    InMemoryEmployeeRepository,
    PostgresEmployeeRepository,
};
