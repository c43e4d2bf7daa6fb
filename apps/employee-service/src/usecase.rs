//! # ユースケース層
//!
//! ハンドラから呼ばれるアプリケーションロジック。
//! 入力を検証してからリポジトリに委譲し、不在をエラーに変換する。

pub mod employee;

pub use employee::{EmployeeInput, EmployeeUseCaseImpl};
