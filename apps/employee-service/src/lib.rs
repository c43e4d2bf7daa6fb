//! # Employee Service ライブラリ
//!
//! 従業員 CRUD API のユースケース・ハンドラ・ルーターを公開する。
//! 統合テストからルーターを組み立てられるよう、`main.rs` とは分離している。

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
