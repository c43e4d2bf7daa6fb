//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、検証とストア操作はユースケースに委譲

pub mod employee;
pub mod health;

pub use employee::{
    EmployeeDto,
    EmployeeRequest,
    EmployeeState,
    delete_employee,
    get_employee,
    hello,
    list_employees,
    save_employee,
    update_employee,
};
pub use health::health_check;
