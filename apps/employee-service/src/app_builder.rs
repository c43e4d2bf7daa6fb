//! # アプリケーション構築
//!
//! ユースケース・State の初期化とルーター構築を担当する。
//! `main.rs` はインフラ初期化とサーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post, put},
};
use roster_infra::repository::EmployeeRepository;
use roster_shared::observability::make_request_span;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{
    handler::{
        EmployeeState,
        delete_employee,
        get_employee,
        health_check,
        hello,
        list_employees,
        save_employee,
        update_employee,
    },
    usecase::EmployeeUseCaseImpl,
};

/// 従業員 API のベースパス
pub const EMPLOYEE_BASE_PATH: &str = "/employee";

/// リポジトリを受け取り、ルーターを組み立てる
///
/// Request ID は `SetRequestIdLayer` が未指定時に生成し、
/// `PropagateRequestIdLayer` がレスポンスヘッダーに複写する。
pub fn build_app(repository: Arc<dyn EmployeeRepository>) -> Router {
    let employee_state = Arc::new(EmployeeState {
        usecase: EmployeeUseCaseImpl::new(repository),
    });

    let employee_routes = Router::new()
        .route("/hello", get(hello))
        .route("/save", post(save_employee))
        .route("/update", put(update_employee))
        .route("/getall", get(list_employees))
        .route("/getone/{employee_id}", get(get_employee))
        .route("/delete/{employee_id}", delete(delete_employee))
        .with_state(employee_state);

    Router::new()
        .route("/health", get(health_check))
        .nest(EMPLOYEE_BASE_PATH, employee_routes)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
