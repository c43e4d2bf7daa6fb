//! # 従業員ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /employee/hello` - 固定文字列の挨拶
//! - `POST /employee/save` - 従業員の作成（201）
//! - `PUT /employee/update` - 従業員の更新（200）
//! - `GET /employee/getall` - 従業員一覧
//! - `GET /employee/getone/{employee_id}` - 従業員詳細
//! - `DELETE /employee/delete/{employee_id}` - 従業員の削除（204）
//!
//! ボディと ID の検証はハンドラとユースケースの両方で行う。
//! ボディのデコード失敗（`null`、不正な JSON、Content-Type 不一致）と
//! 数値でないパス ID はすべて 400 になる。

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path,
        State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use roster_domain::employee::{Employee, EmployeeId};
use serde::{Deserialize, Serialize};

use crate::{
    error::CoreError,
    usecase::{EmployeeInput, EmployeeUseCaseImpl},
};

/// 従業員 API の共有状態
pub struct EmployeeState {
    pub usecase: EmployeeUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// 従業員の保存・更新リクエスト
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    pub employee_id:          Option<i64>,
    pub employee_name:        Option<String>,
    pub employee_description: Option<String>,
}

impl From<EmployeeRequest> for EmployeeInput {
    fn from(req: EmployeeRequest) -> Self {
        Self {
            employee_id: req.employee_id,
            name:        req.employee_name,
            description: req.employee_description,
        }
    }
}

/// 従業員 DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub employee_id:          i64,
    pub employee_name:        Option<String>,
    pub employee_description: Option<String>,
}

impl From<&Employee> for EmployeeDto {
    fn from(employee: &Employee) -> Self {
        Self {
            employee_id:          employee.id().map(|id| id.as_i64()).unwrap_or_default(),
            employee_name:        employee.name().map(str::to_string),
            employee_description: employee.description().map(str::to_string),
        }
    }
}

// --- 入力検証 ---

fn decode_body(
    body: Result<Json<Option<EmployeeRequest>>, JsonRejection>,
) -> Result<EmployeeRequest, CoreError> {
    let Json(request) = body.map_err(|rejection| CoreError::BadRequest(rejection.body_text()))?;
    request.ok_or_else(|| CoreError::BadRequest("従業員を指定してください".to_string()))
}

fn decode_path_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, CoreError> {
    let Path(employee_id) =
        path.map_err(|rejection| CoreError::BadRequest(rejection.body_text()))?;
    EmployeeId::new(employee_id)?;
    Ok(employee_id)
}

// --- ハンドラ ---

/// GET /employee/hello
pub async fn hello() -> &'static str {
    "Hello boot"
}

/// POST /employee/save
///
/// ## レスポンス
///
/// - `201 Created`: 保存された従業員（ID 採番済み）
/// - `400 Bad Request`: ボディがない、またはデコードできない
#[tracing::instrument(skip_all)]
pub async fn save_employee(
    State(state): State<Arc<EmployeeState>>,
    body: Result<Json<Option<EmployeeRequest>>, JsonRejection>,
) -> Result<impl IntoResponse, CoreError> {
    let request = decode_body(body)?;

    let employee = state.usecase.save_employee(Some(request.into())).await?;

    Ok((StatusCode::CREATED, Json(EmployeeDto::from(&employee))))
}

/// PUT /employee/update
///
/// ## レスポンス
///
/// - `200 OK`: 更新後の従業員
/// - `400 Bad Request`: ボディがない、または ID が 0 以下
#[tracing::instrument(skip_all)]
pub async fn update_employee(
    State(state): State<Arc<EmployeeState>>,
    body: Result<Json<Option<EmployeeRequest>>, JsonRejection>,
) -> Result<impl IntoResponse, CoreError> {
    let request = decode_body(body)?;
    let employee_id = request
        .employee_id
        .ok_or_else(|| CoreError::BadRequest("従業員 ID を指定してください".to_string()))?;
    EmployeeId::new(employee_id)?;

    let employee = state.usecase.update_employee(Some(request.into())).await?;

    Ok((StatusCode::OK, Json(EmployeeDto::from(&employee))))
}

/// GET /employee/getall
#[tracing::instrument(skip_all)]
pub async fn list_employees(
    State(state): State<Arc<EmployeeState>>,
) -> Result<impl IntoResponse, CoreError> {
    let employees = state.usecase.list_employees().await?;

    let items: Vec<EmployeeDto> = employees.iter().map(EmployeeDto::from).collect();
    Ok((StatusCode::OK, Json(items)))
}

/// GET /employee/getone/{employee_id}
///
/// ## レスポンス
///
/// - `200 OK`: 従業員
/// - `400 Bad Request`: ID が 0 以下または数値でない
/// - `500 Internal Server Error`: 従業員が見つからない
#[tracing::instrument(skip_all)]
pub async fn get_employee(
    State(state): State<Arc<EmployeeState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, CoreError> {
    let employee_id = decode_path_id(path)?;

    let employee = state.usecase.get_employee(Some(employee_id)).await?;

    Ok((StatusCode::OK, Json(EmployeeDto::from(&employee))))
}

/// DELETE /employee/delete/{employee_id}
///
/// 該当する従業員がいなくても 204 を返す。
#[tracing::instrument(skip_all)]
pub async fn delete_employee(
    State(state): State<Arc<EmployeeState>>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, CoreError> {
    let employee_id = decode_path_id(path)?;

    state.usecase.delete_employee(Some(employee_id)).await?;

    Ok(StatusCode::NO_CONTENT)
}
