//! # ビジネスイベントログ
//!
//! 従業員の作成・更新・削除を構造化ログとして出力するためのマクロと定数。
//!
//! [`log_business_event!`] は `event.kind = "business_event"` マーカーを自動付与する。
//! JSON 出力では `jq 'select(.["event.kind"] == "business_event")'` で抽出できる。
//!
//! フィールド名はドット記法（`event.category`、`event.action`）を使用する。

/// ビジネスイベントを構造化ログとして出力する。
///
/// `tracing::info!` レベルで出力する。
///
/// ## 必須フィールド（慣例）
///
/// - `event.category`: [`event::category`] の定数
/// - `event.action`: [`event::action`] の定数
/// - `event.result`: [`event::result`] の定数
///
/// ## 推奨フィールド
///
/// - `event.entity_type`: [`event::entity_type`] の定数
/// - `event.entity_id`: エンティティ ID
#[macro_export]
macro_rules! log_business_event {
    ($($args:tt)*) => {
        ::tracing::info!(
            event.kind = "business_event",
            $($args)*
        )
    };
}

/// イベントフィールドの定数
pub mod event {
    /// イベントカテゴリ
    pub mod category {
        pub const EMPLOYEE: &str = "employee";
    }

    /// イベントアクション
    pub mod action {
        pub const EMPLOYEE_CREATED: &str = "employee.created";
        pub const EMPLOYEE_UPDATED: &str = "employee.updated";
        pub const EMPLOYEE_DELETED: &str = "employee.deleted";
    }

    /// エンティティ種別
    pub mod entity_type {
        pub const EMPLOYEE: &str = "employee";
    }

    /// イベント結果
    pub mod result {
        pub const SUCCESS: &str = "success";
    }
}

/// エラーコンテキストフィールドの定数
///
/// `tracing::error!` に `error.category` + `error.kind` として付与する。
pub mod error {
    /// エラーカテゴリ
    pub mod category {
        /// インフラストラクチャ（DB）
        pub const INFRASTRUCTURE: &str = "infrastructure";
    }

    /// エラー種別
    pub mod kind {
        pub const DATABASE: &str = "database";
    }
}
