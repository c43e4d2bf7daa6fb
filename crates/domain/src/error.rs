//! # ドメイン層エラー定義
//!
//! 入力値の検証失敗やエンティティの不在を表現するエラー型。
//!
//! ## エラーの種類
//!
//! | エラー種別 | 用途 |
//! |-----------|------|
//! | `Validation` | 識別子が正でない、必須の入力がない |
//! | `NotFound` | 有効な識別子だが該当するエンティティがない |
//!
//! HTTP ステータスへの変換は API 層（employee-service）の責務とする。

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// バリデーションエラー
    ///
    /// 識別子が 0 以下、リクエストボディがない等。
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// エンティティが見つからない
    #[error("{entity_type} が見つかりません: {id}")]
    NotFound {
        /// エンティティの種類（"Employee" など）
        entity_type: &'static str,
        /// 検索に使用した識別子
        id:          String,
    },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_not_foundのメッセージにエンティティ種別とidが含まれる() {
        let err = DomainError::NotFound {
            entity_type: "Employee",
            id:          "99".to_string(),
        };

        assert_eq!(err.to_string(), "Employee が見つかりません: 99");
    }

    #[test]
    fn test_validationのメッセージに詳細が含まれる() {
        let err = DomainError::Validation("従業員 ID が不正です".to_string());

        assert_eq!(err.to_string(), "バリデーションエラー: 従業員 ID が不正です");
    }
}
