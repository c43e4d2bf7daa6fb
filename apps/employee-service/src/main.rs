//! # Employee Service サーバー
//!
//! 従業員レコードの作成・更新・一覧・取得・削除を提供する REST サービス。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `EMPLOYEE_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `EMPLOYEE_PORT` | No | ポート番号（デフォルト: `8080`） |
//! | `DATABASE_URL` | No | PostgreSQL 接続 URL（未設定ならインメモリストア） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,roster=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # インメモリストアで起動
//! cargo run -p roster-employee-service
//!
//! # PostgreSQL を使用
//! DATABASE_URL=postgres://... cargo run -p roster-employee-service --release
//! ```

use std::sync::Arc;

use anyhow::Context as _;
use roster_employee_service::{app_builder::build_app, config::EmployeeServiceConfig};
use roster_infra::{
    db,
    repository::{EmployeeRepository, InMemoryEmployeeRepository, PostgresEmployeeRepository},
};
use roster_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("employee-service");
    init_tracing(&tracing_config);

    let config = EmployeeServiceConfig::from_env().context("設定の読み込みに失敗しました")?;

    tracing::info!(
        "Employee Service サーバーを起動します: {}",
        config.bind_address()
    );

    let repository: Arc<dyn EmployeeRepository> = match &config.database_url {
        Some(url) => {
            let pool = db::create_pool(url)
                .await
                .context("データベース接続に失敗しました")?;
            tracing::info!("データベースに接続しました");

            db::run_migrations(&pool)
                .await
                .context("マイグレーションの適用に失敗しました")?;

            Arc::new(PostgresEmployeeRepository::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL が未設定のため、インメモリストアを使用します");
            Arc::new(InMemoryEmployeeRepository::new())
        }
    };

    let app = build_app(repository);

    let listener = TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("{} へのバインドに失敗しました", config.bind_address()))?;
    tracing::info!(
        "Employee Service サーバーが起動しました: {}",
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// SIGTERM または Ctrl+C を受け取るまで待機する
///
/// ハンドラを登録できなかったシグナルは待機対象から外す。
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Ctrl+C ハンドラの登録に失敗しました: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let sigterm = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("SIGTERM ハンドラの登録に失敗しました: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let sigterm = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = sigterm => {}
    }
    tracing::info!("シャットダウンシグナルを受信しました");
}
