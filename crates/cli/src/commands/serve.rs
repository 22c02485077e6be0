use anyhow::Result;
use civic_report_http::{create_router, AppState, UploadDir};
use civic_report_notify::{DisabledNotifier, MailConfig, Notifier, SmtpNotifier};
use civic_report_service::ReportService;
use civic_report_storage::Storage;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub(crate) async fn run(db_path: &Path, host: &str, port: u16, uploads_dir: PathBuf) -> Result<()> {
    let storage = Storage::new(db_path)?;
    let uploads = UploadDir::prepare(uploads_dir).await?;
    tracing::info!(path = %uploads.root().display(), "Uploads directory ready");

    let service = Arc::new(ReportService::new(Arc::new(storage.clone()), build_notifier()));
    let state = Arc::new(AppState { service, uploads });

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

    tracing::info!("Server stopped, closing storage");
    storage.close()?;
    Ok(())
}

fn build_notifier() -> Arc<dyn Notifier> {
    let Some(config) = MailConfig::from_env() else {
        tracing::info!("EMAIL_USER, EMAIL_PASS or DEVELOPER_EMAIL not set, email notifications disabled");
        return Arc::new(DisabledNotifier);
    };
    match SmtpNotifier::new(&config) {
        Ok(notifier) => {
            tracing::info!(
                host = %config.smtp_host,
                developer = %config.developer_email,
                cc = ?config.cc_email,
                "Email notifications enabled"
            );
            Arc::new(notifier)
        },
        Err(e) => {
            tracing::warn!(error = %e, "Invalid mail configuration, email notifications disabled");
            Arc::new(DisabledNotifier)
        },
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
