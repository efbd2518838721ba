use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use evv_api::create_app;
use evv_application::ScheduleService;
use evv_config::AppConfig;
use evv_domain::{Clock, ScheduleRepository, SystemClock};
use evv_infrastructure::InMemoryScheduleRepository;
use tokio::{net::TcpListener, sync::broadcast};
use tracing::{info, warn};

/// 主应用程序
pub struct Application {
    config: AppConfig,
    service: Arc<ScheduleService>,
}

impl Application {
    /// 使用系统时钟创建应用实例
    pub async fn new(config: AppConfig) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock)).await
    }

    pub async fn with_clock(config: AppConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        let repository = Arc::new(InMemoryScheduleRepository::new(
            clock.clone(),
            config.store.event_log_capacity,
        ));

        if config.store.seed_on_startup {
            let count = repository.seed().await;
            info!("启动时已载入 {} 个初始排班", count);
        } else {
            warn!("未载入初始数据，调用 POST /api/reset 后才有排班");
        }

        let service = Arc::new(ScheduleService::new(repository, clock));

        Ok(Self { config, service })
    }

    pub fn router(&self) -> Router {
        create_app(Arc::clone(&self.service), &self.config.api)
    }

    /// 运行HTTP服务，收到关闭信号后停止接受新连接并等待进行中的请求完成
    pub async fn run(&self, mut shutdown_rx: broadcast::Receiver<()>) -> Result<()> {
        let bind_address = &self.config.api.bind_address;
        let listener = TcpListener::bind(bind_address)
            .await
            .with_context(|| format!("绑定地址失败: {}", bind_address))?;

        info!("API服务器启动在 http://{}", bind_address);

        axum::serve(listener, self.router())
            .with_graceful_shutdown(async move {
                let _ = shutdown_rx.recv().await;
                info!("API服务器收到关闭信号");
            })
            .await
            .context("API服务器运行失败")?;

        info!("API服务器已停止");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    async fn get_json(app: &Application, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .router()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_seeds_on_startup() {
        let app = Application::new(AppConfig::default()).await.unwrap();
        let (status, body) = get_json(&app, "/api/schedules/today").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_skip_seed_leaves_store_empty() {
        let mut config = AppConfig::default();
        config.store.seed_on_startup = false;
        let app = Application::new(config).await.unwrap();

        let (_, body) = get_json(&app, "/api/schedules").await;
        assert!(body.as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_run_stops_on_shutdown_signal() {
        let mut config = AppConfig::default();
        config.api.bind_address = "127.0.0.1:0".to_string();
        let app = Application::new(config).await.unwrap();

        let (tx, rx) = broadcast::channel(1);
        let handle = tokio::spawn(async move { app.run(rx).await });
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        tx.send(()).unwrap();

        let result = tokio::time::timeout(std::time::Duration::from_secs(5), handle)
            .await
            .unwrap()
            .unwrap();
        assert!(result.is_ok());
    }
}
