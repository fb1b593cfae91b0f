use crate::api_config::ApiConfig;
use crate::constants::api;
use crate::error::{DbmlError, Result};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{error, info};

/// 渲染服务客户端
#[derive(Debug, Clone)]
pub struct RenderClient {
    client: Client,
    config: ApiConfig,
}

/// DBML渲染请求
#[derive(Debug, Serialize)]
pub struct RenderRequest {
    /// DBML文本内容
    pub code: String,
    /// 目标图片格式
    pub format: String,
}

impl RenderClient {
    /// 创建新的渲染服务客户端
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(api::REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            config: ApiConfig::default(),
        })
    }

    /// 获取当前API配置
    pub fn get_config(&self) -> &ApiConfig {
        &self.config
    }

    /// 调用渲染服务，把DBML文本渲染为图片字节
    ///
    /// 渲染失败不重试，直接返回服务端给出的状态和详情。
    pub async fn render(&self, request: RenderRequest) -> Result<Vec<u8>> {
        let url = self.config.get_render_url();

        info!("请求渲染服务: {} (格式: {})", url, request.format);

        let response = self.client.post(&url).json(&request).send().await?;

        if response.status().is_success() {
            let bytes = response.bytes().await?;
            info!("渲染成功，返回 {} 字节", bytes.len());
            Ok(bytes.to_vec())
        } else {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            error!("渲染服务请求失败: {} - {}", status, text);
            Err(DbmlError::Render(format!("{status} - {text}")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_request_payload() {
        let request = RenderRequest {
            code: "Table shop.orders {\n}".to_string(),
            format: "png".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["code"], "Table shop.orders {\n}");
        assert_eq!(json["format"], "png");
    }

    #[test]
    fn test_render_url() {
        let client = RenderClient::new().unwrap();
        assert_eq!(
            client.get_config().get_render_url(),
            "https://dbdiagram.io/api/render"
        );
    }
}
