use crate::constants::api;
use serde::{Deserialize, Serialize};
/// 渲染服务配置模块 - 内置服务器端点配置
use std::fmt;

/// 渲染服务端点配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEndpoints {
    /// DBML渲染端点
    pub render: String,
}

/// 渲染服务API配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// 基础URL
    pub base_url: String,
    /// API端点
    pub endpoints: ApiEndpoints,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: api::DEFAULT_BASE_URL.to_string(),
            endpoints: ApiEndpoints {
                render: api::endpoints::RENDER.to_string(),
            },
        }
    }
}

impl ApiConfig {
    /// 获取完整的端点URL
    pub fn get_endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// 获取DBML渲染完整URL
    pub fn get_render_url(&self) -> String {
        self.get_endpoint_url(&self.endpoints.render)
    }
}

impl fmt::Display for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "当前渲染服务配置:")?;
        writeln!(f, "服务器地址: {}", self.base_url)?;
        writeln!(f, "渲染端点: {}", self.get_render_url())
    }
}
