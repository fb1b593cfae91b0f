use thiserror::Error;

pub type Result<T> = std::result::Result<T, DbmlError>;

#[derive(Error, Debug)]
pub enum DbmlError {
    #[error("HTTP 请求错误: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("渲染服务请求失败: {0}")]
    Render(String),

    #[error("自定义错误: {0}")]
    Custom(String),
}

impl DbmlError {
    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}
