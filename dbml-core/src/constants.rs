/// 渲染服务相关常量
pub mod api {
    /// 默认渲染服务地址
    pub const DEFAULT_BASE_URL: &str = "https://dbdiagram.io";

    /// 渲染请求超时时间（秒）
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// API端点路径
    pub mod endpoints {
        /// DBML渲染端点
        pub const RENDER: &str = "/api/render";
    }
}

/// 输出格式相关常量
pub mod format {
    /// 默认图片格式
    pub const DEFAULT_IMAGE_FORMAT: &str = "png";
}
