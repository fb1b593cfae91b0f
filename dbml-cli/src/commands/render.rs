use dbml_core::error::{DbmlError, Result};
use dbml_core::render::{RenderClient, RenderRequest};
use std::path::Path;
use tracing::info;

/// 读取DBML文件，调用渲染服务生成图片文件
pub async fn run_render(dbml_file: &Path, output: &Path, format: &str) -> Result<()> {
    if !dbml_file.exists() {
        return Err(DbmlError::FileNotFound(dbml_file.display().to_string()));
    }

    let code = tokio::fs::read_to_string(dbml_file).await?;

    info!("🎨 开始渲染: {} -> {}", dbml_file.display(), output.display());

    let client = RenderClient::new()?;
    let image = client
        .render(RenderRequest {
            code,
            format: format.to_string(),
        })
        .await?;

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(output, &image).await?;

    info!("✅ 已生成 {}", output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_dbml_file_is_reported() {
        let result = run_render(
            Path::new("no_such_file.dbml"),
            Path::new("out.png"),
            "png",
        )
        .await;
        assert!(matches!(result, Err(DbmlError::FileNotFound(_))));
    }
}
