use dbml_core::error::{DbmlError, Result};
use dbml_core::sql_dbml::{generate_dbml, parse_sql};
use std::path::Path;
use tracing::{info, warn};

/// 解析SQL DDL文件，把DBML文档打印到标准输出
///
/// DBML走标准输出，日志走标准错误，两者不混。
pub async fn run_convert(sql_file: &Path) -> Result<()> {
    if !sql_file.exists() {
        return Err(DbmlError::FileNotFound(sql_file.display().to_string()));
    }

    let content = tokio::fs::read_to_string(sql_file).await?;
    let schema = parse_sql(&content)?;

    info!(
        "解析出 {} 个表，{} 个外键关系",
        schema.tables.len(),
        schema.foreign_keys.len()
    );

    if !schema.skipped.is_empty() {
        warn!("有 {} 个片段无法识别，已从输出中省略", schema.skipped.len());
    }

    println!("{}", generate_dbml(&schema));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_missing_file_is_reported() {
        let result = run_convert(Path::new("no_such_file.sql")).await;
        assert!(matches!(result, Err(DbmlError::FileNotFound(_))));
    }

    #[tokio::test]
    async fn test_convert_existing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "CREATE TABLE IF NOT EXISTS shop.orders (").unwrap();
        writeln!(file, "    id INTEGER PRIMARY KEY").unwrap();
        writeln!(file, ");").unwrap();

        run_convert(file.path()).await.unwrap();
    }
}
