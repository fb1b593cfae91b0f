use super::types::Schema;

/// 把解析结果序列化为完整的DBML文档
///
/// 输出顺序：两行生成说明注释、空行、按发现顺序的表块；有外键时再加
/// `// Relationships` 段，每个外键一行，同样按发现顺序。输出完全由
/// 输入决定，相同输入得到字节相同的文档。
pub fn generate_dbml(schema: &Schema) -> String {
    let mut lines = Vec::new();

    lines.push("// Auto-generated DBML from SQL DDL".to_string());
    lines.push("// Generated by dbml-cli".to_string());
    lines.push(String::new());

    for table in &schema.tables {
        lines.push(table.to_dbml());
    }

    if !schema.foreign_keys.is_empty() {
        lines.push("// Relationships".to_string());
        for fk in &schema.foreign_keys {
            lines.push(fk.to_dbml());
        }
        lines.push(String::new());
    }

    lines.join("\n")
}
