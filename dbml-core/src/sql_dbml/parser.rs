use super::types::{Column, ForeignKey, Schema, SkipReason, Skipped, Table};
use crate::error::{DbmlError, Result};
use regex::Regex;
use tracing::{debug, warn};

/// 解析SQL DDL文本，提取表结构和外键关系
///
/// 只识别 `CREATE TABLE IF NOT EXISTS <schema>.<table> ( ... );` 形式的
/// 语句，schema和表名限定为小写字母和下划线。无法识别的片段不报错，
/// 记录到 `Schema::skipped` 后从结果中省略。
pub fn parse_sql(content: &str) -> Result<Schema> {
    let header_re = Regex::new(r"(?i:CREATE\s+TABLE\s+IF\s+NOT\s+EXISTS)\s+([a-z_]+)\.([a-z_]+)\s*\(")
        .map_err(|e| DbmlError::custom(format!("正则表达式编译失败: {e}")))?;
    let fk_re = Regex::new(
        r"(?i:FOREIGN\s+KEY)\s*\(([a-z_]+)\)\s*(?i:REFERENCES)\s+([a-z_]+)\.([a-z_]+)\(([a-z_]+)\)",
    )
    .map_err(|e| DbmlError::custom(format!("正则表达式编译失败: {e}")))?;

    let mut schema = Schema::default();
    let mut pos = 0;

    // 从左到右逐个定位CREATE TABLE语句，匹配不重叠
    while pos < content.len() {
        let Some(caps) = header_re.captures(&content[pos..]) else {
            break;
        };
        let Some(header) = caps.get(0) else {
            break;
        };

        let header_start = pos + header.start();
        let body_start = pos + header.end();
        let schema_name = &caps[1];
        let table_name = &caps[2];

        match scan_table_body(content, body_start) {
            Some((body, after)) => {
                let mut table = Table {
                    schema: schema_name.to_string(),
                    name: table_name.to_string(),
                    comment: extract_table_comment(&content[..header_start]),
                    columns: Vec::new(),
                    foreign_keys: Vec::new(),
                };

                parse_table_body(&mut table, body, &fk_re, &mut schema);

                debug!(
                    "解析表: {} ({} 列, {} 个外键)",
                    table.full_name(),
                    table.columns.len(),
                    table.foreign_keys.len()
                );
                schema.tables.push(table);
                pos = after;
            }
            None => {
                warn!("CREATE TABLE 块没有正确闭合，跳过: {schema_name}.{table_name}");
                schema.skipped.push(Skipped {
                    reason: SkipReason::UnterminatedBlock,
                    text: format!("{schema_name}.{table_name}"),
                });
                pos = body_start;
            }
        }
    }

    debug!(
        "解析完成: {} 个表, {} 个外键, {} 个跳过片段",
        schema.tables.len(),
        schema.foreign_keys.len(),
        schema.skipped.len()
    );
    Ok(schema)
}

/// 在开括号之后做括号配对扫描，返回表体和扫描结束位置
///
/// 单引号字符串里的括号不参与配对。配对归零的闭括号后面必须跟一个
/// 分号（允许中间有空白），否则整个块视为未闭合。
fn scan_table_body(content: &str, body_start: usize) -> Option<(&str, usize)> {
    let bytes = content.as_bytes();
    let mut depth = 1usize;
    let mut in_string = false;
    let mut i = body_start;

    while i < bytes.len() {
        match bytes[i] {
            b'\'' => in_string = !in_string,
            b'(' if !in_string => depth += 1,
            b')' if !in_string => {
                depth -= 1;
                if depth == 0 {
                    let body = &content[body_start..i];
                    let mut j = i + 1;
                    while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                        j += 1;
                    }
                    if j < bytes.len() && bytes[j] == b';' {
                        return Some((body, j + 1));
                    }
                    return None;
                }
            }
            _ => {}
        }
        i += 1;
    }

    None
}

/// 取CREATE TABLE正上方紧邻一行的注释作为表注释
///
/// 注释行和CREATE TABLE之间隔着空行时不关联；多行注释只保留最后
/// 一行；空注释视为没有注释。
fn extract_table_comment(preceding: &str) -> Option<String> {
    let last_line = preceding.lines().next_back()?;
    let comment = last_line.trim().strip_prefix("--")?.trim();
    if comment.is_empty() {
        return None;
    }
    Some(comment.to_string())
}

/// 逐行分类表体内容：列定义或外键约束
fn parse_table_body(table: &mut Table, body: &str, fk_re: &Regex, schema: &mut Schema) {
    for raw_line in body.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        // FOREIGN KEY行单独处理，不作为列
        if line.to_uppercase().starts_with("FOREIGN KEY") {
            parse_foreign_key(table, line, fk_re, schema);
            continue;
        }

        // 去掉行尾逗号
        let line = line.strip_suffix(',').unwrap_or(line);
        parse_column(table, line, schema);
    }
}

/// 解析一行列定义
fn parse_column(table: &mut Table, line: &str, schema: &mut Schema) {
    let source = line;

    // 第一个行内注释之后的内容作为列注释
    let (line, comment) = match line.find("--") {
        Some(idx) => {
            let comment = line[idx + 2..].trim();
            let rest = line[..idx].trim();
            (rest, (!comment.is_empty()).then(|| comment.to_string()))
        }
        None => (line, None),
    };

    if line.is_empty() {
        schema.skipped.push(Skipped {
            reason: SkipReason::CommentOnly,
            text: source.to_string(),
        });
        return;
    }
    if line.to_uppercase().starts_with("FOREIGN KEY") {
        return;
    }

    let tokens = tokenize_definition(line);
    if tokens.len() < 2 {
        debug!("列定义token不足，跳过: {line}");
        schema.skipped.push(Skipped {
            reason: SkipReason::TooFewTokens,
            text: source.to_string(),
        });
        return;
    }

    let upper = line.to_uppercase();
    let is_pk = upper.contains("PRIMARY KEY");
    // 主键列始终按可空处理，渲染时不输出not null标记
    let is_nullable = !upper.contains("NOT NULL") || is_pk;

    let default = tokens
        .iter()
        .position(|t| t.eq_ignore_ascii_case("DEFAULT"))
        .and_then(|idx| tokens.get(idx + 1))
        .map(|t| t.trim_end_matches(',').to_string());

    table.columns.push(Column {
        name: tokens[0].clone(),
        data_type: tokens[1].clone(),
        is_pk,
        is_nullable,
        default,
        comment,
    });
}

/// 把列定义行切分为token
///
/// 只有深度为0的空白才分隔token：括号参数（如 `DECIMAL(10, 2)`）和
/// 单引号字符串字面量整体留在一个token里。
fn tokenize_definition(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;
    let mut in_string = false;

    for ch in line.chars() {
        match ch {
            '\'' => {
                in_string = !in_string;
                current.push(ch);
            }
            '(' if !in_string => {
                depth += 1;
                current.push(ch);
            }
            ')' if !in_string => {
                depth = depth.saturating_sub(1);
                current.push(ch);
            }
            c if c.is_whitespace() && depth == 0 && !in_string => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

/// 解析一行FOREIGN KEY约束
///
/// 识别 `FOREIGN KEY (col) REFERENCES schema.table(col)`，标识符限定
/// 小写字母和下划线。外键同时挂到所属表和Schema的扁平列表上。
fn parse_foreign_key(table: &mut Table, line: &str, fk_re: &Regex, schema: &mut Schema) {
    let Some(caps) = fk_re.captures(line) else {
        warn!("无法识别的外键约束，跳过: {line}");
        schema.skipped.push(Skipped {
            reason: SkipReason::MalformedForeignKey,
            text: line.to_string(),
        });
        return;
    };

    let fk = ForeignKey {
        from_table: table.full_name(),
        from_column: caps[1].to_string(),
        to_table: format!("{}.{}", &caps[2], &caps[3]),
        to_column: caps[4].to_string(),
    };

    table.foreign_keys.push(fk.clone());
    schema.foreign_keys.push(fk);
}
