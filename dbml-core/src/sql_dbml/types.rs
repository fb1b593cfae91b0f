/// 表列定义
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub data_type: String,
    pub is_pk: bool,
    pub is_nullable: bool,
    pub default: Option<String>,
    pub comment: Option<String>,
}

impl Column {
    /// 渲染为单行DBML列定义
    ///
    /// 属性顺序固定：pk/not null、default、note。主键列不渲染
    /// not null标记。note内容不做转义。
    pub fn to_dbml(&self) -> String {
        let clean_type = self.data_type.trim_end_matches(',');
        let mut parts = vec![format!("  {} {}", self.name, clean_type)];

        if self.is_pk {
            parts.push("[pk]".to_string());
        } else if !self.is_nullable {
            parts.push("[not null]".to_string());
        }

        if let Some(default) = &self.default {
            parts.push(format!("[default: {default}]"));
        }

        if let Some(comment) = &self.comment {
            parts.push(format!("[note: '{comment}']"));
        }

        parts.join(" ")
    }
}

/// 外键关系定义
#[derive(Debug, Clone, PartialEq)]
pub struct ForeignKey {
    pub from_table: String,
    pub from_column: String,
    pub to_table: String,
    pub to_column: String,
}

impl ForeignKey {
    /// 渲染为DBML关系行
    pub fn to_dbml(&self) -> String {
        format!(
            "Ref: {}.{} > {}.{}",
            self.from_table, self.from_column, self.to_table, self.to_column
        )
    }
}

/// 表定义
#[derive(Debug, Clone)]
pub struct Table {
    pub schema: String,
    pub name: String,
    pub comment: Option<String>,
    pub columns: Vec<Column>,
    pub foreign_keys: Vec<ForeignKey>,
}

impl Table {
    /// schema限定的完整表名
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.schema, self.name)
    }

    /// 渲染为DBML表块，以空行结尾
    pub fn to_dbml(&self) -> String {
        let mut lines = Vec::new();

        let mut header = format!("Table {}", self.full_name());
        if let Some(comment) = &self.comment {
            header.push_str(&format!(" [note: '{comment}']"));
        }
        header.push_str(" {");
        lines.push(header);

        for column in &self.columns {
            lines.push(column.to_dbml());
        }

        lines.push("}".to_string());
        lines.push(String::new());

        lines.join("\n")
    }
}

/// 被跳过片段的原因分类
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// CREATE TABLE块在输入结束前没有正确闭合
    UnterminatedBlock,
    /// 去掉行内注释后没有剩余内容
    CommentOnly,
    /// 列定义不足两个token
    TooFewTokens,
    /// FOREIGN KEY行不符合可识别的模式
    MalformedForeignKey,
}

/// 解析过程中被跳过的输入片段
#[derive(Debug, Clone, PartialEq)]
pub struct Skipped {
    pub reason: SkipReason,
    pub text: String,
}

/// 一次解析的累积结果
///
/// 无法识别的DDL片段不报错，记录到skipped后从输出中省略。
#[derive(Debug, Default)]
pub struct Schema {
    /// 发现顺序的表列表
    pub tables: Vec<Table>,
    /// 发现顺序的扁平外键列表，关系段按这个顺序序列化
    pub foreign_keys: Vec<ForeignKey>,
    /// 被跳过的片段及原因
    pub skipped: Vec<Skipped>,
}

impl Schema {
    /// 合并另一次解析的结果，各列表保持各自的发现顺序
    pub fn merge(&mut self, other: Schema) {
        self.tables.extend(other.tables);
        self.foreign_keys.extend(other.foreign_keys);
        self.skipped.extend(other.skipped);
    }
}
