mod types;
mod parser;
mod generator;


// 重新导出公共接口
pub use generator::generate_dbml;
pub use parser::parse_sql;
pub use types::{Column, ForeignKey, Schema, SkipReason, Skipped, Table};
