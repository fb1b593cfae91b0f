use clap::{Parser, Subcommand};
use dbml_core::constants::format;
use std::path::PathBuf;

/// SQL DDL 转 DBML 与 ER 图渲染工具
#[derive(Parser)]
#[command(name = "dbml-cli")]
#[command(about = "把SQL DDL转换为DBML，并可调用渲染服务生成ER图")]
#[command(version)]
pub struct Cli {
    /// 详细输出
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 解析SQL DDL文件，把DBML输出到标准输出
    Convert {
        /// SQL DDL文件路径
        sql_file: PathBuf,
    },
    /// 把DBML文件交给渲染服务，生成ER图图片
    Render {
        /// DBML文件路径
        dbml_file: PathBuf,
        /// 输出图片路径
        output: PathBuf,
        /// 图片格式
        #[arg(long, default_value = format::DEFAULT_IMAGE_FORMAT)]
        format: String,
    },
}
