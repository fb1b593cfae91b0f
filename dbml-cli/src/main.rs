use clap::Parser;
use dbml_cli::{Cli, Commands, run_convert, run_render, setup_logging};
use tracing::error;

#[tokio::main]
async fn main() {
    // 解析命令行参数
    let cli = Cli::parse();

    // 设置日志记录
    setup_logging(cli.verbose);

    let result = match cli.command {
        Commands::Convert { sql_file } => run_convert(&sql_file).await,
        Commands::Render {
            dbml_file,
            output,
            format,
        } => run_render(&dbml_file, &output, &format).await,
    };

    if let Err(e) = result {
        error!("❌ 操作失败: {}", e);
        std::process::exit(1);
    }
}
