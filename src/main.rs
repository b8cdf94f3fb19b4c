use dotenvy::dotenv;
use std::process;

use ipfinder::config::Settings;
use ipfinder::runtime::run_server;
use ipfinder::system::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // 配置错误在日志系统之前发生，直接走 stderr
    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            process::exit(1);
        }
    };

    init_logging(settings.log_level.as_deref());

    run_server(settings).await
}
