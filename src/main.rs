use anyhow::Context;
use clap::Parser;
use small_toolkit::utils::{logger, validation::Validate};
use small_toolkit::{run_command, CliConfig, Command, ConfigProvider, Toolkit};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    cli.validate().context("Invalid command-line options")?;
    let config = cli.resolve().context("Failed to load configuration")?;

    logger::init_logger(config.log_format(), cli.verbose);
    tracing::info!("Starting small-toolkit");
    tracing::debug!("CLI config: {:?}", cli);

    let toolkit = Toolkit::new(config);

    // 只有 square 會等待，Ctrl+C 取消它
    if matches!(cli.command, Command::Square { .. }) {
        let token = toolkit.cancellation_token();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Received Ctrl+C, cancelling");
                token.cancel();
            }
        });
    }

    match run_command(&toolkit, cli.command).await {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            tracing::error!(
                "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = e.severity().exit_code();
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
