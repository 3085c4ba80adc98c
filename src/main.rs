use iss_tracker::utils::logger;
use iss_tracker::CliArgs;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = CliArgs::from_env();

    logger::init_cli_logger(args.verbose);
    tracing::debug!("CLI args: {:?}", args);

    let mut stdout = std::io::stdout();
    if let Err(e) = iss_tracker::run_cli(&args, &mut stdout).await {
        tracing::error!("{} (category: {:?})", e, e.category());
        eprintln!("error: {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }
}
