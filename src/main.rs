// src/main.rs

use on_change::cli::{self, Invocation};
use on_change::{logging, run};

#[tokio::main]
async fn main() {
    let args = match cli::parse() {
        Ok(Invocation::Run(args)) => args,
        Ok(Invocation::Help) => {
            cli::print_help();
            return;
        }
        // Prints help/version with exit 0, usage errors with exit 2.
        Err(err) => err.exit(),
    };

    if let Err(err) = run_main(args).await {
        eprintln!("on-change error: {err:#}");
        std::process::exit(1);
    }
}

async fn run_main(args: cli::CliArgs) -> anyhow::Result<()> {
    logging::init_logging(args.log_level)?;
    run(args).await?;
    Ok(())
}
