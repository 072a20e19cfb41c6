use anyhow::Result;
use clap::Parser;

use dispatch_bench::cli::{
    execute_info, execute_run, execute_verify, Cli, Commands, RunConfig,
};

fn main() {
    let cli = Cli::parse();

    if let Err(error) = run(cli) {
        eprintln!("❌ エラー: {error:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run {
            setup,
            iterations,
            strategies,
            report,
            quiet,
        } => {
            let config = RunConfig::new(setup.resolve()?, iterations, strategies)
                .with_report(report)
                .with_quiet(quiet);
            execute_run(config)
        }
        Commands::Verify { setup, strategies } => {
            let mut config = setup.resolve()?;
            if !strategies.is_empty() {
                config.strategies = strategies;
            }
            execute_verify(&config).map(|_| ())
        }
        Commands::Info => {
            execute_info();
            Ok(())
        }
    }
}
