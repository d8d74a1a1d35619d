use clap::Parser;
use ip_subnet_calc::cli::Cli;
use ip_subnet_calc::run;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    let cli = Cli::parse();
    if let Err(e) = log4rs::init_file(&cli.log_config, Default::default()) {
        eprintln!(
            "Logging disabled, could not load {}: {e}",
            cli.log_config.display()
        );
    }
    log::info!("#Start main()");

    let output = run(&cli.command)?;
    println!("{output}");

    Ok(())
}
