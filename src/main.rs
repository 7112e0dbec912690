use clap::Parser;
use eyre::WrapErr;
use favicons_core::{Config, Converter, Error};

mod cli;
mod logging;

fn load_config(args: &cli::Cli) -> eyre::Result<Config> {
    let config = match &args.config {
        Some(path) => Config::parse_file(path)?,
        None => Config::default(),
    };
    Ok(args.apply(config))
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let args = cli::Cli::parse();
    logging::setup_logger(args.verbose)?;

    let config = load_config(&args).wrap_err("failed to load configuration")?;
    let converter = Converter::new(config);

    if args.plan {
        for (variant, path) in converter.plan() {
            println!("{}\t{}", variant, path.display());
        }
        return Ok(());
    }

    match converter.run(|output| println!("{}", output.variant.saved_message(&output.path))) {
        Ok(_) => {}
        Err(Error::SourceMissing(path)) => {
            println!("Source image not found: {}", path.display());
            std::process::exit(1);
        }
        Err(e) => return Err(e).wrap_err("failed to generate favicons"),
    }

    println!("Done.");
    Ok(())
}
