use clap::Parser;
use ipnum::cli::{run, Args};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    if let Err(e) = log4rs::init_file("log4rs.yml", Default::default()) {
        eprintln!("Logging disabled, could not load log4rs.yml: {e}");
    }
    log::debug!("#Start main()");

    let args = Args::parse();
    let output = run(&args)?;
    println!("{output}");

    Ok(())
}
