use std::path::PathBuf;

use clap::Parser;
use ddl_maker::{Config, DdlMaker};
use log::info;

mod records;

/// Writes the CREATE TABLE statements of the application's records.
#[derive(Parser, Debug)]
#[command(name = "create-ddl", version, about)]
struct Args {
    /// Target driver
    #[arg(short, long, env = "DDL_DRIVER")]
    driver: String,

    /// DDL output file path
    #[arg(short, long = "outfile", env = "DDL_OUTFILE", default_value = "./sql/master.sql")]
    outfile: PathBuf,

    /// Storage engine
    #[arg(short, long, env = "DDL_ENGINE", default_value = "InnoDB")]
    engine: String,

    /// Default character set
    #[arg(short, long, env = "DDL_CHARSET", default_value = "utf8mb4")]
    charset: String,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config::new(args.outfile, args.driver, args.engine, args.charset)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from(Args::parse());
    config.validate()?;

    let mut maker = DdlMaker::new(config)?;
    maker
        .add::<records::User>()?
        .add::<records::Entry>()?
        .add::<records::PlayerComment>()?
        .add::<records::Bookmark>()?;

    maker.generate()?;
    info!("{} tables written", maker.records().len());
    Ok(())
}
