//! `build-subset`: fetch the Game Master and name lists, write
//! `species-meta.json` and `name-index.json`.
//!
//! Usage:
//!   build-subset --ids "1-151" --only-normal --lc-keys
//!   build-subset --ids-file ids.txt -o out/species-meta.json

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use pogo_subset::fetch::{fetch_name_list, fetch_records, http_client};
use pogo_subset::ids::parse_id_block;
use pogo_subset::output::write_json;
use pogo_subset::{run_pipeline, FormRules, Sources};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let rules = FormRules::DEFAULT;
    let target_ids = parse_id_block(&cli.id_block()?).context("parsing id list")?;
    log::info!("{} target ids", target_ids.len());

    let urls = cli.sources();
    let client = http_client()?;
    let sources = Sources {
        game_master: fetch_records(&client, &urls.game_master).context("fetching Game Master")?,
        english: fetch_name_list(&client, &urls.english).context("fetching English names")?,
        korean: fetch_name_list(&client, &urls.korean).context("fetching Korean names")?,
    };

    let out = run_pipeline(&sources, &target_ids, cli.pipeline_options(), &rules);

    write_json(&cli.output, &out.species)?;
    write_json(&cli.index_output, &out.index)?;

    println!("Wrote {} ({} entries)", cli.output.display(), out.species.len());
    println!("Wrote {} ({} keys)", cli.index_output.display(), out.index.len());
    Ok(())
}
