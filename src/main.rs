//! Cluster a fasta file with mmseqs2 and report number of non redundant sequences

#![warn(missing_docs)]

/* std use */

/* crate use */
use anyhow::Context as _;
use clap::Parser as _;

/* project use */
use genome_prep::cli;
use genome_prep::cluster;
use genome_prep::error;

fn main() -> error::Result<()> {
    // parse cli
    let params = cli::Command::parse();

    // Setup logger
    stderrlog::new()
        .module(module_path!())
        .module("genome_prep")
        .quiet(params.quiet())
        .verbosity(params.verbosity())
        .timestamp(params.timestamp())
        .init()
        .context("stderrlog already create a logger")?;

    log::debug!("out_ext {} is not used", params.out_ext());

    let result = cluster::run_clustering(
        params.fasta(),
        params.output_dir(),
        params.similarity(),
        params.mmseqs(),
    )?;

    println!(
        "Successfully clustered input fasta file to: {}",
        params.output_dir().display()
    );
    println!("{}", result.representative_count());

    Ok(())
}
