//! Command Line Interface declaration of project genome_prep

/* std use */

/* crate use */

/* project use */

/// Cluster a fasta file with mmseqs2 easy-cluster and count non redundant sequences
#[derive(clap::Parser, std::fmt::Debug)]
#[clap(
    name = "mmseqs_cluster",
    version = "0.1",
    author = "Pierre Marijon <pierre@marijon.fr>"
)]
pub struct Command {
    /* Specifique option */
    /// Path to the fasta file input
    #[clap(long = "fasta")]
    fasta: std::path::PathBuf,

    /// Path to the output directory, will be made if it does not exist
    #[clap(long = "output_dir")]
    output_dir: std::path::PathBuf,

    /// Extension to give the output files names (currently unused)
    #[clap(long = "out_ext", default_value = "res")]
    out_ext: String,

    /// Path to mmseqs program
    #[clap(long = "mmseqs", default_value = "mmseqs")]
    mmseqs: std::ffi::OsString,

    /// Similarity threshold to run mmseqs with
    #[clap(long = "similarity", default_value_t = 0.5)]
    similarity: f64,

    /* General option */
    /// Silence all output
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,

    /// Verbose mode (-v, -vv, -vvv, etc)
    #[clap(short = 'v', long = "verbosity", action = clap::ArgAction::Count)]
    verbosity: u8,

    /// Timestamp (sec, ms, ns, none)
    #[clap(short = 'T', long = "timestamp")]
    ts: Option<stderrlog::Timestamp>,
}

impl Command {
    /// Get input fasta path
    pub fn fasta(&self) -> &std::path::Path {
        &self.fasta
    }

    /// Get output directory
    pub fn output_dir(&self) -> &std::path::Path {
        &self.output_dir
    }

    /// Get output extension
    pub fn out_ext(&self) -> &str {
        &self.out_ext
    }

    /// Get mmseqs executable
    pub fn mmseqs(&self) -> &std::ffi::OsStr {
        &self.mmseqs
    }

    /// Get similarity threshold
    pub fn similarity(&self) -> f64 {
        self.similarity
    }

    /// Get verbosity level
    pub fn verbosity(&self) -> usize {
        self.verbosity as usize
    }

    /// Get quiet
    pub fn quiet(&self) -> bool {
        self.quiet
    }

    /// Get timestamp granularity
    pub fn timestamp(&self) -> stderrlog::Timestamp {
        self.ts.unwrap_or(stderrlog::Timestamp::Off)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::Parser as _;

    #[test]
    fn default() {
        let params = Command::parse_from(["mmseqs_cluster", "--fasta", "in.fasta", "--output_dir", "out"]);

        assert_eq!(params.fasta(), std::path::Path::new("in.fasta"));
        assert_eq!(params.output_dir(), std::path::Path::new("out"));
        assert_eq!(params.out_ext(), "res");
        assert_eq!(params.mmseqs(), "mmseqs");
        assert_eq!(params.similarity(), 0.5);

        assert!(!params.quiet());
        assert_eq!(params.verbosity(), 0);
        assert!(matches!(params.timestamp(), stderrlog::Timestamp::Off));
    }

    #[test]
    fn not_default() {
        let params = Command::parse_from([
            "mmseqs_cluster",
            "--fasta",
            "in.fasta",
            "--output_dir",
            "out",
            "--out_ext",
            "clu",
            "--mmseqs",
            "/opt/mmseqs/bin/mmseqs",
            "--similarity",
            "0.9",
            "-q",
            "-vvvv",
            "-T",
            "ns",
        ]);

        assert_eq!(params.out_ext(), "clu");
        assert_eq!(params.mmseqs(), "/opt/mmseqs/bin/mmseqs");
        assert_eq!(params.similarity(), 0.9);

        assert!(params.quiet());
        assert_eq!(params.verbosity(), 4);
        assert!(matches!(
            params.timestamp(),
            stderrlog::Timestamp::Nanosecond
        ));
    }

    #[test]
    fn missing_required() {
        assert!(Command::try_parse_from(["mmseqs_cluster", "--fasta", "in.fasta"]).is_err());
        assert!(Command::try_parse_from(["mmseqs_cluster", "--output_dir", "out"]).is_err());
    }
}
