//! Error struct of project genome_prep

/* crate use */
use anyhow;
use thiserror;

/// Enum to manage error
#[derive(std::fmt::Debug, thiserror::Error)]
pub enum Error {
    /// Clustering executable exit with a non zero status
    #[error("clustering command failed ({status}): {command}\nstderr:\n{stderr}")]
    ClusteringFailed {
        /// Command line as it was invoked
        command: String,
        /// Exit status reported by the process
        status: std::process::ExitStatus,
        /// Captured error stream
        stderr: String,
    },

    /// No cluster table found after a successful run
    #[error("no cluster table (*.tsv) found in {dir}")]
    NoOutputFound {
        /// Directory that was scanned
        dir: std::path::PathBuf,
    },

    /// More than one cluster table candidate
    #[error("ambiguous cluster table in {dir}: {files:?}")]
    AmbiguousOutput {
        /// Directory that was scanned
        dir: std::path::PathBuf,
        /// Every candidate file
        files: Vec<std::path::PathBuf>,
    },

    /// A cluster table row doesn't contain exactly two fields
    #[error("malformed cluster table at line {line}: expected 2 fields found {fields}")]
    MalformedClusterTable {
        /// Line number, start at 1
        line: usize,
        /// Number of fields found
        fields: usize,
    },

    /// Input sequence file doesn't exist
    #[error("input sequence file {0} doesn't exist")]
    MissingInput(std::path::PathBuf),

    /// Similarity threshold outside of ]0; 1]
    #[error("similarity threshold must be in ]0; 1] got {0}")]
    InvalidSimilarity(f64),

    /// Input contains no sequence record
    #[error("input contains no sequence record")]
    EmptyInput,

    /// Input stream isn't fasta
    #[error("input stream isn't in fasta format")]
    NotFasta,

    /// Encoder doesn't define a padding token
    #[error("encoder doesn't define a padding token")]
    TokenizerMismatch,

    /// Block size must be strictly positive
    #[error("block size must be greater than 0")]
    InvalidBlockSize,

    /// Encoder produce a chunk larger than block size
    #[error("encoder produce a chunk of {len} tokens larger than block size {block_size}")]
    OversizedChunk {
        /// Length of the chunk
        len: usize,
        /// Requested block size
        block_size: usize,
    },

    /// Pre-trained tokenizer can't be loaded or used
    #[error("tokenizer error: {0}")]
    Tokenizer(String),

    /// Error in logging system configuration
    #[error(transparent)]
    Log(#[from] log::SetLoggerError),
}

/// Alias of result
pub type Result<T> = anyhow::Result<T>;
