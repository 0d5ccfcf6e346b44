//! Sequence clustering and codon tokenization utilities for genomic language model training

#![warn(missing_docs)]

/* std use */

/* crate use */

/* project use */

/* mod declaration */
pub mod cli;
pub mod cluster;
pub mod dataset;
pub mod encoder;
pub mod error;
pub mod format;
pub mod io;
pub mod tokenizer;

/* pub use */
pub use cluster::{run_clustering, ClusterResult};
pub use dataset::{DatasetConfig, SequenceDataset, TokenizedRecord};
pub use encoder::{load_tokenizer, Encoder, VocabTokenizer};
pub use format::{Granularity, Overflow};
