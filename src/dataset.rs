//! Fixed length token dataset build from a fasta file

/* std use */

/* crate use */
use rayon::prelude::*;

/* project use */
use crate::encoder::Encoder;
use crate::error;
use crate::format::{Granularity, Overflow};
use crate::io;
use crate::tokenizer::group_sequence;

/// Parameter of dataset construction
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct DatasetConfig {
    /// Number of token in each record
    pub block_size: usize,
    /// How sequences are split
    pub granularity: Granularity,
    /// What to do with token after block_size
    pub overflow: Overflow,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            block_size: 512,
            granularity: Granularity::Codon,
            overflow: Overflow::Truncate,
        }
    }
}

/// One training example, `token_ids` length is always the dataset block size
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TokenizedRecord {
    /// Token ids, padding is at the end
    pub token_ids: Vec<u32>,
}

/// Dataset of tokenized sequences
#[derive(Clone, Debug)]
pub struct SequenceDataset {
    records: Vec<TokenizedRecord>,
    block_size: usize,
}

impl SequenceDataset {
    /// Read a fasta file and tokenize every sequence
    pub fn build_dataset<P, E>(
        fasta_path: P,
        config: DatasetConfig,
        encoder: &E,
    ) -> error::Result<Self>
    where
        P: AsRef<std::path::Path>,
        E: Encoder + Sync,
    {
        let pad_id = check_config(&config, encoder)?;

        log::info!("Start read {}", fasta_path.as_ref().display());
        let input = io::fasta_reader(fasta_path)?;

        Self::from_checked_stream(input, config, encoder, pad_id)
    }

    /// Tokenize every sequence of a fasta stream
    pub fn from_stream<R, E>(input: R, config: DatasetConfig, encoder: &E) -> error::Result<Self>
    where
        R: std::io::BufRead,
        E: Encoder + Sync,
    {
        let pad_id = check_config(&config, encoder)?;

        Self::from_checked_stream(input, config, encoder, pad_id)
    }

    fn from_checked_stream<R, E>(
        input: R,
        config: DatasetConfig,
        encoder: &E,
        pad_id: u32,
    ) -> error::Result<Self>
    where
        R: std::io::BufRead,
        E: Encoder + Sync,
    {
        let sequences = io::read_sequences(input)?;
        log::info!("Start tokenize {} sequences", sequences.len());

        let chunks = sequences
            .par_iter()
            .map(|sequence| encode_record(sequence, &config, encoder, pad_id))
            .collect::<error::Result<Vec<Vec<TokenizedRecord>>>>()?;

        let records: Vec<TokenizedRecord> = chunks.into_iter().flatten().collect();
        log::info!("End tokenize, {} records", records.len());

        Ok(Self {
            records,
            block_size: config.block_size,
        })
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Dataset contains no record
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get token ids of record `index`
    pub fn get(&self, index: usize) -> Option<&[u32]> {
        self.records
            .get(index)
            .map(|record| record.token_ids.as_slice())
    }

    /// Iterate over token ids of each record
    pub fn iter(&self) -> impl Iterator<Item = &[u32]> {
        self.records.iter().map(|record| record.token_ids.as_slice())
    }

    /// Length of each record
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Get all records
    pub fn records(&self) -> &[TokenizedRecord] {
        &self.records
    }
}

fn check_config<E>(config: &DatasetConfig, encoder: &E) -> error::Result<u32>
where
    E: Encoder,
{
    if config.block_size == 0 {
        return Err(error::Error::InvalidBlockSize.into());
    }

    encoder
        .pad_token_id()
        .ok_or_else(|| error::Error::TokenizerMismatch.into())
}

/// Group, encode and pad one sequence
fn encode_record<E>(
    sequence: &[u8],
    config: &DatasetConfig,
    encoder: &E,
    pad_id: u32,
) -> error::Result<Vec<TokenizedRecord>>
where
    E: Encoder,
{
    let text = group_sequence(sequence, config.granularity);

    encoder
        .encode(&text, config.block_size, config.overflow)?
        .into_iter()
        .map(|chunk| pad_chunk(chunk, config.block_size, pad_id))
        .collect()
}

/// Right pad chunk to exactly block_size
fn pad_chunk(mut chunk: Vec<u32>, block_size: usize, pad_id: u32) -> error::Result<TokenizedRecord> {
    if chunk.len() > block_size {
        return Err(error::Error::OversizedChunk {
            len: chunk.len(),
            block_size,
        }
        .into());
    }

    chunk.resize(block_size, pad_id);

    Ok(TokenizedRecord { token_ids: chunk })
}
