//! Convert grouped sequences in token ids

/* std use */

/* crate use */
use ahash::AHashMap;
use anyhow::Context as _;

/* project use */
use crate::error;
use crate::format::Overflow;
use crate::tokenizer::{END_MARKER, START_MARKER};

/// Token used to pad chunks
pub const PAD_TOKEN: &str = "[PAD]";

/// Token used for words absent of vocabulary
pub const UNK_TOKEN: &str = "[UNK]";

const NUCLEOTIDES: &[u8] = b"ACGT";

const AMINO_ACIDS: &[u8] = b"ACDEFGHIKLMNPQRSTVWYX*";

/// Minimal capability required to turn text in token ids
pub trait Encoder {
    /// Encode text in chunk of at most `max_length` token ids.
    ///
    /// With [Overflow::Truncate] only one chunk is produced, with [Overflow::Chunk] every
    /// token is kept in consecutive chunks. At least one chunk is always returned.
    fn encode(&self, text: &str, max_length: usize, overflow: Overflow)
        -> error::Result<Vec<Vec<u32>>>;

    /// Id of padding token, if encoder define one
    fn pad_token_id(&self) -> Option<u32>;
}

/// Word level tokenizer, words are separated by whitespace
#[derive(Debug, Clone)]
pub struct VocabTokenizer {
    vocab: AHashMap<String, u32>,
    unk_id: u32,
    pad_id: Option<u32>,
}

impl VocabTokenizer {
    /// Build a tokenizer where id is the rank of token, special tokens come first
    pub fn from_tokens<'a, I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut vocab: AHashMap<String, u32> = [PAD_TOKEN, UNK_TOKEN, START_MARKER, END_MARKER]
            .iter()
            .enumerate()
            .map(|(id, token)| (token.to_string(), id as u32))
            .collect();

        for token in tokens {
            let id = vocab.len() as u32;
            vocab.entry(token.to_string()).or_insert(id);
        }

        Self {
            unk_id: 1,
            pad_id: Some(0),
            vocab,
        }
    }

    /// Tokenizer with the 64 codons in lexical order
    pub fn codon() -> Self {
        let codons = NUCLEOTIDES
            .iter()
            .flat_map(|a| {
                NUCLEOTIDES.iter().flat_map(move |b| {
                    NUCLEOTIDES
                        .iter()
                        .map(move |c| String::from_utf8_lossy(&[*a, *b, *c]).into_owned())
                })
            })
            .collect::<Vec<String>>();

        Self::from_tokens(codons.iter().map(|c| c.as_str()))
    }

    /// Tokenizer with the 20 standard residues, unknown residue and stop
    pub fn amino_acid() -> Self {
        let residues = AMINO_ACIDS
            .iter()
            .map(|r| (*r as char).to_string())
            .collect::<Vec<String>>();

        Self::from_tokens(residues.iter().map(|r| r.as_str()))
    }

    /// Get id associate to token
    pub fn token_to_id(&self, token: &str) -> Option<u32> {
        self.vocab.get(token).copied()
    }

    /// Number of token in vocabulary
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }
}

impl Encoder for VocabTokenizer {
    fn encode(
        &self,
        text: &str,
        max_length: usize,
        overflow: Overflow,
    ) -> error::Result<Vec<Vec<u32>>> {
        if max_length == 0 {
            return Err(error::Error::InvalidBlockSize.into());
        }

        let ids = text
            .split_whitespace()
            .map(|word| self.vocab.get(word).copied().unwrap_or(self.unk_id));

        match overflow {
            Overflow::Truncate => Ok(vec![ids.take(max_length).collect()]),
            Overflow::Chunk => {
                let ids = ids.collect::<Vec<u32>>();
                if ids.is_empty() {
                    Ok(vec![Vec::new()])
                } else {
                    Ok(ids.chunks(max_length).map(|chunk| chunk.to_vec()).collect())
                }
            }
        }
    }

    fn pad_token_id(&self) -> Option<u32> {
        self.pad_id
    }
}

/// Load a pre-trained HuggingFace `tokenizer.json`, truncation is set to `max_length`
pub fn load_tokenizer<P>(path: P, max_length: usize) -> error::Result<tokenizers::Tokenizer>
where
    P: AsRef<std::path::Path>,
{
    if max_length == 0 {
        return Err(error::Error::InvalidBlockSize.into());
    }

    let mut tokenizer = tokenizers::Tokenizer::from_file(path.as_ref())
        .map_err(|e| error::Error::Tokenizer(e.to_string()))
        .with_context(|| format!("Error when loading tokenizer {}", path.as_ref().display()))?;

    tokenizer
        .with_truncation(Some(truncation(max_length)))
        .map_err(|e| error::Error::Tokenizer(e.to_string()))?;

    log::debug!(
        "Load tokenizer {} with {} tokens",
        path.as_ref().display(),
        tokenizer.get_vocab_size(true)
    );

    Ok(tokenizer)
}

fn truncation(max_length: usize) -> tokenizers::TruncationParams {
    tokenizers::TruncationParams {
        max_length,
        stride: 0,
        ..Default::default()
    }
}

impl Encoder for tokenizers::Tokenizer {
    fn encode(
        &self,
        text: &str,
        max_length: usize,
        overflow: Overflow,
    ) -> error::Result<Vec<Vec<u32>>> {
        if max_length == 0 {
            return Err(error::Error::InvalidBlockSize.into());
        }

        let encoding = match self.get_truncation() {
            Some(params) if params.max_length == max_length && params.stride == 0 => {
                (**self).encode(text, true)
            }
            _ => {
                let mut tokenizer = self.clone();
                tokenizer
                    .with_truncation(Some(truncation(max_length)))
                    .map_err(|e| error::Error::Tokenizer(e.to_string()))?;
                (*tokenizer).encode(text, true)
            }
        }
        .map_err(|e| error::Error::Tokenizer(e.to_string()))?;

        let mut chunks = vec![encoding.get_ids().to_vec()];
        if overflow == Overflow::Chunk {
            chunks.extend(
                encoding
                    .get_overflowing()
                    .iter()
                    .map(|chunk| chunk.get_ids().to_vec()),
            );
        }

        Ok(chunks)
    }

    fn pad_token_id(&self) -> Option<u32> {
        self.get_padding()
            .map(|params| params.pad_id)
            .or_else(|| self.token_to_id(PAD_TOKEN))
    }
}
