//! Constant use in test and benchmark

/// Seed of random number generator
pub const SEED: [u8; 32] = [42; 32];

/// Alphabet of generated nucleotide sequences
pub const NUCLEOTIDE_ALPHABET: [u8; 8] = [b'A', b'C', b'T', b'G', b'a', b'c', b't', b'g'];

/// Alphabet of generated protein sequences
pub const PROTEIN_ALPHABET: &[u8] = b"ACDEFGHIKLMNPQRSTVWY";
