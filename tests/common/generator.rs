//! Define function to generate sequence value use for test and benchmarking

/* std use */

/* crate use */
use rand::prelude::*;

/* project use */
use crate::common::constant;

/// Generate a RNG with constant::SEED
pub fn rng() -> rand::rngs::StdRng {
    rand::rngs::StdRng::from_seed(constant::SEED)
}

/// Generate a random sequence with alphabet
pub fn seq(rng: &mut rand::rngs::StdRng, alphabet: &[u8], seq_length: u64) -> Vec<u8> {
    (0..seq_length)
        .map(|_| *alphabet.choose(rng).unwrap())
        .collect::<Vec<u8>>()
}

/// Generate a random in ram fasta with RNG
pub fn fasta_with(
    rng: &mut rand::rngs::StdRng,
    alphabet: &[u8],
    seq_length: u64,
    seq_number: u64,
) -> Vec<u8> {
    let mut output = Vec::with_capacity(
        (
            seq_length * seq_number // sequence space
		+ seq_number * 3 // '>' and jump line space
		+ (seq_number.checked_ilog10().unwrap_or(0) as u64 + 1) * seq_number
            // sequence id space
        ) as usize,
    );

    for index in 0..seq_number {
        // Header
        output.extend(b">");
        output.extend(index.to_string().as_bytes());
        output.extend(b"\n");
        // Sequence
        output.extend(seq(rng, alphabet, seq_length));
        output.extend(b"\n");
    }

    output
}

/// Generate a random in ram nucleotide fasta with RNG
pub fn fasta(rng: &mut rand::rngs::StdRng, seq_length: u64, seq_number: u64) -> Vec<u8> {
    fasta_with(rng, &constant::NUCLEOTIDE_ALPHABET, seq_length, seq_number)
}

/// Generate a random in ram protein fasta with RNG
pub fn protein_fasta(rng: &mut rand::rngs::StdRng, seq_length: u64, seq_number: u64) -> Vec<u8> {
    fasta_with(rng, constant::PROTEIN_ALPHABET, seq_length, seq_number)
}

/// Generate a cluster table, each representative has `members` members
pub fn cluster_table(representatives: u64, members: u64) -> Vec<u8> {
    let mut output = Vec::new();

    for rep in 0..representatives {
        for member in 0..members {
            output.extend(format!("rep_{rep}\tseq_{rep}_{member}\n").as_bytes());
        }
    }

    output
}
