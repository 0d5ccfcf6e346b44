//! Read sequences from fasta file

/* std use */
use std::io::Read as _;

/* crate use */
use anyhow::Context as _;

/* project use */
use crate::error;

/// Check stream start by a fasta header, consume leading whitespace and first byte.
///
/// Return `Ok(false)` when stream is empty or only contains whitespace.
pub fn detect_fasta<R>(input: &mut R) -> error::Result<bool>
where
    R: std::io::BufRead,
{
    loop {
        let buffer = input.fill_buf()?;
        if buffer.is_empty() {
            return Ok(false);
        }

        match buffer.iter().position(|c| !c.is_ascii_whitespace()) {
            Some(pos) => {
                let first_byte = buffer[pos];
                input.consume(pos + 1);

                return match first_byte {
                    b'>' => Ok(true),
                    _ => Err(error::Error::NotFasta.into()),
                };
            }
            None => {
                let len = buffer.len();
                input.consume(len);
            }
        }
    }
}

/// Open a possibly compressed fasta file
pub fn fasta_reader<P>(path: P) -> error::Result<Box<dyn std::io::BufRead>>
where
    P: AsRef<std::path::Path>,
{
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open sequence file {}", path.display()))?;

    if file.metadata()?.len() == 0 {
        return Err(error::Error::EmptyInput.into());
    }

    Ok(Box::new(std::io::BufReader::new(
        niffler::get_reader(Box::new(file))?.0,
    )))
}

/// Read every sequence of a fasta stream
pub fn read_sequences<R>(mut input: R) -> error::Result<Vec<Vec<u8>>>
where
    R: std::io::BufRead,
{
    if !detect_fasta(&mut input)? {
        return Err(error::Error::EmptyInput.into());
    }

    let mut reader = noodles::fasta::Reader::new(std::io::Cursor::new([b'>']).chain(input));

    let mut sequences = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("failed to parse fasta record {index}"))?;
        sequences.push(record.sequence().as_ref().to_vec());
    }

    log::debug!("Read {} fasta records", sequences.len());

    if sequences.is_empty() {
        return Err(error::Error::EmptyInput.into());
    }

    Ok(sequences)
}
