//! Configuration of sequence tokenization

/* std use */

/* crate use */

/* project use */

/// Granularity of sequence segmentation
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Granularity {
    /// Group of three nucleotides
    #[default]
    Codon,
    /// One residue per group
    AminoAcid,
}

impl Granularity {
    /// Number of characters in one group
    pub fn width(&self) -> usize {
        match self {
            Granularity::Codon => 3,
            Granularity::AminoAcid => 1,
        }
    }

    /// Sequence is wrapped by [START] and [END] markers
    pub fn markers(&self) -> bool {
        matches!(self, Granularity::Codon)
    }
}

impl std::fmt::Display for Granularity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Granularity::Codon => write!(f, "codon"),
            Granularity::AminoAcid => write!(f, "amino_acid"),
        }
    }
}

impl std::str::FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "codon" => Ok(Granularity::Codon),
            "amino_acid" | "aa" => Ok(Granularity::AminoAcid),
            _ => Err(format!(
                "unknown granularity {s:?} (expected \"codon\" or \"amino_acid\")"
            )),
        }
    }
}

/// What happen to token after max length
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Overflow {
    /// Keep only the first chunk
    #[default]
    Truncate,
    /// Keep every chunk
    Chunk,
}

impl std::fmt::Display for Overflow {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width() {
        assert_eq!(Granularity::Codon.width(), 3);
        assert_eq!(Granularity::AminoAcid.width(), 1);

        assert!(Granularity::Codon.markers());
        assert!(!Granularity::AminoAcid.markers());
    }

    #[test]
    fn parse() {
        assert_eq!("codon".parse::<Granularity>(), Ok(Granularity::Codon));
        assert_eq!("amino_acid".parse::<Granularity>(), Ok(Granularity::AminoAcid));
        assert_eq!("aa".parse::<Granularity>(), Ok(Granularity::AminoAcid));
        assert!("kmer".parse::<Granularity>().is_err());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Granularity::Codon), "codon");
        assert_eq!(format!("{}", Granularity::AminoAcid), "amino_acid");
        assert_eq!(format!("{}", Overflow::Truncate), "Truncate");
        assert_eq!(format!("{}", Overflow::Chunk), "Chunk");
    }
}
