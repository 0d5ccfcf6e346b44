//! Split sequences in codon or residue groups

/* std use */

/* crate use */

/* project use */
use crate::format::Granularity;

/// Marker put before the first codon
pub const START_MARKER: &str = "[START]";

/// Marker put after the last codon
pub const END_MARKER: &str = "[END]";

/// Iterator over non overlapping groups of a sequence
pub struct Groups<'a> {
    seq: &'a [u8],
    width: usize,
    start: usize,
}

impl<'a> Groups<'a> {
    /// Create a new group iterator
    pub fn new(seq: &'a [u8], granularity: Granularity) -> Self {
        Self {
            seq,
            width: granularity.width(),
            start: 0,
        }
    }
}

impl<'a> Iterator for Groups<'a> {
    type Item = &'a [u8];

    /// Get next group, last one could be shorter than width
    fn next(&mut self) -> Option<Self::Item> {
        if self.start >= self.seq.len() {
            None
        } else {
            let end = std::cmp::min(self.start + self.width, self.seq.len());
            let group = &self.seq[self.start..end];
            self.start = end;
            Some(group)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remain = (self.seq.len() - self.start).div_ceil(self.width);
        (remain, Some(remain))
    }
}

impl<'a> ExactSizeIterator for Groups<'a> {}

/// Uppercase sequence, split it in groups joined by a space.
///
/// In codon mode the result is wrapped by [START_MARKER] and [END_MARKER].
/// ```
/// use genome_prep::format::Granularity;
/// use genome_prep::tokenizer::group_sequence;
///
/// assert_eq!(group_sequence(b"aaaccc", Granularity::Codon), "[START] AAA CCC [END]");
/// assert_eq!(group_sequence(b"MKV", Granularity::AminoAcid), "M K V");
/// ```
pub fn group_sequence(seq: &[u8], granularity: Granularity) -> String {
    let norm_seq = seq.to_ascii_uppercase();
    let groups = Groups::new(&norm_seq, granularity);

    let mut text: Vec<u8> =
        Vec::with_capacity(norm_seq.len() + groups.len() + START_MARKER.len() + END_MARKER.len() + 2);

    if granularity.markers() {
        text.extend(START_MARKER.as_bytes());
        text.push(b' ');
    }

    for (index, group) in groups.enumerate() {
        if index != 0 {
            text.push(b' ');
        }
        text.extend(group);
    }

    if granularity.markers() {
        text.push(b' ');
        text.extend(END_MARKER.as_bytes());
    }

    String::from_utf8_lossy(&text).into_owned()
}
