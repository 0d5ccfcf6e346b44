//! Run mmseqs2 easy-cluster and count cluster representatives

/* std use */

/* crate use */
use ahash::AHashSet;
use anyhow::Context as _;

/* project use */
use crate::error;

/// Name of scratch directory created in output directory
pub const TEMP_DIR: &str = "temp";

/// Cluster table produce by one clustering run
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct ClusterResult {
    table: Vec<(String, String)>,
    representative_count: usize,
    member_count: usize,
}

impl ClusterResult {
    /// Parse a two columns cluster table (representative, member)
    pub fn from_reader<R>(input: R) -> error::Result<Self>
    where
        R: std::io::BufRead,
    {
        let mut table = Vec::new();

        for (index, line) in input.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let fields = line.split_ascii_whitespace().collect::<Vec<&str>>();
            if fields.len() != 2 {
                return Err(error::Error::MalformedClusterTable {
                    line: index + 1,
                    fields: fields.len(),
                }
                .into());
            }

            table.push((fields[0].to_string(), fields[1].to_string()));
        }

        let representative_count = table
            .iter()
            .map(|(representative, _)| representative.as_str())
            .collect::<AHashSet<&str>>()
            .len();
        let member_count = table
            .iter()
            .map(|(_, member)| member.as_str())
            .collect::<AHashSet<&str>>()
            .len();

        Ok(Self {
            table,
            representative_count,
            member_count,
        })
    }

    /// Rows of cluster table in file order
    pub fn table(&self) -> &[(String, String)] {
        &self.table
    }

    /// Number of distinct cluster representatives
    pub fn representative_count(&self) -> usize {
        self.representative_count
    }

    /// Number of distinct cluster members
    pub fn member_count(&self) -> usize {
        self.member_count
    }
}

/// Parse cluster table file and return number of cluster
pub fn parse_cluster_table<P>(path: P) -> error::Result<usize>
where
    P: AsRef<std::path::Path>,
{
    Ok(read_cluster_table(path)?.representative_count())
}

/// Parse cluster table file
pub fn read_cluster_table<P>(path: P) -> error::Result<ClusterResult>
where
    P: AsRef<std::path::Path>,
{
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open cluster table {}", path.display()))?;

    ClusterResult::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("failed to parse cluster table {}", path.display()))
}

/// Name of output prefix for a similarity threshold, `1.0` give `sim1.0`
pub fn output_prefix(similarity: f64) -> String {
    format!("sim{:?}", similarity)
}

/// Build the easy-cluster command
pub fn easy_cluster_command(
    executable: &std::ffi::OsStr,
    input: &std::path::Path,
    prefix: &std::path::Path,
    temp_dir: &std::path::Path,
    similarity: f64,
) -> std::process::Command {
    let mut command = std::process::Command::new(executable);

    command
        .arg("easy-cluster")
        .arg(input)
        .arg(prefix)
        .arg(temp_dir)
        .args(["--min-seq-id", &format!("{:?}", similarity)]);

    command
}

/// Render command as a shell like command line
pub fn command_line(command: &std::process::Command) -> String {
    std::iter::once(command.get_program())
        .chain(command.get_args())
        .map(|part| part.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Find the unique cluster table of run `prefix` in `dir`.
///
/// Candidates are `{prefix}.tsv` and `{prefix}_*.tsv`, tables of other runs are ignored.
pub fn find_cluster_table<P>(dir: P, prefix: &str) -> error::Result<std::path::PathBuf>
where
    P: AsRef<std::path::Path>,
{
    let dir = dir.as_ref();
    let run_prefix = format!("{prefix}_");

    let mut candidates = Vec::new();
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to list output directory {}", dir.display()))?
    {
        let path = entry?.path();

        let is_table = path.is_file()
            && path.extension().map_or(false, |ext| ext == "tsv")
            && path.file_stem().map_or(false, |stem| {
                let stem = stem.to_string_lossy();
                stem == prefix || stem.starts_with(&run_prefix)
            });

        if is_table {
            candidates.push(path);
        }
    }
    candidates.sort();

    match candidates.len() {
        0 => Err(error::Error::NoOutputFound {
            dir: dir.to_path_buf(),
        }
        .into()),
        1 => Ok(candidates.remove(0)),
        _ => Err(error::Error::AmbiguousOutput {
            dir: dir.to_path_buf(),
            files: candidates,
        }
        .into()),
    }
}

/// Cluster sequences of `input` with `executable` and count representatives.
///
/// Result are written in `output_dir` with prefix `sim{similarity}`, scratch files go in
/// `output_dir/temp`. Function block until the external process end.
pub fn run_clustering<P, Q, S>(
    input: P,
    output_dir: Q,
    similarity: f64,
    executable: S,
) -> error::Result<ClusterResult>
where
    P: AsRef<std::path::Path>,
    Q: AsRef<std::path::Path>,
    S: AsRef<std::ffi::OsStr>,
{
    let input = input.as_ref();
    let output_dir = output_dir.as_ref();

    if !(similarity > 0.0 && similarity <= 1.0) {
        return Err(error::Error::InvalidSimilarity(similarity).into());
    }

    if !input.is_file() {
        return Err(error::Error::MissingInput(input.to_path_buf()).into());
    }

    let temp_dir = output_dir.join(TEMP_DIR);
    std::fs::create_dir_all(&temp_dir)
        .with_context(|| format!("failed to create directory {}", temp_dir.display()))?;

    let prefix_name = output_prefix(similarity);
    let prefix = output_dir.join(&prefix_name);

    let mut command =
        easy_cluster_command(executable.as_ref(), input, &prefix, &temp_dir, similarity);
    let line = command_line(&command);

    log::info!("Start clustering: {}", line);
    let output = command
        .output()
        .with_context(|| format!("failed to run command: {}", line))?;
    log::info!("End clustering");

    log::debug!("stdout:\n{}", String::from_utf8_lossy(&output.stdout));

    if !output.status.success() {
        return Err(error::Error::ClusteringFailed {
            command: line,
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
        .into());
    }

    log::info!("Successfully clustered input fasta file to: {}", output_dir.display());

    let table = find_cluster_table(output_dir, &prefix_name)?;
    log::info!("Read cluster table {}", table.display());

    let result = read_cluster_table(&table)?;
    if result.table().is_empty() {
        log::warn!("Cluster table {} is empty", table.display());
    }

    Ok(result)
}
