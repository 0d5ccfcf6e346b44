//! Write generated data in file

/* std use */
use std::io::Write as _;

/// Write buffer in file at path
pub fn write_buffer<P>(buffer: &[u8], path: P) -> std::io::Result<()>
where
    P: AsRef<std::path::Path>,
{
    let mut output = std::fs::File::create(path)?;
    output.write_all(buffer)?;
    output.sync_all()
}

/// Write an executable shell script
#[cfg(unix)]
pub fn write_script<P>(content: &str, path: P) -> std::io::Result<()>
where
    P: AsRef<std::path::Path>,
{
    use std::os::unix::fs::PermissionsExt as _;

    write_buffer(content.as_bytes(), &path)?;
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
}
