use std::{
    ffi::OsString,
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{error::Result, zone::ExclusionZone};

/// Writes the members of `zone` to `path`, one node id per line in ascending order.
pub fn write_zone(path: impl AsRef<Path>, zone: &ExclusionZone) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_members(&mut writer, zone.members())?;
    writer.flush()?;
    Ok(())
}

/// Writes node ids one per line.
pub fn write_members<W: Write>(
    writer: &mut W,
    members: impl IntoIterator<Item = usize>,
) -> Result<()> {
    for node in members {
        writeln!(writer, "{node}")?;
    }
    Ok(())
}

/// Output path for the zone of `graph_path` inside `output_dir`: `zone-<file name>`.
pub fn zone_path(output_dir: &Path, graph_path: &Path) -> PathBuf {
    let mut name = OsString::from("zone-");
    if let Some(file_name) = graph_path.file_name() {
        name.push(file_name);
    }
    output_dir.join(name)
}
