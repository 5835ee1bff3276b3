use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::Path,
};

use serde::Serialize;

use crate::{
    error::Result,
    statistics::EstimatorStats,
    zone::{Convergence, ExclusionZone, ZoneParams},
};

/// One line of the JSON summary written next to the zone files.
#[derive(Debug, Clone, Serialize)]
pub struct ZoneReport {
    pub graph: String,
    pub nodes: usize,
    pub edges: usize,
    pub zone_size: usize,
    pub convergence: Convergence,
    pub patience: usize,
    pub params: ZoneParams,
    pub stats: EstimatorStats,
    pub elapsed_secs: f64,
}

impl ZoneReport {
    pub fn new(
        graph: impl Into<String>,
        nodes: usize,
        edges: usize,
        params: ZoneParams,
        zone: &ExclusionZone,
        elapsed_secs: f64,
    ) -> Self {
        Self {
            graph: graph.into(),
            nodes,
            edges,
            zone_size: zone.len(),
            convergence: zone.convergence(),
            patience: zone.patience(),
            params,
            stats: *zone.stats(),
            elapsed_secs,
        }
    }
}

/// Appends `reports` to `path` as JSON lines, creating the file if needed.
pub fn append_reports(path: impl AsRef<Path>, reports: &[ZoneReport]) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut writer = BufWriter::new(file);
    for report in reports {
        serde_json::to_writer(&mut writer, report)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}
