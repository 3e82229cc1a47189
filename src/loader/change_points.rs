//! loader::change_points — externally detected change points from JSON.
//!
//! The file is a JSON array of objects with `date`, `probability`,
//! `mean_before`, `mean_after`, `impact_pct` and an optional `event`
//! label. Unknown keys are ignored. A missing file is not an error: the
//! detector may not have run yet, so an empty list is returned with a
//! WARN.
use crate::events::records::ChangePoint;
use crate::loader::errors::LoaderResult;
use std::{fs::File, io::BufReader, path::Path};
use tracing::{info, warn};

/// Parse and validate a JSON array of change points.
pub fn change_points_from_json_str(raw: &str) -> LoaderResult<Vec<ChangePoint>> {
    let change_points: Vec<ChangePoint> = serde_json::from_str(raw)?;
    validate_all(&change_points)?;
    Ok(change_points)
}

pub fn load_change_points<P: AsRef<Path>>(path: P) -> LoaderResult<Vec<ChangePoint>> {
    let path = path.as_ref();
    if !path.exists() {
        warn!(path = %path.display(), "change point file not found; continuing without change points");
        return Ok(Vec::new());
    }
    let change_points: Vec<ChangePoint> = serde_json::from_reader(BufReader::new(File::open(path)?))?;
    validate_all(&change_points)?;
    info!(path = %path.display(), change_points = change_points.len(), "loaded change points");
    Ok(change_points)
}

fn validate_all(change_points: &[ChangePoint]) -> LoaderResult<()> {
    for cp in change_points {
        cp.validate()?;
    }
    Ok(())
}
