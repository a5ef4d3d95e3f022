use std::path::PathBuf;

use rmap_transform::TransformReport;

#[derive(Debug)]
pub struct MapResult {
    pub input: PathBuf,
    pub output: PathBuf,
    pub written: bool,
    pub run_report: Option<PathBuf>,
    pub report: TransformReport,
}
