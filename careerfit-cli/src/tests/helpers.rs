//! Test helpers for writing datasets and requests into a temporary workspace.

use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tempfile::TempDir;

pub(super) const POSTINGS_CSV: &str = "\
Job ID,Job Title,Short Description,Full Description,Responsibilities,Required Skills,Nice To Have Skills,Role Tags,Job Location,Salary Min,Difficulty,Views
J1,Data Scientist,Build machine learning models,Python pandas statistics,Analyse data,python sql,spark,Data; AI,\"Amsterdam, NL\",45000,3,120
J2,Frontend Developer,Build web interfaces,React typescript css,Ship features,javascript react,design,Web,\"Berlin, DE\",50000,2,80
J3,Nurse,Patient care on the ward,Hospital shifts,Monitor patients,nursing,first aid,Healthcare,\"Utrecht, NL\",38000,2,40
";

pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub(super) fn write(&self, name: &str, contents: &str) -> Utf8PathBuf {
        let path = self.root.join(name);
        write_utf8(&path, contents.as_bytes());
        path
    }

    pub(super) fn postings(&self) -> Utf8PathBuf {
        self.write("postings.csv", POSTINGS_CSV)
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture file");
}
