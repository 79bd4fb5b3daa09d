//! Shared fixtures: a temporary scaffold tree shaped like the real one

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use isatemplates::CONFIG_FILENAME;
use tempfile::TempDir;

/// Directories of the builtin templates, each with a small configuration
pub const FIXTURE_DIRS: [(&str, &str); 10] = [
    (
        "isatab-single_cell_rnaseq",
        r#"{"investigation_title": "Single cell study", "s_file_name": "s_sc.txt", "organism": ["Homo sapiens", "Mus musculus"]}"#,
    ),
    ("isatab-bulk_rnaseq", r#"{"investigation_title": "Bulk study", "read_length": 150}"#),
    (
        "isatab-tumor_normal_dna",
        r#"{"investigation_title": "Tumor normal", "is_triplet": true, "sample_names": "T1,N1"}"#,
    ),
    (
        "isatab-tumor_normal_triplets",
        r#"{"investigation_title": "Triplets", "is_triplet": false}"#,
    ),
    ("isatab-germline", r#"{"investigation_title": "Germline", "pedigree": null}"#),
    (
        "isatab-generic",
        r#"{"investigation_title": "Generic", "s_file_name": "s_generic.txt", "a_file_name": "a_generic.txt", "instrument": "Illumina"}"#,
    ),
    ("isatab-microarray", r#"{"investigation_title": "Microarray", "platform": "Affymetrix"}"#),
    (
        "isatab-ms_meta_biocrates",
        r#"{"investigation_title": "Biocrates", "kit": {"name": "MxP Quant 500", "version": 2}}"#,
    ),
    ("isatab-stem_cell_core_bulk", r#"{"investigation_title": "hiPSC bulk"}"#),
    ("isatab-stem_cell_core_sc", r#"{"investigation_title": "hiPSC single cell"}"#),
];

/// A temporary base directory populated with scaffold directories
pub struct TemplateTree {
    dir: TempDir,
}

impl TemplateTree {
    /// Tree containing every builtin template
    pub fn builtin() -> Self {
        let tree = Self::empty();
        for (dir, config) in FIXTURE_DIRS {
            tree.add(dir, config);
        }
        tree
    }

    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create `<base>/<dir>` with a configuration file and a scaffold stub
    pub fn add(&self, dir: &str, config: &str) -> PathBuf {
        let path = self.dir.path().join(dir);
        fs::create_dir_all(path.join("{{cookiecutter.__output_dir}}")).expect("Failed to create template dir");
        fs::write(path.join(CONFIG_FILENAME), config).expect("Failed to write config");
        fs::write(
            path.join("{{cookiecutter.__output_dir}}").join("i_Investigation.txt"),
            "ONTOLOGY SOURCE REFERENCE\n",
        )
        .expect("Failed to write scaffold file");
        path
    }

    /// Replace the configuration file of an existing directory
    pub fn overwrite_config(&self, dir: &str, config: &str) {
        fs::write(self.dir.path().join(dir).join(CONFIG_FILENAME), config).expect("Failed to write config");
    }

    pub fn remove(&self, dir: &str) {
        fs::remove_dir_all(self.dir.path().join(dir)).expect("Failed to remove template dir");
    }

    /// Copy the whole tree into a fresh temporary directory
    pub fn relocate(&self) -> Self {
        let copy = Self::empty();
        for entry in fs::read_dir(self.path()).expect("Failed to read tree") {
            let entry = entry.expect("Failed to read entry");
            let name = entry.file_name();
            let config_path = entry.path().join(CONFIG_FILENAME);
            if config_path.is_file() {
                let config = fs::read_to_string(&config_path).expect("Failed to read config");
                copy.add(name.to_str().expect("utf8 name"), &config);
            } else if entry.path().is_dir() {
                fs::create_dir_all(copy.path().join(&name)).expect("Failed to create dir");
            }
        }
        copy
    }
}
