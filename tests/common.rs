#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rc() -> Command {
    cargo_bin_cmd!("rollcall")
}

/// Per-test workspace inside the system temp dir, reset on every run.
pub struct TestEnv {
    pub dir: PathBuf,
    pub config: String,
}

pub fn setup(name: &str) -> TestEnv {
    let mut dir = env::temp_dir();
    dir.push(format!("{}_rollcall", name));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create test dir");

    TestEnv {
        config: dir.join("rollcall.conf").to_string_lossy().to_string(),
        dir,
    }
}

impl TestEnv {
    pub fn roster_path(&self) -> String {
        self.dir.join("roster.csv").to_string_lossy().to_string()
    }

    pub fn log_path(&self) -> String {
        self.dir.join("log.csv").to_string_lossy().to_string()
    }

    pub fn database_path(&self) -> String {
        self.dir.join("rollcall.sqlite").to_string_lossy().to_string()
    }

    pub fn pending_path(&self) -> PathBuf {
        self.dir.join("pending.json")
    }

    /// Lines of the CSV log, header included. Empty when no log yet.
    pub fn log_lines(&self) -> Vec<String> {
        match fs::read_to_string(self.dir.join("log.csv")) {
            Ok(content) => content.lines().map(|l| l.to_string()).collect(),
            Err(_) => Vec::new(),
        }
    }
}

/// Write a config file with sane test defaults, then apply overrides.
pub fn write_config(te: &TestEnv, overrides: &[(&str, &str)]) {
    let mut fields: Vec<(String, String)> = vec![
        ("roster".to_string(), te.roster_path()),
        ("log".to_string(), te.log_path()),
        ("database".to_string(), te.database_path()),
        ("store".to_string(), "csv".to_string()),
        ("match_mode".to_string(), "auto".to_string()),
        ("admin_password".to_string(), String::new()),
        ("submission_window".to_string(), "none".to_string()),
        ("retention".to_string(), "none".to_string()),
    ];

    for (key, value) in overrides {
        if let Some(field) = fields.iter_mut().find(|(name, _)| name == key) {
            field.1 = value.to_string();
        }
    }

    let yaml: String = fields
        .iter()
        .map(|(k, v)| format!("{}: \"{}\"\n", k, v))
        .collect();
    fs::write(&te.config, yaml).expect("write config");
}

/// ID-keyed roster: explicit Student ID column.
pub fn write_id_roster(te: &TestEnv) {
    fs::write(
        te.dir.join("roster.csv"),
        "Student ID,Name\nA1,Jo Lee\nB2,Sam Kim\n",
    )
    .expect("write roster");
}

/// Phone-keyed roster: Jo Lee and Sam Kim share the last-4 "1234".
pub fn write_phone_roster(te: &TestEnv) {
    fs::write(
        te.dir.join("roster.csv"),
        "Trainee Name,Phone Number\n\
         Jo Lee,555-123-1234\n\
         Sam Kim,(555) 987-1234\n\
         Ana Diaz,5550000042\n\
         No Phone,42\n",
    )
    .expect("write roster");
}
