use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Square campus: the direct road A-B is long, the detour through D is short.
pub const SQUARE_MAP: &str = "\
4 4
A
B
C
D
A B 5
B C 3
A D 1
D C 2
";

/// Two islands with no road between them
#[allow(dead_code)]
pub const SPLIT_MAP: &str = "\
4 2
North_Gate
Library
South_Gate
Hostel
North_Gate Library 1.5
South_Gate Hostel 2
";

/// Get a Command for campus-route, isolated from the user's config and environment
pub fn campus_route(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("campus-route");
    cmd.current_dir(dir)
        .env("CAMPUS_ROUTE_CONFIG_DIR", dir.join("config"))
        .env_remove("CAMPUS_ROUTE_MAP")
        .env_remove("CAMPUS_ROUTE_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// A temporary directory holding one map file
pub struct MapFixture {
    pub dir: TempDir,
    pub map: PathBuf,
}

impl MapFixture {
    pub fn new(content: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let map = dir.path().join("campus_map.txt");
        fs::write(&map, content).unwrap();
        Self { dir, map }
    }

    /// Command with `--map` pointing at the fixture's map
    pub fn cmd(&self) -> Command {
        let mut cmd = campus_route(self.dir.path());
        cmd.arg("--map").arg(&self.map);
        cmd
    }

    /// Command relying on map path resolution instead of `--map`
    #[allow(dead_code)]
    pub fn bare_cmd(&self) -> Command {
        campus_route(self.dir.path())
    }
}
