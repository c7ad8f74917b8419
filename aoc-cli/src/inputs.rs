//! Local storage for puzzle inputs

use std::fs;
use std::io;
use std::path::PathBuf;

/// File-based store for puzzle inputs
///
/// Directory structure: `{root}/{year}/day{day:02}.txt`
pub struct InputStore {
    root: PathBuf,
}

impl InputStore {
    /// Create a new input store rooted at `root`
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Get the input path for a specific year/day
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.root
            .join(year.to_string())
            .join(format!("day{:02}.txt", day))
    }

    /// Check if an input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).exists()
    }

    /// Load the input for a specific year/day
    pub fn load(&self, year: u16, day: u8) -> io::Result<String> {
        fs::read_to_string(self.input_path(year, day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let store = InputStore::new(PathBuf::from("inputs"));

        let path = store.input_path(2022, 1);
        assert_eq!(path, PathBuf::from("inputs/2022/day01.txt"));

        let path = store.input_path(2022, 25);
        assert_eq!(path, PathBuf::from("inputs/2022/day25.txt"));
    }

    #[test]
    fn test_load_existing_input() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::new(temp.path().to_path_buf());

        assert!(!store.contains(2022, 1));
        assert!(store.load(2022, 1).is_err());

        let dir = temp.path().join("2022");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("day01.txt"), "1000\n\n2000\n").unwrap();

        assert!(store.contains(2022, 1));
        assert_eq!(store.load(2022, 1).unwrap(), "1000\n\n2000\n");
    }
}
