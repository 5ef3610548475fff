#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::fs;
    use std::path::{Path, PathBuf};

    const SRC_ROOT: &str = "src";
    const UNIT_ROOT: &str = "tests/unit";

    #[test]
    fn test_all_src_files_have_unit_tests() {
        assert!(Path::new(SRC_ROOT).is_dir(), "src directory must exist");

        let src_paths = collect_rust_paths(Path::new(SRC_ROOT));
        let test_paths = collect_rust_paths(Path::new(UNIT_ROOT));

        let mut missing = Vec::new();
        for src_path in &src_paths {
            // Entry points and module organization files don't require separate test files
            if src_path == "main.rs" || src_path == "lib.rs" || src_path.ends_with("mod.rs") {
                continue;
            }

            if !test_paths.contains(src_path) {
                missing.push(src_path.clone());
            }
        }
        missing.sort();

        assert!(
            missing.is_empty(),
            "The following src files/directories are missing unit test counterparts:\n{}",
            missing
                .iter()
                .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        assert!(Path::new(SRC_ROOT).is_dir(), "src directory must exist");

        let src_paths = collect_rust_paths(Path::new(SRC_ROOT));
        let test_paths = collect_rust_paths(Path::new(UNIT_ROOT));

        let mut orphaned = Vec::new();
        for test_path in &test_paths {
            if test_path.ends_with("mod.rs") {
                continue;
            }

            if !src_paths.contains(test_path) {
                orphaned.push(test_path.clone());
            }
        }
        orphaned.sort();

        assert!(
            orphaned.is_empty(),
            "The following unit test files/directories have no corresponding src files:\n{}",
            orphaned
                .iter()
                .map(|path| format!("  - tests/unit/{path} -> src/{path} (missing)"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let tests_root = Path::new("tests");
        let mut missing_tests = Vec::new();

        for path in collect_rust_files(tests_root) {
            let file_name = path.file_name().and_then(|name| name.to_str()).unwrap_or("");

            // Harness roots and module organization files carry no tests of their own
            if (path.parent() == Some(tests_root) && file_name == "main.rs")
                || file_name == "mod.rs"
            {
                continue;
            }

            let content = fs::read_to_string(&path).unwrap_or_default();
            if !content.contains("#[test]") {
                missing_tests.push(format!("  - {}", path.display()));
            }
        }

        assert!(
            missing_tests.is_empty(),
            "The following test files don't contain any #[test] functions:\n{}",
            missing_tests.join("\n")
        );
    }

    /// Relative paths of every directory and Rust file under `root`
    fn collect_rust_paths(root: &Path) -> HashSet<String> {
        let mut paths = HashSet::new();

        for path in walk(root) {
            let relative = match path.strip_prefix(root) {
                Ok(stripped) => stripped.to_string_lossy().to_string(),
                Err(_prefix_error) => continue,
            };

            if path.is_dir() || path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative);
            }
        }

        paths
    }

    /// Every Rust file under `root`, at any depth
    fn collect_rust_files(root: &Path) -> Vec<PathBuf> {
        walk(root)
            .into_iter()
            .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("rs"))
            .collect()
    }

    fn walk(root: &Path) -> Vec<PathBuf> {
        let mut found = Vec::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            let Ok(entries) = fs::read_dir(&dir) else {
                continue;
            };
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_dir() {
                    pending.push(path.clone());
                }
                found.push(path);
            }
        }

        found
    }
}
