//! Checks keeping the unit test tree aligned with the source tree

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    // Tests every source file is mirrored by a unit test file
    // Verified by deleting a unit test file
    #[test]
    fn test_every_source_file_has_a_unit_counterpart() {
        let sources = rust_paths_under(Path::new("src")).expect("src directory is readable");
        let units = rust_paths_under(Path::new("tests/unit")).unwrap_or_default();

        let missing: Vec<&String> = sources
            .iter()
            .filter(|path| !is_wiring_file(path))
            .filter(|path| !units.contains(*path))
            .collect();

        assert!(
            missing.is_empty(),
            "Sources without a tests/unit counterpart:\n{}",
            format_paths(&missing)
        );
    }

    // Tests every unit test file still points at a live source file
    // Verified by renaming a source file without its test
    #[test]
    fn test_every_unit_test_has_a_source_counterpart() {
        let sources = rust_paths_under(Path::new("src")).expect("src directory is readable");
        let units = rust_paths_under(Path::new("tests/unit")).unwrap_or_default();

        let orphaned: Vec<&String> = units
            .iter()
            .filter(|path| !is_wiring_file(path))
            .filter(|path| !sources.contains(*path))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit test files without a src counterpart:\n{}",
            format_paths(&orphaned)
        );
    }

    // Tests every test file exercises at least one test
    // Verified by adding an assertion-free helper file
    #[test]
    fn test_every_test_file_contains_tests() {
        let mut untested = Vec::new();
        collect_untested(Path::new("tests"), &mut untested).expect("tests directory is readable");

        assert!(
            untested.is_empty(),
            "Test files without any #[test] functions:\n{}",
            untested
                .iter()
                .map(|path| format!("  - {path}"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    fn is_wiring_file(path: &str) -> bool {
        path == "main.rs" || path == "lib.rs" || path.ends_with("mod.rs")
    }

    fn format_paths(paths: &[&String]) -> String {
        paths
            .iter()
            .map(|path| format!("  - {path}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn rust_paths_under(base: &Path) -> Result<BTreeSet<String>, io::Error> {
        let mut paths = BTreeSet::new();
        collect_into(base, base, &mut paths)?;
        Ok(paths)
    }

    fn collect_into(
        dir: &Path,
        base: &Path,
        paths: &mut BTreeSet<String>,
    ) -> Result<(), io::Error> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(|_e| io::Error::other("entry escaped its base directory"))?
                .to_string_lossy()
                .to_string();

            if path.is_dir() {
                paths.insert(relative);
                collect_into(&path, base, paths)?;
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative);
            }
        }
        Ok(())
    }

    fn collect_untested(dir: &Path, untested: &mut Vec<String>) -> Result<(), io::Error> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_dir() {
                collect_untested(&path, untested)?;
                continue;
            }
            let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
            if path.extension().and_then(|ext| ext.to_str()) != Some("rs")
                || name == "mod.rs"
                || name == "main.rs"
            {
                continue;
            }
            if !fs::read_to_string(&path)?.contains("#[test]") {
                untested.push(path.display().to_string());
            }
        }
        Ok(())
    }
}
