use std::path::Path;

/// Shortens import paths relative to the module in the working directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackagePath {
    prefix: String,
}

impl PackagePath {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Reads the module path from `./go.mod`; no prefix if there is none.
    pub fn detect() -> Self {
        Self::from_dir(Path::new("."))
    }

    pub fn from_dir(dir: &Path) -> Self {
        let prefix = std::fs::read_to_string(dir.join("go.mod"))
            .ok()
            .and_then(|s| module_path(&s))
            .unwrap_or_default();
        tracing::debug!(target: "gotestsum.pkgpath", prefix = %prefix, "package path prefix");
        Self { prefix }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn relative<'a>(&self, pkg: &'a str) -> &'a str {
        if self.prefix.is_empty() {
            return pkg;
        }
        if pkg == self.prefix {
            return ".";
        }
        pkg.strip_prefix(self.prefix.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
            .unwrap_or(pkg)
    }
}

/// The argument of the `module` directive in a go.mod file.
pub fn module_path(go_mod: &str) -> Option<String> {
    go_mod.lines().find_map(|line| {
        let rest = line.trim().strip_prefix("module")?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let rest = rest.split("//").next().unwrap_or_default().trim();
        let path = rest.trim_matches('"');
        if path.is_empty() {
            None
        } else {
            Some(path.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_module_prefix() {
        let p = PackagePath::new("example.com/proj");
        assert_eq!(p.relative("example.com/proj"), ".");
        assert_eq!(p.relative("example.com/proj/pkg/a"), "pkg/a");
        assert_eq!(p.relative("example.com/project"), "example.com/project");
        assert_eq!(p.relative("other.org/x"), "other.org/x");
    }

    #[test]
    fn no_prefix_keeps_path() {
        assert_eq!(PackagePath::default().relative("a/b"), "a/b");
    }

    #[test]
    fn parses_go_mod() {
        let go_mod = "// comment\nmodule \"example.com/proj\" // trailing\n\ngo 1.21\n";
        assert_eq!(module_path(go_mod).as_deref(), Some("example.com/proj"));
        assert_eq!(module_path("modules x\n"), None);
    }

    #[test]
    fn detects_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("go.mod"), "module example.com/x\n").unwrap();
        assert_eq!(PackagePath::from_dir(dir.path()).prefix(), "example.com/x");
    }
}
