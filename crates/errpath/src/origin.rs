/// The dotted prefix naming the module an error was annotated in.
///
/// Built from a logical module path by stripping the project root and
/// appending a `.`, so it can be glued directly in front of a description:
///
/// | Path                             | Origin              |
/// |----------------------------------|---------------------|
/// | `github.com/org/proj/sub/pkg`    | `sub/pkg.`          |
/// | `github.com/org/proj`            | *(empty)*           |
/// | `org/sub/pkg`                    | `sub/pkg.`          |
/// | `myapp::storage::disk`           | `storage::disk.`    |
/// | `myapp`                          | *(empty)*           |
///
/// Rust paths (`::`) come from `module_path!()`; see [`origin!`](crate::origin!).
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Origin(String);

impl Origin {
    /// The empty origin. Used by uninitialized annotators.
    pub const fn empty() -> Self {
        Self(String::new())
    }

    /// Resolve a module path into an origin prefix.
    ///
    /// ```
    /// use errpath::Origin;
    /// assert_eq!(Origin::resolve("github.com/org/proj/sub/pkg").as_str(), "sub/pkg.");
    /// assert_eq!(Origin::resolve("myapp::storage").as_str(), "storage.");
    /// assert!(Origin::resolve("main").is_empty());
    /// ```
    pub fn resolve(path: &str) -> Self {
        let sep = if path.contains("::") { "::" } else { "/" };
        let mut segments = path.split(sep);

        // Go-style module roots are host/org/project; everything else is
        // rooted at the first segment (crate or top-level project).
        let root_len = match segments.next() {
            Some(first) if sep == "/" && first.contains('.') => 3,
            Some(_) => 1,
            None => return Self::empty(),
        };

        let rest: Vec<&str> = segments.skip(root_len - 1).collect();
        if rest.is_empty() {
            return Self::empty();
        }

        let joined = rest.join(sep);
        let trimmed = joined.trim_start_matches(sep);
        if trimmed.is_empty() {
            return Self::empty();
        }
        Self(format!("{trimmed}."))
    }

    /// Use `prefix` as the origin without any processing.
    pub fn verbatim(prefix: impl Into<String>) -> Self {
        Self(prefix.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl core::fmt::Display for Origin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl core::fmt::Debug for Origin {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Origin({:?})", self.0)
    }
}
