//! Class eligibility selection.

/// Marker segment of nested generated resource classes (`app.R$id`).
const GENERATED_RESOURCE_MARKER: &str = "R$";
/// Suffix of generated build-configuration classes.
const BUILD_CONFIG_SUFFIX: &str = "BuildConfig";
/// Suffix of the root generated resource class itself.
const RESOURCE_CLASS_SUFFIX: &str = "R";

/// Decides whether a class is eligible for instrumentation.
///
/// A class qualifies iff its fully-qualified name starts with the configured
/// root package prefix and is not one of the build-generated classes: nested
/// resource identifier tables (name contains `R$`), build-configuration
/// classes (name ends with `BuildConfig`), or the root resource class (name
/// ends with `R`).
///
/// The predicate is a pure function of the name: deterministic, side-effect
/// free, and safe to call any number of times. A malformed or empty name is
/// simply not instrumentable; selection never fails a build.
///
/// # Examples
///
/// ```rust
/// use classweave::instrument::TargetSelector;
///
/// let selector = TargetSelector::new("com.example");
/// assert!(selector.is_instrumentable("com.example.MainActivity"));
/// assert!(!selector.is_instrumentable("com.example.R$layout"));
/// assert!(!selector.is_instrumentable("com.example.BuildConfig"));
/// assert!(!selector.is_instrumentable("com.example.R"));
/// assert!(!selector.is_instrumentable("org.other.Thing"));
/// ```
#[derive(Debug, Clone)]
pub struct TargetSelector {
    package_prefix: String,
}

impl TargetSelector {
    /// Create a selector for the given root package prefix.
    #[must_use]
    pub fn new(package_prefix: impl Into<String>) -> Self {
        TargetSelector {
            package_prefix: package_prefix.into(),
        }
    }

    /// Whether `class_name` qualifies for instrumentation.
    #[must_use]
    pub fn is_instrumentable(&self, class_name: &str) -> bool {
        class_name.starts_with(&self.package_prefix)
            && !(class_name.contains(GENERATED_RESOURCE_MARKER)
                || class_name.ends_with(BUILD_CONFIG_SUFFIX)
                || class_name.ends_with(RESOURCE_CLASS_SUFFIX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_gate() {
        let selector = TargetSelector::new("com.example");
        assert!(selector.is_instrumentable("com.example.Greeter"));
        assert!(selector.is_instrumentable("com.example.sub.Worker"));
        assert!(!selector.is_instrumentable("org.example.Greeter"));
        assert!(!selector.is_instrumentable(""));
    }

    #[test]
    fn test_generated_class_exclusions() {
        let selector = TargetSelector::new("com.example");
        assert!(!selector.is_instrumentable("com.example.R"));
        assert!(!selector.is_instrumentable("com.example.R$id"));
        assert!(!selector.is_instrumentable("com.example.R$string"));
        assert!(!selector.is_instrumentable("com.example.BuildConfig"));
        // The single-letter suffix matches any trailing capital R.
        assert!(!selector.is_instrumentable("com.example.ColorR"));
        // Lowercase r is a different name.
        assert!(selector.is_instrumentable("com.example.Greeter"));
    }

    #[test]
    fn test_selection_is_idempotent_and_order_independent() {
        let selector = TargetSelector::new("com.example");
        let names = [
            "com.example.Greeter",
            "com.example.R$id",
            "org.other.Thing",
            "com.example.BuildConfig",
        ];
        let first: Vec<bool> = names.iter().map(|n| selector.is_instrumentable(n)).collect();
        let second: Vec<bool> = names
            .iter()
            .rev()
            .map(|n| selector.is_instrumentable(n))
            .collect();
        assert_eq!(
            first,
            second.into_iter().rev().collect::<Vec<bool>>()
        );
        for (name, expected) in names.iter().zip(&first) {
            assert_eq!(selector.is_instrumentable(name), *expected);
        }
    }
}
