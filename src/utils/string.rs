//! String helpers for status output

/// `word` for a count of one, `words` otherwise
pub fn pluralize(word: &str, count: usize) -> String {
    match count {
        1 => word.to_string(),
        _ => format!("{word}s"),
    }
}

/// Count followed by the matching noun form, e.g. `3 packages`
pub fn count_of(word: &str, count: usize) -> String {
    format!("{count} {}", pluralize(word, count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("package", 0), "packages");
        assert_eq!(pluralize("package", 1), "package");
        assert_eq!(pluralize("edge", 2), "edges");
    }

    #[test]
    fn test_count_of() {
        assert_eq!(count_of("package", 1), "1 package");
        assert_eq!(count_of("edge", 7), "7 edges");
    }
}
