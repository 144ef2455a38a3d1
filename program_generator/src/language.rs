//!
//! The supported target languages.
//!

///
/// The supported target languages.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// The C language.
    C,
    /// The C++ language.
    Cpp,
    /// The D language.
    D,
    /// The Go language.
    Go,
    /// The Rust language.
    Rust,
    /// The Zig language.
    Zig,
}

impl Language {
    /// All supported languages.
    pub const ALL: [Self; 6] = [
        Self::C,
        Self::Cpp,
        Self::D,
        Self::Go,
        Self::Rust,
        Self::Zig,
    ];

    ///
    /// Returns the conventional source file extension.
    ///
    pub fn extension(&self) -> &'static str {
        match self {
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::D => "d",
            Self::Go => "go",
            Self::Rust => "rs",
            Self::Zig => "zig",
        }
    }
}

impl std::str::FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.trim().to_lowercase().as_str() {
            "c" => Ok(Self::C),
            "c++" | "cpp" | "cxx" => Ok(Self::Cpp),
            "d" | "dlang" => Ok(Self::D),
            "go" | "golang" => Ok(Self::Go),
            "rust" => Ok(Self::Rust),
            "zig" => Ok(Self::Zig),
            _ => anyhow::bail!(
                "Unknown language `{}`. Supported languages: {}",
                string,
                Self::ALL
                    .iter()
                    .map(|language| language.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::C => write!(f, "C"),
            Self::Cpp => write!(f, "C++"),
            Self::D => write!(f, "D"),
            Self::Go => write!(f, "Go"),
            Self::Rust => write!(f, "Rust"),
            Self::Zig => write!(f, "Zig"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::Language;

    #[test]
    fn parse_aliases() {
        assert_eq!(Language::from_str("C++").expect("Valid"), Language::Cpp);
        assert_eq!(Language::from_str("cpp").expect("Valid"), Language::Cpp);
        assert_eq!(Language::from_str(" Golang ").expect("Valid"), Language::Go);
        assert_eq!(Language::from_str("RUST").expect("Valid"), Language::Rust);
    }

    #[test]
    fn parse_display_roundtrip() {
        for language in Language::ALL.into_iter() {
            assert_eq!(
                Language::from_str(language.to_string().as_str()).expect("Valid"),
                language
            );
        }
    }

    #[test]
    fn parse_unknown() {
        let error = Language::from_str("COBOL").expect_err("Invalid");
        assert!(error.to_string().contains("Unknown language `COBOL`"));
    }
}
