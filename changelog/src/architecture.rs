use std::fmt::{self, Display, Formatter};

/// CPU architectures that snapshot artifacts are built for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Architecture {
    X64,
    Arm64,
    X86,
}

impl Architecture {
    /// Every known architecture, in registry order
    pub const ALL: [Architecture; 3] = [Self::X64, Self::Arm64, Self::X86];

    /// Token as it appears in artifact file names
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::X64 => "64-bit",
            Self::Arm64 => "arm64",
            Self::X86 => "32-bit",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::X64 => "x64 (64-bit)",
            Self::Arm64 => "ARM64",
            Self::X86 => "x86 (32-bit)",
        }
    }

    /// Display rank; higher ranks are listed first
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::X64 => 3,
            Self::Arm64 => 2,
            Self::X86 => 1,
        }
    }

    /// Looks up an architecture by its file name token, ignoring case
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|arch| arch.token().eq_ignore_ascii_case(token))
    }
}

impl Display for Architecture {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ranks_are_unique() {
        let ranks: HashSet<u8> = Architecture::ALL.iter().map(|a| a.rank()).collect();
        assert_eq!(ranks.len(), Architecture::ALL.len());
    }

    #[test]
    fn test_from_token_ignores_case() {
        assert_eq!(Architecture::from_token("ARM64"), Some(Architecture::Arm64));
        assert_eq!(Architecture::from_token("64-BIT"), Some(Architecture::X64));
        assert_eq!(Architecture::from_token("32-bit"), Some(Architecture::X86));
        assert_eq!(Architecture::from_token("riscv64"), None);
    }
}
