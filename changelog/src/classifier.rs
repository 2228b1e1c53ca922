use crate::architecture::Architecture;
use crate::error::ChangelogError;
use crate::regex_utils::build_artifact_pattern;
use crate::types::{ArtifactKind, ClassifiedUrl, ReleaseArtifacts, Result};
use regex::Regex;

/// How the file name of one artifact kind is shaped:
/// `<prefix>-<anything><infix>-<architecture>.<extension>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactTemplate {
    pub kind: ArtifactKind,
    pub prefix: &'static str,
    pub infix: Option<&'static str>,
    pub extension: &'static str,
}

/// Templates in match order. BusyBox MinGit must precede plain MinGit, whose
/// shape also covers BusyBox file names.
pub const ARTIFACT_TEMPLATES: [ArtifactTemplate; 4] = [
    ArtifactTemplate {
        kind: ArtifactKind::Installer,
        prefix: "Git",
        infix: None,
        extension: "exe",
    },
    ArtifactTemplate {
        kind: ArtifactKind::Portable,
        prefix: "PortableGit",
        infix: None,
        extension: "7z.exe",
    },
    ArtifactTemplate {
        kind: ArtifactKind::MinGitBusyBox,
        prefix: "MinGit",
        infix: Some("-BusyBox"),
        extension: "zip",
    },
    ArtifactTemplate {
        kind: ArtifactKind::MinGit,
        prefix: "MinGit",
        infix: None,
        extension: "zip",
    },
];

/// Classifies download URLs by artifact kind and architecture
#[derive(Debug, Clone)]
pub struct UrlClassifier {
    pattern: Regex,
    templates: Vec<ArtifactTemplate>,
}

impl UrlClassifier {
    /// Compiles the classifier for the built-in templates and architectures
    ///
    /// # Errors
    /// Returns an error if the combined pattern fails to compile
    pub fn new() -> Result<Self> {
        Self::with_templates(&ARTIFACT_TEMPLATES)
    }

    /// # Errors
    /// Returns an error if the combined pattern fails to compile
    pub fn with_templates(templates: &[ArtifactTemplate]) -> Result<Self> {
        let pattern = build_artifact_pattern(templates, &Architecture::ALL)?;
        Ok(Self {
            pattern,
            templates: templates.to_vec(),
        })
    }

    /// Classifies a single URL by its trailing file name
    ///
    /// # Errors
    /// Returns a parse error naming the URL and file name when no template matches
    pub fn classify(&self, url: &str) -> Result<ClassifiedUrl> {
        let file_name = file_name(url);
        let captures = self
            .pattern
            .captures(file_name)
            .ok_or_else(|| ChangelogError::parse(url, file_name))?;

        let (kind, token) = self
            .templates
            .iter()
            .enumerate()
            .find_map(|(i, template)| {
                captures.get(2 * i + 1)?;
                captures.get(2 * i + 2).map(|arch| (template.kind, arch.as_str()))
            })
            .ok_or_else(|| ChangelogError::parse(url, file_name))?;

        let architecture =
            Architecture::from_token(token).ok_or_else(|| ChangelogError::parse(url, file_name))?;

        Ok(ClassifiedUrl {
            url: url.to_string(),
            kind,
            architecture,
        })
    }

    /// Classifies every URL into its bucket, stopping at the first failure
    ///
    /// # Errors
    /// Returns the parse error of the first URL that does not match
    pub fn classify_all<I, S>(&self, urls: I) -> Result<ReleaseArtifacts>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut artifacts = ReleaseArtifacts::new();
        for url in urls {
            artifacts.push(self.classify(url.as_ref())?);
        }
        Ok(artifacts)
    }
}

/// Everything after the last `/`
fn file_name(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://github.com/git-for-windows/git-snapshots/releases/download/prerelease-2.40.0.windows.1.1/";

    fn classify(file_name: &str) -> Result<ClassifiedUrl> {
        UrlClassifier::new().unwrap().classify(&format!("{BASE}{file_name}"))
    }

    #[test]
    fn test_every_kind_and_architecture() {
        let shapes = [
            (ArtifactKind::Installer, "Git-2.40.0.1-{arch}.exe"),
            (ArtifactKind::Portable, "PortableGit-2.40.0.1-{arch}.7z.exe"),
            (ArtifactKind::MinGit, "MinGit-2.40.0.1-{arch}.zip"),
            (ArtifactKind::MinGitBusyBox, "MinGit-2.40.0.1-BusyBox-{arch}.zip"),
        ];

        for (kind, shape) in shapes {
            for arch in Architecture::ALL {
                let name = shape.replace("{arch}", arch.token());
                let classified = classify(&name).unwrap();
                assert_eq!((classified.kind, classified.architecture), (kind, arch), "{name}");

                let upper = classify(&name.to_uppercase()).unwrap();
                assert_eq!((upper.kind, upper.architecture), (kind, arch), "{name}");
            }
        }
    }

    #[test]
    fn test_busybox_and_plain_mingit_do_not_mix() {
        let busybox = classify("MinGit-2.40.0-busybox-64-bit.zip").unwrap();
        assert_eq!(busybox.kind, ArtifactKind::MinGitBusyBox);

        let plain = classify("MinGit-2.40.0-64-bit.zip").unwrap();
        assert_eq!(plain.kind, ArtifactKind::MinGit);
    }

    #[test]
    fn test_unknown_shapes_fail() {
        for name in [
            "Git-2.40.0-64-bit.tar.bz2",
            "Git-2.40.0-riscv64.exe",
            "pdbs-for-git-64-bit-2.40.0.zip",
            "MinGit-2.40.0-64-bit.zip.sha256",
            "git-2.40.0.tar.xz",
            "Git-64-bit.exe",
        ] {
            let err = classify(name).unwrap_err();
            assert!(err.is_parse(), "{name}");
        }
    }

    #[test]
    fn test_parse_error_carries_file_name() {
        let err = classify("notes.txt").unwrap_err();
        match err {
            ChangelogError::Parse { url, file_name } => {
                assert_eq!(file_name, "notes.txt");
                assert!(url.ends_with("/notes.txt"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_bare_file_name_is_accepted() {
        let classified = UrlClassifier::new().unwrap().classify("Git-2.40.0-arm64.exe").unwrap();
        assert_eq!(classified.architecture, Architecture::Arm64);
    }

    #[test]
    fn test_classify_all_keeps_order_within_buckets() {
        let classifier = UrlClassifier::new().unwrap();
        let urls = [
            format!("{BASE}Git-2.40.0-32-bit.exe"),
            format!("{BASE}MinGit-2.40.0-64-bit.zip"),
            format!("{BASE}Git-2.40.0-64-bit.exe"),
        ];
        let artifacts = classifier.classify_all(&urls).unwrap();

        let installers = artifacts.get(ArtifactKind::Installer);
        assert_eq!(installers.len(), 2);
        assert_eq!(installers[0].architecture, Architecture::X86);
        assert_eq!(installers[1].architecture, Architecture::X64);
        assert_eq!(artifacts.get(ArtifactKind::MinGit).len(), 1);
    }

    #[test]
    fn test_classify_all_stops_at_first_bad_url() {
        let classifier = UrlClassifier::new().unwrap();
        let err = classifier
            .classify_all(["https://example.com/Git-2.40.0-64-bit.exe", "https://example.com/bogus"])
            .unwrap_err();
        assert!(err.is_parse());
    }
}
