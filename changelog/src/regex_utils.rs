use crate::architecture::Architecture;
use crate::classifier::ArtifactTemplate;
use crate::error::ChangelogError;
use crate::types::Result;
use regex::Regex;

/// Alternation of all architecture tokens, as a capturing group
pub fn build_architecture_group(architectures: &[Architecture]) -> String {
    let tokens = architectures
        .iter()
        .map(|arch| regex::escape(arch.token()))
        .collect::<Vec<_>>()
        .join("|");
    format!("({tokens})")
}

/// Builds the anchored, case-insensitive file name pattern.
///
/// Template `i` owns capture groups `2i + 1` (whole file name) and `2i + 2`
/// (architecture token).
pub fn build_artifact_pattern(
    templates: &[ArtifactTemplate],
    architectures: &[Architecture],
) -> Result<Regex> {
    if templates.is_empty() || architectures.is_empty() {
        return Err(ChangelogError::Config(
            "artifact pattern needs at least one template and one architecture".to_string(),
        ));
    }

    let arch_group = build_architecture_group(architectures);
    let alternatives = templates
        .iter()
        .map(|template| {
            format!(
                r"({}-.*?{}-{arch_group}\.{})",
                regex::escape(template.prefix),
                regex::escape(template.infix.unwrap_or("")),
                regex::escape(template.extension),
            )
        })
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!("(?i)^(?:{alternatives})$")).map_err(ChangelogError::from)
}
