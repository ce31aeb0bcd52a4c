//! Template file processing: argument pairing, reading and writing.

use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use classgen_core::{ClassHierarchy, ClassgenError, ClassgenResult};

use crate::template::expand_template;

/// Default substring that excludes a template from processing.
pub const DEFAULT_EXCLUDE_MARKER: &str = "external";

/// Options for a batch of template files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandConfig {
    /// Templates whose path contains this substring are skipped. Empty disables exclusion.
    pub exclude_marker: String,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self {
            exclude_marker: DEFAULT_EXCLUDE_MARKER.to_string(),
        }
    }
}

impl ExpandConfig {
    pub fn is_excluded(&self, template: &Path) -> bool {
        !self.exclude_marker.is_empty()
            && template
                .to_string_lossy()
                .contains(self.exclude_marker.as_str())
    }
}

/// A rendered output file.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedFile {
    pub template: PathBuf,
    pub output: PathBuf,
    pub content: String,
    pub directive_count: usize,
}

/// Split a positional argument list into templates and outputs.
///
/// The first half (rounded down) are templates, the rest are outputs.
pub fn split_arguments<T>(args: &[T]) -> (&[T], &[T]) {
    args.split_at(args.len() / 2)
}

/// Pair each processed template with the next unused output path.
///
/// Excluded templates are skipped without consuming an output. Fails before
/// any file is touched when outputs run out.
pub fn pair_files<'a>(
    templates: &'a [PathBuf],
    outputs: &'a [PathBuf],
    config: &ExpandConfig,
) -> ClassgenResult<Vec<(&'a Path, &'a Path)>> {
    let mut remaining = outputs.iter();
    let mut pairs = Vec::new();

    for template in templates {
        if config.is_excluded(template) {
            debug!(
                template = %template.display(),
                marker = %config.exclude_marker,
                "Skipping excluded template"
            );
            continue;
        }

        let output = remaining
            .next()
            .ok_or_else(|| ClassgenError::MissingOutput(template.display().to_string()))?;
        pairs.push((template.as_path(), output.as_path()));
    }

    let unused = remaining.count();
    if unused > 0 {
        debug!(unused, "Output paths left without a template");
    }

    Ok(pairs)
}

/// Read a template, dropping bytes that are not valid UTF-8.
pub fn read_template(path: &Path) -> ClassgenResult<String> {
    let bytes = std::fs::read(path)?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            warn!(
                template = %path.display(),
                "Template is not valid UTF-8, dropping undecodable bytes"
            );
            Ok(err.as_bytes().utf8_chunks().map(|chunk| chunk.valid()).collect())
        }
    }
}

/// Expand a single template into its output.
pub fn expand_file(
    hierarchy: &ClassHierarchy,
    template: &Path,
    output: &Path,
) -> ClassgenResult<GeneratedFile> {
    let source = read_template(template)?;
    let expansion = expand_template(hierarchy, &template.display().to_string(), &source)?;

    info!(
        template = %template.display(),
        output = %output.display(),
        directives = expansion.directive_count,
        "Expanded template"
    );

    Ok(GeneratedFile {
        template: template.to_path_buf(),
        output: output.to_path_buf(),
        content: expansion.content,
        directive_count: expansion.directive_count,
    })
}

/// Expand all templates, paired with outputs as by [`pair_files`].
pub fn expand_files(
    hierarchy: &ClassHierarchy,
    templates: &[PathBuf],
    outputs: &[PathBuf],
    config: &ExpandConfig,
) -> ClassgenResult<Vec<GeneratedFile>> {
    pair_files(templates, outputs, config)?
        .into_iter()
        .map(|(template, output)| expand_file(hierarchy, template, output))
        .collect()
}

/// Write generated files to disk, creating parent directories.
pub fn write_generated(files: &[GeneratedFile]) -> ClassgenResult<Vec<String>> {
    let mut written = Vec::new();

    for file in files {
        if let Some(parent) = file.output.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&file.output, &file.content)?;
        written.push(file.output.display().to_string());
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use classgen_core::ClassInfo;

    fn paths(items: &[&str]) -> Vec<PathBuf> {
        items.iter().map(PathBuf::from).collect()
    }

    fn hierarchy() -> ClassHierarchy {
        [
            ClassInfo::new("Kernel", "shogun/kernel/Kernel.h")
                .with_subclasses(["GaussianKernel", "LinearKernel"]),
            ClassInfo::new("GaussianKernel", "shogun/kernel/GaussianKernel.h"),
            ClassInfo::new("LinearKernel", "shogun/kernel/LinearKernel.h"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_split_arguments() {
        let args = ["a.in", "b.in", "a.out", "b.out"];
        assert_eq!(split_arguments(&args), (&args[..2], &args[2..]));

        // Odd counts give the extra argument to the outputs.
        let args = ["a.in", "a.out", "extra"];
        assert_eq!(split_arguments(&args), (&args[..1], &args[1..]));

        let empty: [&str; 0] = [];
        assert_eq!(split_arguments(&empty).0.len(), 0);
    }

    #[test]
    fn test_excluded_template_does_not_consume_output() {
        let templates = paths(&["src/a.in", "src/external/b.in", "src/c.in"]);
        let outputs = paths(&["out/a", "out/c", "out/unused"]);

        let pairs = pair_files(&templates, &outputs, &ExpandConfig::default()).unwrap();
        assert_eq!(
            pairs,
            vec![
                (Path::new("src/a.in"), Path::new("out/a")),
                (Path::new("src/c.in"), Path::new("out/c")),
            ]
        );
    }

    #[test]
    fn test_empty_marker_disables_exclusion() {
        let config = ExpandConfig { exclude_marker: String::new() };
        assert!(!config.is_excluded(Path::new("src/external/b.in")));
        assert!(ExpandConfig::default().is_excluded(Path::new("src/external/b.in")));
    }

    #[test]
    fn test_missing_output_is_fatal() {
        let templates = paths(&["a.in", "b.in"]);
        let outputs = paths(&["a.out"]);

        let err = pair_files(&templates, &outputs, &ExpandConfig::default()).unwrap_err();
        assert!(matches!(err, ClassgenError::MissingOutput(ref t) if t == "b.in"));
    }

    #[test]
    fn test_read_template_drops_invalid_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.h.in");
        std::fs::write(&path, b"caf\xe9 %subclasses_of(Kernel)\n").unwrap();

        assert_eq!(read_template(&path).unwrap(), "caf %subclasses_of(Kernel)\n");
    }

    #[test]
    fn test_read_missing_template_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_template(&dir.path().join("absent.in")).unwrap_err();
        assert!(matches!(err, ClassgenError::Io(_)));
    }

    #[test]
    fn test_expand_and_write_files() {
        let dir = tempfile::tempdir().unwrap();
        let template = dir.path().join("kernels.h.in");
        let skipped = dir.path().join("external").join("vendor.h.in");
        let output = dir.path().join("gen").join("kernels.h");
        std::fs::write(
            &template,
            "%include_subclasses_of(Kernel)\nusing Kernels = List<%subclasses_of(Kernel)>;\n",
        )
        .unwrap();

        let templates = vec![template.clone(), skipped];
        let outputs = vec![output.clone()];
        let generated =
            expand_files(&hierarchy(), &templates, &outputs, &ExpandConfig::default()).unwrap();

        assert_eq!(generated.len(), 1);
        assert_eq!(generated[0].template, template);
        assert_eq!(generated[0].directive_count, 2);

        let written = write_generated(&generated).unwrap();
        assert_eq!(written, vec![output.display().to_string()]);
        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "#include <shogun/kernel/GaussianKernel.h>\n\
             #include <shogun/kernel/LinearKernel.h>\n\
             using Kernels = List<GaussianKernel,LinearKernel>;\n"
        );
    }
}
