//! Partition request files into "generate" and "dependency-only".

use crate::descriptor::FileDescriptor;
use crate::error::{GenerateError, Result};

/// Stable handle for a file: its index in the request's file list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationRole {
    /// Explicitly requested: produces an output file.
    Generate,
    /// Only present so its types can be resolved.
    DependencyOnly,
}

#[derive(Debug, Clone)]
pub struct FileSelection {
    generate: Vec<FileId>,
    roles: Vec<GenerationRole>,
}

impl FileSelection {
    /// Files to emit, in the order they were requested.
    pub fn generate(&self) -> &[FileId] {
        &self.generate
    }

    pub fn role(&self, file: FileId) -> GenerationRole {
        self.roles
            .get(file.0)
            .copied()
            .unwrap_or(GenerationRole::DependencyOnly)
    }
}

/// Match the requested names against the request's files.
///
/// Requesting the same file twice selects it once. An empty request list, or
/// a name that is not among `files`, is an input error.
pub fn select_files(files: &[FileDescriptor], requested: &[String]) -> Result<FileSelection> {
    if requested.is_empty() {
        return Err(GenerateError::NoFilesToGenerate);
    }

    let mut roles = vec![GenerationRole::DependencyOnly; files.len()];
    let mut generate = Vec::with_capacity(requested.len());

    for name in requested {
        let Some(idx) = files.iter().position(|f| &f.name == name) else {
            return Err(GenerateError::UnknownFileToGenerate(name.clone()));
        };
        if roles[idx] == GenerationRole::Generate {
            continue;
        }
        roles[idx] = GenerationRole::Generate;
        generate.push(FileId(idx));
    }

    Ok(FileSelection { generate, roles })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> FileDescriptor {
        FileDescriptor {
            name: name.to_string(),
            ..Default::default()
        }
    }

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn keeps_request_order_and_collapses_duplicates() {
        let files = vec![file("a.proto"), file("b.proto"), file("c.proto")];
        let sel = select_files(&files, &names(&["c.proto", "a.proto", "c.proto"])).unwrap();

        assert_eq!(sel.generate(), &[FileId(2), FileId(0)]);
        assert_eq!(sel.role(FileId(0)), GenerationRole::Generate);
        assert_eq!(sel.role(FileId(1)), GenerationRole::DependencyOnly);
        assert_eq!(sel.role(FileId(2)), GenerationRole::Generate);
    }

    #[test]
    fn empty_request_is_rejected() {
        let err = select_files(&[file("a.proto")], &[]).unwrap_err();
        assert!(matches!(err, GenerateError::NoFilesToGenerate));
    }

    #[test]
    fn unknown_file_is_rejected() {
        let err = select_files(&[file("a.proto")], &names(&["missing.proto"])).unwrap_err();
        assert!(err.to_string().contains("missing.proto"), "err={err}");
    }
}
