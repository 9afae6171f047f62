//! Type registry over the full descriptor graph.
//!
//! Every message and enum of every request file (generated or not) is
//! indexed by its fully-qualified protobuf name, the form used in method
//! signatures: `.package.Outer.Inner`, or `.Outer.Inner` without a package.

use std::collections::HashMap;

use crate::descriptor::{FileDescriptor, TypeDescriptor, TypeKind};
use crate::error::{GenerateError, Result};
use crate::select::{FileId, FileSelection, GenerationRole};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DefId(usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDefinition {
    /// `.package.Outer.Inner`
    pub full_name: String,
    /// Declared (unqualified) name, e.g. `Inner`.
    pub name: String,
    pub kind: TypeKind,
    /// Enclosing message for nested declarations.
    pub parent: Option<DefId>,
    pub file: FileId,
}

#[derive(Debug)]
pub struct Registry<'a> {
    files: &'a [FileDescriptor],
    selection: FileSelection,
    defs: Vec<MessageDefinition>,
    by_name: HashMap<String, DefId>,
}

impl<'a> Registry<'a> {
    /// Index all of `files`. Fails if two declarations share a name.
    pub fn build(files: &'a [FileDescriptor], selection: FileSelection) -> Result<Self> {
        let mut registry = Self {
            files,
            selection,
            defs: Vec::new(),
            by_name: HashMap::new(),
        };

        for (idx, file) in files.iter().enumerate() {
            let scope = package_scope(&file.package);
            for ty in &file.types {
                registry.index_type(FileId(idx), &scope, ty, None)?;
            }
        }

        tracing::debug!(
            files = files.len(),
            types = registry.defs.len(),
            "indexed descriptor graph"
        );
        Ok(registry)
    }

    fn index_type(
        &mut self,
        file: FileId,
        scope: &str,
        ty: &TypeDescriptor,
        parent: Option<DefId>,
    ) -> Result<()> {
        let full_name = format!("{scope}.{}", ty.name);
        let id = DefId(self.defs.len());
        if self.by_name.insert(full_name.clone(), id).is_some() {
            return Err(GenerateError::DuplicateType(full_name));
        }
        self.defs.push(MessageDefinition {
            full_name: full_name.clone(),
            name: ty.name.clone(),
            kind: ty.kind,
            parent,
            file,
        });

        for nested in &ty.nested {
            self.index_type(file, &full_name, nested, Some(id))?;
        }
        Ok(())
    }

    /// Exact lookup by fully-qualified name.
    pub fn lookup(&self, type_ref: &str) -> Result<&MessageDefinition> {
        self.by_name
            .get(type_ref)
            .map(|id| &self.defs[id.0])
            .ok_or_else(|| GenerateError::Lookup {
                type_name: type_ref.to_string(),
            })
    }

    /// Enclosing declarations from the outermost one down to `def` itself.
    pub fn lineage<'r>(&'r self, def: &'r MessageDefinition) -> Vec<&'r MessageDefinition> {
        let mut chain = vec![def];
        let mut next = def.parent;
        while let Some(id) = next {
            let parent = &self.defs[id.0];
            chain.push(parent);
            next = parent.parent;
        }
        chain.reverse();
        chain
    }

    pub fn owning_file(&self, def: &MessageDefinition) -> &'a FileDescriptor {
        self.file(def.file)
    }

    pub fn file(&self, id: FileId) -> &'a FileDescriptor {
        &self.files[id.0]
    }

    pub fn generation_role(&self, file: FileId) -> GenerationRole {
        self.selection.role(file)
    }

    pub fn selection(&self) -> &FileSelection {
        &self.selection
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

fn package_scope(package: &str) -> String {
    if package.is_empty() {
        String::new()
    } else {
        format!(".{package}")
    }
}
