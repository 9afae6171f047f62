//! Proto type reference -> Ruby constant.

use crate::error::Result;
use crate::namespace::{Namespace, CONSTANT_SEPARATOR};
use crate::naming::to_camel_case;
use crate::registry::Registry;
use crate::select::GenerationRole;

#[derive(Debug, Clone, Copy)]
pub struct TypeResolver<'r, 'a> {
    registry: &'r Registry<'a>,
}

impl<'r, 'a> TypeResolver<'r, 'a> {
    pub fn new(registry: &'r Registry<'a>) -> Self {
        Self { registry }
    }

    /// Resolve a fully-qualified reference such as `.foo.my_message`.
    ///
    /// Types declared in a file generated by this run are left unqualified
    /// (the generated files are required side by side), everything else
    /// gets its module prefix:
    ///
    /// - `.foo.my_message` in a generated file -> `MyMessage`
    /// - `.google.protobuf.Empty` from a dependency -> `Google::Protobuf::Empty`
    /// - `.foo.Outer.Inner` from a dependency -> `Foo::Outer::Inner`
    pub fn resolve(&self, type_ref: &str) -> Result<String> {
        let def = self.registry.lookup(type_ref)?;

        let prefix = match self.registry.generation_role(def.file) {
            GenerationRole::Generate => String::new(),
            GenerationRole::DependencyOnly => {
                Namespace::for_file(self.registry.owning_file(def)).prefix()
            }
        };

        let name = self
            .registry
            .lineage(def)
            .iter()
            .map(|d| to_camel_case(&d.name))
            .collect::<Vec<_>>()
            .join(CONSTANT_SEPARATOR);

        let resolved = prefix + &name;
        tracing::trace!(type_ref, resolved = %resolved, "resolved type");
        Ok(resolved)
    }
}
