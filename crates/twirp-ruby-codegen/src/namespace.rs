//! Ruby module nesting for a proto file.
//!
//! A file's modules come from `option ruby_package` when present
//! (`"Foo::Bar"`), otherwise from its dotted package (`foo.bar`). Each
//! segment is camel-cased to make it a valid constant.

use crate::descriptor::FileDescriptor;
use crate::naming::to_camel_case;
use crate::writer::{Depth, RubyWriter};

/// Separator between Ruby constants, for both modules and nested types.
pub const CONSTANT_SEPARATOR: &str = "::";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Namespace {
    segments: Vec<String>,
}

impl Namespace {
    pub fn for_file(file: &FileDescriptor) -> Self {
        match &file.ruby_package {
            Some(ruby_package) => Self::from_parts(ruby_package.split(CONSTANT_SEPARATOR)),
            None => Self::from_package(&file.package),
        }
    }

    /// `my.cool.package` -> `My::Cool::Package`; an empty package has no
    /// modules.
    pub fn from_package(package: &str) -> Self {
        Self::from_parts(package.split('.'))
    }

    fn from_parts<'s>(parts: impl Iterator<Item = &'s str>) -> Self {
        Self {
            segments: parts
                .filter(|p| !p.is_empty())
                .map(to_camel_case)
                .collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// `Foo::Bar::`, or the empty string at top level.
    pub fn prefix(&self) -> String {
        self.segments
            .iter()
            .map(|s| format!("{s}{CONSTANT_SEPARATOR}"))
            .collect()
    }

    /// Emit one `module` line per segment, each one level deeper than the
    /// last. Returns the depth for the enclosed code.
    pub fn open(&self, out: &mut RubyWriter, mut depth: Depth) -> Depth {
        for segment in &self.segments {
            out.line(depth, format_args!("module {segment}"));
            depth = depth.deeper();
        }
        depth
    }

    /// Close what [`Namespace::open`] opened. Given the depth `open`
    /// returned, this returns the depth `open` started from.
    pub fn close(&self, out: &mut RubyWriter, mut depth: Depth) -> Depth {
        for _ in self.segments.iter().rev() {
            depth = depth.shallower();
            out.line(depth, "end");
        }
        depth
    }
}
