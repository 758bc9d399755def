//! Member scope selection and extraction options.

use crate::reflect::{MemberInfo, Visibility};

/// Default nesting limit for recursive extraction.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Which members an extraction enumerates.
///
/// Instance members are always included. A scope with neither visibility
/// flag set is accepted and matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MemberScope {
    pub include_public: bool,
    pub include_non_public: bool,
    pub include_static: bool,
}

impl MemberScope {
    /// Does `member` fall inside this scope?
    pub fn matches(&self, member: &MemberInfo) -> bool {
        let visible = match member.visibility {
            Visibility::Public => self.include_public,
            Visibility::NonPublic => self.include_non_public,
        };
        visible && (!member.is_static || self.include_static)
    }

    /// True when no visibility flag is set, so no member can match.
    pub fn is_empty(&self) -> bool {
        !self.include_public && !self.include_non_public
    }
}

impl Default for MemberScope {
    fn default() -> Self {
        ExtractOptions::default().scope()
    }
}

/// Build the scope for the given flags.
pub fn compute_scope(
    include_public: bool,
    include_non_public: bool,
    include_static: bool,
) -> MemberScope {
    MemberScope {
        include_public,
        include_non_public,
        include_static,
    }
}

/// Configuration shared by the extraction operations.
///
/// Defaults: public and non-public instance members, no statics, nesting
/// capped at [`DEFAULT_MAX_DEPTH`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    pub include_public: bool,
    pub include_non_public: bool,
    pub include_static: bool,
    /// Maximum nesting of composite members below the root object.
    pub max_depth: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            include_public: true,
            include_non_public: true,
            include_static: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ExtractOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_public(mut self, include: bool) -> Self {
        self.include_public = include;
        self
    }

    pub fn with_non_public(mut self, include: bool) -> Self {
        self.include_non_public = include;
        self
    }

    pub fn with_static(mut self, include: bool) -> Self {
        self.include_static = include;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn scope(&self) -> MemberScope {
        compute_scope(
            self.include_public,
            self.include_non_public,
            self.include_static,
        )
    }
}
