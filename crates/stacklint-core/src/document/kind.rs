use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// The kinds of top-level declaration a stack file can hold.
///
/// `Data` and `Resource` share one collection in a [`super::Document`] and are
/// told apart by [`ResourceMode`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,      // Provides as_ref() -> &str
    Display,       // Provides to_string()
    EnumString,    // Provides from_str()
    IntoStaticStr, // Provides into() -> &'static str
    EnumIter,      // Provides iter() over all variants
)]
#[strum(serialize_all = "lowercase")]
pub enum DeclarationKind {
    Data,
    Local,
    Module,
    Output,
    Provider,
    Resource,
    Terraform,
    Variable,
}

impl DeclarationKind {
    /// Stem of the file this kind of declaration belongs in.
    pub const fn destination(&self) -> &'static str {
        use DeclarationKind::*;
        match self {
            Data => "data",
            Local | Module | Resource => "resources",
            Output => "outputs",
            Provider | Terraform => "providers",
            Variable => "variables",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ResourceMode {
    Managed,
    Data,
}

impl ResourceMode {
    /// Label used in name-policy messages.
    pub const fn label(&self) -> &'static str {
        match self {
            ResourceMode::Managed => "resource",
            ResourceMode::Data => "data",
        }
    }

    pub const fn kind(&self) -> DeclarationKind {
        match self {
            ResourceMode::Managed => DeclarationKind::Resource,
            ResourceMode::Data => DeclarationKind::Data,
        }
    }
}
