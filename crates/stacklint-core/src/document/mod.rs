//! Parsed representation of one stack file, or of a whole stack directory.
//!
//! Documents are produced by [`crate::loader`] and only ever read by the rules.

mod kind;
mod reference;

pub use kind::{DeclarationKind, ResourceMode};
pub use reference::{Reference, ReferenceKind};

/// References found in the expressions of one declaration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawConfig {
    pub references: Vec<Reference>,
}

impl RawConfig {
    pub fn new(references: Vec<Reference>) -> Self {
        Self { references }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub name: String,
    pub type_name: String,
    pub mode: ResourceMode,
    pub raw_config: RawConfig,
    /// References made by the `count` attribute only.
    pub raw_count: RawConfig,
}

impl Resource {
    /// `aws_instance.web` or `data.aws_ami.ubuntu`
    pub fn id(&self) -> String {
        match self.mode {
            ResourceMode::Managed => format!("{}.{}", self.type_name, self.name),
            ResourceMode::Data => format!("data.{}.{}", self.type_name, self.name),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub name: String,
    pub source: Option<String>,
    pub raw_config: RawConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Local {
    pub name: String,
    pub raw_config: RawConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Output {
    pub name: String,
    pub raw_config: RawConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProviderConfig {
    pub name: String,
    pub alias: Option<String>,
    pub raw_config: RawConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    pub description: Option<String>,
    pub default: Option<serde_json::Value>,
}

impl Variable {
    /// True when the default is a string with nothing in it.
    pub fn has_blank_default(&self) -> bool {
        matches!(&self.default, Some(serde_json::Value::String(value)) if value.is_empty())
    }
}

/// The root `terraform { ... }` settings block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TerraformSettings {
    pub required_version: Option<String>,
    /// Type label of the `backend` block, e.g. `s3`.
    pub backend: Option<String>,
    pub required_providers: Vec<String>,
}

impl TerraformSettings {
    fn absorb(&mut self, other: TerraformSettings) {
        if self.required_version.is_none() {
            self.required_version = other.required_version;
        }
        if self.backend.is_none() {
            self.backend = other.backend;
        }
        for provider in other.required_providers {
            if !self.required_providers.contains(&provider) {
                self.required_providers.push(provider);
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub terraform: Option<TerraformSettings>,
    pub provider_configs: Vec<ProviderConfig>,
    pub resources: Vec<Resource>,
    pub modules: Vec<Module>,
    pub locals: Vec<Local>,
    pub outputs: Vec<Output>,
    pub variables: Vec<Variable>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.terraform.is_none()
            && self.provider_configs.is_empty()
            && self.resources.is_empty()
            && self.modules.is_empty()
            && self.locals.is_empty()
            && self.outputs.is_empty()
            && self.variables.is_empty()
    }

    pub fn data_resources(&self) -> impl Iterator<Item = &Resource> {
        self.resources.iter().filter(|r| r.mode == ResourceMode::Data)
    }

    pub fn managed_resources(&self) -> impl Iterator<Item = &Resource> {
        self.resources.iter().filter(|r| r.mode == ResourceMode::Managed)
    }

    /// Whether at least one declaration of `kind` is present.
    ///
    /// Data sources and managed resources live in the same collection, so
    /// those two kinds are answered by filtering on the resource mode.
    pub fn declares(&self, kind: DeclarationKind) -> bool {
        use DeclarationKind::*;
        match kind {
            Data => self.data_resources().next().is_some(),
            Resource => self.managed_resources().next().is_some(),
            Local => !self.locals.is_empty(),
            Module => !self.modules.is_empty(),
            Output => !self.outputs.is_empty(),
            Provider => !self.provider_configs.is_empty(),
            Terraform => self.terraform.is_some(),
            Variable => !self.variables.is_empty(),
        }
    }

    /// Appends every declaration of `other` after the ones already held.
    pub fn merge(&mut self, other: Document) {
        if let Some(incoming) = other.terraform {
            match self.terraform.as_mut() {
                Some(current) => current.absorb(incoming),
                None => self.terraform = Some(incoming),
            }
        }
        self.provider_configs.extend(other.provider_configs);
        self.resources.extend(other.resources);
        self.modules.extend(other.modules);
        self.locals.extend(other.locals);
        self.outputs.extend(other.outputs);
        self.variables.extend(other.variables);
    }
}
