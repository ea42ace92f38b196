//! Type-safe identification of lint rules

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

use super::Category;

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
#[strum(serialize_all = "snake_case")]
pub enum RuleId {
    /// Declared names follow the name policy
    Names,
    /// `data.tf` only holds data sources
    Data,
    /// `outputs.tf` only holds outputs
    Outputs,
    /// `providers.tf` holds the terraform block and provider configs
    Providers,
    /// `resources.tf` holds managed resources, modules and locals
    Resources,
    /// `variables.tf` holds variables without blank defaults
    Variables,
    /// Every variable in the stack is referenced somewhere
    UnusedVariables,
}

impl RuleId {
    pub const fn description(&self) -> &'static str {
        use RuleId::*;
        match self {
            Names => "Checks every declared name against the name policy",
            Data => "Ensures data.tf only contains data sources",
            Outputs => "Ensures outputs.tf only contains outputs",
            Providers => "Ensures providers.tf contains the terraform block and provider configs",
            Resources => "Ensures resources.tf only contains resources, modules and locals",
            Variables => "Ensures variables.tf only contains variables without blank defaults",
            UnusedVariables => "Reports variables that nothing in the stack references",
        }
    }

    /// Whether the rule runs once per file rather than once per directory.
    pub const fn is_per_file(&self) -> bool {
        !matches!(self, RuleId::UnusedVariables)
    }
}

impl From<Category> for RuleId {
    fn from(category: Category) -> Self {
        match category {
            Category::Data => RuleId::Data,
            Category::Outputs => RuleId::Outputs,
            Category::Providers => RuleId::Providers,
            Category::Resources => RuleId::Resources,
            Category::Variables => RuleId::Variables,
        }
    }
}
