use std::path::Path;

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use super::rule_sets::{
    CategoryRuleSet, DATA_RULES, OUTPUTS_RULES, PROVIDERS_RULES, RESOURCES_RULES,
    VARIABLES_RULES,
};

/// The file categories of a stack, one per conventional file name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumString,
    IntoStaticStr,
    EnumIter,
)]
#[strum(serialize_all = "lowercase")]
pub enum Category {
    Data,
    Outputs,
    Providers,
    Resources,
    Variables,
}

impl Category {
    pub const fn file_name(&self) -> &'static str {
        match self {
            Category::Data => "data.tf",
            Category::Outputs => "outputs.tf",
            Category::Providers => "providers.tf",
            Category::Resources => "resources.tf",
            Category::Variables => "variables.tf",
        }
    }

    /// Exact, case-sensitive match on the file's base name.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        Category::iter().find(|category| category.file_name() == file_name)
    }

    pub fn rule_set(&self) -> &'static CategoryRuleSet {
        match self {
            Category::Data => &DATA_RULES,
            Category::Outputs => &OUTPUTS_RULES,
            Category::Providers => &PROVIDERS_RULES,
            Category::Resources => &RESOURCES_RULES,
            Category::Variables => &VARIABLES_RULES,
        }
    }
}

/// Categories whose rules apply to `file_name`, in the order they run.
///
/// Files outside the naming table get no category rules; the name policy
/// still applies to them.
pub fn classify(file_name: &str) -> Vec<Category> {
    Category::from_file_name(file_name).into_iter().collect()
}

/// Only regular files with a `.tf` extension are linted.
pub fn is_lintable(file_name: &str, is_dir: bool) -> bool {
    !is_dir && Path::new(file_name).extension().map_or(false, |ext| ext == "tf")
}
