use crate::document::{DeclarationKind, Document, ResourceMode};
use crate::error::Violation;

use super::shape::should_not_contain;
use super::{Category, RuleFn};

/// Something a category's file must hold at least one of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredContent {
    AnyDataSource,
    AnyOutput,
    TerraformBlock,
    AnyProvider,
    AnyResourceModuleOrLocal,
    AnyVariable,
}

impl RequiredContent {
    pub fn check(&self, doc: &Document) -> Result<(), Violation> {
        use RequiredContent::*;
        let satisfied = match self {
            AnyDataSource => doc.declares(DeclarationKind::Data),
            AnyOutput => doc.declares(DeclarationKind::Output),
            // An empty `terraform {}` block still counts as present.
            TerraformBlock => doc.declares(DeclarationKind::Terraform),
            AnyProvider => doc.declares(DeclarationKind::Provider),
            AnyResourceModuleOrLocal => {
                doc.declares(DeclarationKind::Resource)
                    || doc.declares(DeclarationKind::Module)
                    || doc.declares(DeclarationKind::Local)
            }
            AnyVariable => doc.declares(DeclarationKind::Variable),
        };
        if satisfied {
            Ok(())
        } else {
            Err(Violation::ContentMissing { requirement: *self })
        }
    }

    pub const fn missing_message(&self) -> &'static str {
        use RequiredContent::*;
        match self {
            AnyDataSource => {
                "contains no data resources, either remove the file or add some data resources"
            }
            AnyOutput => "no outputs found, either add some or remove the file",
            TerraformBlock => {
                "contains no terraform resource, either remove the file or add a terraform resource"
            }
            AnyProvider => {
                "contains no provider resources, if other resources exist add one or remove the file"
            }
            AnyResourceModuleOrLocal => {
                "contains no resources, modules or locals. Either remove the file or add some resources/modules/locals"
            }
            AnyVariable => "no variables found, either add some or remove the file",
        }
    }
}

/// The conventions one file category is held to.
///
/// Checks run in field order: forbidden kinds, then required content, then
/// the per-declaration value checks. The first failure wins.
pub struct CategoryRuleSet {
    pub category: Category,
    pub forbidden: &'static [DeclarationKind],
    pub required: &'static [RequiredContent],
    pub value_checks: &'static [RuleFn],
}

impl CategoryRuleSet {
    pub fn check(&self, doc: &Document) -> Result<(), Violation> {
        should_not_contain(doc, self.forbidden)?;
        for requirement in self.required {
            requirement.check(doc)?;
        }
        for value_check in self.value_checks {
            value_check(doc)?;
        }
        Ok(())
    }
}

pub static DATA_RULES: CategoryRuleSet = CategoryRuleSet {
    category: Category::Data,
    forbidden: &[
        DeclarationKind::Local,
        DeclarationKind::Module,
        DeclarationKind::Output,
        DeclarationKind::Provider,
        DeclarationKind::Resource,
        DeclarationKind::Terraform,
        DeclarationKind::Variable,
    ],
    required: &[RequiredContent::AnyDataSource],
    value_checks: &[only_data_sources],
};

pub static OUTPUTS_RULES: CategoryRuleSet = CategoryRuleSet {
    category: Category::Outputs,
    forbidden: &[
        DeclarationKind::Data,
        DeclarationKind::Local,
        DeclarationKind::Module,
        DeclarationKind::Provider,
        DeclarationKind::Resource,
        DeclarationKind::Terraform,
        DeclarationKind::Variable,
    ],
    required: &[RequiredContent::AnyOutput],
    value_checks: &[],
};

pub static PROVIDERS_RULES: CategoryRuleSet = CategoryRuleSet {
    category: Category::Providers,
    forbidden: &[
        DeclarationKind::Data,
        DeclarationKind::Local,
        DeclarationKind::Module,
        DeclarationKind::Output,
        DeclarationKind::Resource,
        DeclarationKind::Variable,
    ],
    required: &[RequiredContent::TerraformBlock, RequiredContent::AnyProvider],
    value_checks: &[],
};

pub static RESOURCES_RULES: CategoryRuleSet = CategoryRuleSet {
    category: Category::Resources,
    forbidden: &[
        DeclarationKind::Data,
        DeclarationKind::Output,
        DeclarationKind::Provider,
        DeclarationKind::Terraform,
        DeclarationKind::Variable,
    ],
    required: &[RequiredContent::AnyResourceModuleOrLocal],
    value_checks: &[no_data_sources],
};

pub static VARIABLES_RULES: CategoryRuleSet = CategoryRuleSet {
    category: Category::Variables,
    forbidden: &[
        DeclarationKind::Data,
        DeclarationKind::Local,
        DeclarationKind::Module,
        DeclarationKind::Output,
        DeclarationKind::Provider,
        DeclarationKind::Resource,
        DeclarationKind::Terraform,
    ],
    required: &[RequiredContent::AnyVariable],
    value_checks: &[no_blank_defaults],
};

fn only_data_sources(doc: &Document) -> Result<(), Violation> {
    if doc.managed_resources().next().is_some() {
        return Err(Violation::ModeMismatch { expected: ResourceMode::Data });
    }
    Ok(())
}

fn no_data_sources(doc: &Document) -> Result<(), Violation> {
    if doc.data_resources().next().is_some() {
        return Err(Violation::ModeMismatch { expected: ResourceMode::Managed });
    }
    Ok(())
}

fn no_blank_defaults(doc: &Document) -> Result<(), Violation> {
    match doc.variables.iter().find(|v| v.has_blank_default()) {
        Some(variable) => Err(Violation::BlankDefault { variable: variable.name.clone() }),
        None => Ok(()),
    }
}

pub fn lint_data(doc: &Document) -> Result<(), Violation> {
    DATA_RULES.check(doc)
}

pub fn lint_outputs(doc: &Document) -> Result<(), Violation> {
    OUTPUTS_RULES.check(doc)
}

pub fn lint_providers(doc: &Document) -> Result<(), Violation> {
    PROVIDERS_RULES.check(doc)
}

pub fn lint_resources(doc: &Document) -> Result<(), Violation> {
    RESOURCES_RULES.check(doc)
}

pub fn lint_variables(doc: &Document) -> Result<(), Violation> {
    VARIABLES_RULES.check(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{
        Local, Module, Output, ProviderConfig, RawConfig, Resource, TerraformSettings, Variable,
    };
    use serde_json::json;
    use test_case::test_case;

    fn resource(name: &str, mode: ResourceMode) -> Resource {
        Resource {
            name: name.to_string(),
            type_name: "aws_instance".to_string(),
            mode,
            raw_config: RawConfig::default(),
            raw_count: RawConfig::default(),
        }
    }

    fn variable(name: &str, default: Option<serde_json::Value>) -> Variable {
        Variable { name: name.to_string(), description: None, default }
    }

    fn provider(name: &str) -> ProviderConfig {
        ProviderConfig { name: name.to_string(), alias: None, raw_config: RawConfig::default() }
    }

    fn with_data() -> Document {
        let mut doc = Document::new();
        doc.resources.push(resource("ubuntu", ResourceMode::Data));
        doc
    }

    fn with_managed() -> Document {
        let mut doc = Document::new();
        doc.resources.push(resource("web", ResourceMode::Managed));
        doc
    }

    fn with_output() -> Document {
        let mut doc = Document::new();
        doc.outputs.push(Output { name: "id".into(), raw_config: RawConfig::default() });
        doc
    }

    fn with_variable() -> Document {
        let mut doc = Document::new();
        doc.variables.push(variable("region", None));
        doc
    }

    fn with_local() -> Document {
        let mut doc = Document::new();
        doc.locals.push(Local { name: "tags".into(), raw_config: RawConfig::default() });
        doc
    }

    fn with_module() -> Document {
        let mut doc = Document::new();
        doc.modules.push(Module {
            name: "network".into(),
            source: Some("./network".into()),
            raw_config: RawConfig::default(),
        });
        doc
    }

    fn with_providers() -> Document {
        let mut doc = Document::new();
        doc.terraform = Some(TerraformSettings::default());
        doc.provider_configs.push(provider("aws"));
        doc
    }

    #[test_case(lint_data, with_data() ; "data file with a data source")]
    #[test_case(lint_outputs, with_output() ; "outputs file with an output")]
    #[test_case(lint_providers, with_providers() ; "providers file with terraform and provider")]
    #[test_case(lint_resources, with_managed() ; "resources file with a resource")]
    #[test_case(lint_resources, with_module() ; "resources file with only a module")]
    #[test_case(lint_resources, with_local() ; "resources file with only a local")]
    #[test_case(lint_variables, with_variable() ; "variables file with a variable")]
    fn test_conforming_documents_pass(rule: RuleFn, doc: Document) {
        assert_eq!(rule(&doc), Ok(()));
    }

    #[test_case(lint_data, RequiredContent::AnyDataSource)]
    #[test_case(lint_outputs, RequiredContent::AnyOutput)]
    #[test_case(lint_providers, RequiredContent::TerraformBlock)]
    #[test_case(lint_resources, RequiredContent::AnyResourceModuleOrLocal)]
    #[test_case(lint_variables, RequiredContent::AnyVariable)]
    fn test_empty_document_is_missing_content(rule: RuleFn, requirement: RequiredContent) {
        assert_eq!(rule(&Document::new()), Err(Violation::ContentMissing { requirement }));
    }

    #[test_case(lint_data, with_managed(), DeclarationKind::Resource)]
    #[test_case(lint_data, with_variable(), DeclarationKind::Variable)]
    #[test_case(lint_outputs, with_data(), DeclarationKind::Data)]
    #[test_case(lint_outputs, with_module(), DeclarationKind::Module)]
    #[test_case(lint_providers, with_local(), DeclarationKind::Local)]
    #[test_case(lint_providers, with_output(), DeclarationKind::Output)]
    #[test_case(lint_resources, with_data(), DeclarationKind::Data)]
    #[test_case(lint_resources, with_providers(), DeclarationKind::Provider)]
    #[test_case(lint_variables, with_managed(), DeclarationKind::Resource)]
    #[test_case(lint_variables, with_output(), DeclarationKind::Output)]
    fn test_forbidden_kinds_are_reported(rule: RuleFn, doc: Document, kind: DeclarationKind) {
        assert_eq!(rule(&doc), Err(Violation::shape(kind)));
    }

    #[test]
    fn test_managed_resource_in_data_file_names_destination() {
        let err = lint_data(&with_managed()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "should not contain any resource resource(s), please move to 'resources.tf'"
        );
    }

    #[test]
    fn test_providers_requires_a_provider_after_terraform() {
        let mut doc = Document::new();
        doc.terraform = Some(TerraformSettings::default());
        assert_eq!(
            lint_providers(&doc),
            Err(Violation::ContentMissing { requirement: RequiredContent::AnyProvider })
        );

        let mut doc = Document::new();
        doc.provider_configs.push(provider("aws"));
        assert_eq!(
            lint_providers(&doc),
            Err(Violation::ContentMissing { requirement: RequiredContent::TerraformBlock })
        );
    }

    #[test]
    fn test_empty_outputs_message() {
        let err = lint_outputs(&Document::new()).unwrap_err();
        assert_eq!(err.to_string(), "no outputs found, either add some or remove the file");
    }

    #[test]
    fn test_blank_default_names_first_offender() {
        let mut doc = Document::new();
        doc.variables.push(variable("region", Some(json!("eu-west-1"))));
        doc.variables.push(variable("zone", Some(json!(""))));
        doc.variables.push(variable("tier", Some(json!(""))));

        assert_eq!(
            lint_variables(&doc),
            Err(Violation::BlankDefault { variable: "zone".to_string() })
        );
    }

    #[test_case(json!(null) ; "null default")]
    #[test_case(json!(0) ; "numeric default")]
    #[test_case(json!(false) ; "bool default")]
    #[test_case(json!([]) ; "empty list default")]
    #[test_case(json!({}) ; "empty map default")]
    fn test_only_empty_strings_are_blank(default: serde_json::Value) {
        let mut doc = Document::new();
        doc.variables.push(variable("region", Some(default)));
        assert_eq!(lint_variables(&doc), Ok(()));
    }

    #[test]
    fn test_mode_checks_reject_mixed_collections() {
        assert_eq!(
            only_data_sources(&with_managed()),
            Err(Violation::ModeMismatch { expected: ResourceMode::Data })
        );
        assert_eq!(
            no_data_sources(&with_data()),
            Err(Violation::ModeMismatch { expected: ResourceMode::Managed })
        );
        assert_eq!(only_data_sources(&Document::new()), Ok(()));
    }

    #[test]
    fn test_rules_are_idempotent() {
        let doc = with_data();
        assert_eq!(lint_resources(&doc), lint_resources(&doc));
        assert_eq!(lint_data(&doc), lint_data(&doc));
    }
}
