//! Decoding of top-level blocks into document declarations.

use hcl_edit::structure::{Block, BlockLabel, Body, Structure};
use thiserror::Error;

use super::references::ReferenceCollector;
use super::values::{literal_string, literal_value};
use crate::document::{
    Document, Local, Module, Output, ProviderConfig, Resource, ResourceMode, TerraformSettings,
    Variable,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockError {
    #[error("{block} block expects {expected} label(s), found {found}")]
    LabelCount {
        block: String,
        expected: usize,
        found: usize,
    },

    #[error("unsupported block type '{0}'")]
    UnknownBlock(String),

    #[error("unexpected top-level attribute '{0}'")]
    UnexpectedAttribute(String),

    #[error("invalid {attribute} for {block} '{name}': {reason}")]
    InvalidValue {
        block: &'static str,
        name: String,
        attribute: &'static str,
        reason: String,
    },
}

/// Top-level block types of a stack file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockType {
    Resource,
    Data,
    Module,
    Output,
    Variable,
    Provider,
    Terraform,
    Locals,
    Unknown,
}

impl BlockType {
    fn from_str(s: &str) -> Self {
        match s {
            "resource" => Self::Resource,
            "data" => Self::Data,
            "module" => Self::Module,
            "output" => Self::Output,
            "variable" => Self::Variable,
            "provider" => Self::Provider,
            "terraform" => Self::Terraform,
            "locals" => Self::Locals,
            _ => Self::Unknown,
        }
    }
}

pub fn decode_body(body: &Body) -> Result<Document, BlockError> {
    let mut doc = Document::new();
    for structure in body.iter() {
        match structure {
            Structure::Attribute(attr) => {
                return Err(BlockError::UnexpectedAttribute(attr.key.as_str().to_string()))
            }
            Structure::Block(block) => decode_block(block, &mut doc)?,
        }
    }
    Ok(doc)
}

fn decode_block(block: &Block, doc: &mut Document) -> Result<(), BlockError> {
    match BlockType::from_str(block.ident.as_str()) {
        BlockType::Resource => doc.resources.push(decode_resource(block, ResourceMode::Managed)?),
        BlockType::Data => doc.resources.push(decode_resource(block, ResourceMode::Data)?),
        BlockType::Module => doc.modules.push(decode_module(block)?),
        BlockType::Output => doc.outputs.push(decode_output(block)?),
        BlockType::Variable => doc.variables.push(decode_variable(block)?),
        BlockType::Provider => doc.provider_configs.push(decode_provider(block)?),
        BlockType::Terraform => {
            let mut fragment = Document::new();
            fragment.terraform = Some(decode_terraform(block)?);
            doc.merge(fragment);
        }
        BlockType::Locals => doc.locals.extend(decode_locals(block)?),
        BlockType::Unknown => {
            return Err(BlockError::UnknownBlock(block.ident.as_str().to_string()))
        }
    }
    Ok(())
}

fn label_str(label: &BlockLabel) -> &str {
    match label {
        BlockLabel::String(s) => s.value().as_str(),
        BlockLabel::Ident(ident) => ident.as_str(),
    }
}

fn labels<const N: usize>(block: &Block) -> Result<[&str; N], BlockError> {
    let found: Vec<&str> = block.labels.iter().map(label_str).collect();
    let count = found.len();
    found.try_into().map_err(|_| BlockError::LabelCount {
        block: block.ident.as_str().to_string(),
        expected: N,
        found: count,
    })
}

fn decode_resource(block: &Block, mode: ResourceMode) -> Result<Resource, BlockError> {
    let [type_name, name] = labels::<2>(block)?;

    let mut config = ReferenceCollector::new();
    let mut count = ReferenceCollector::new();
    for structure in block.body.iter() {
        match structure {
            Structure::Attribute(attr) if attr.key.as_str() == "count" => count.collect_attr(attr),
            Structure::Attribute(attr) => config.collect_attr(attr),
            Structure::Block(nested) => config.collect_block(nested),
        }
    }

    Ok(Resource {
        name: name.to_string(),
        type_name: type_name.to_string(),
        mode,
        raw_config: config.finish(),
        raw_count: count.finish(),
    })
}

fn decode_module(block: &Block) -> Result<Module, BlockError> {
    let [name] = labels::<1>(block)?;
    Ok(Module {
        name: name.to_string(),
        source: block.body.get_attribute("source").and_then(|attr| literal_string(&attr.value)),
        raw_config: ReferenceCollector::from_body(&block.body),
    })
}

fn decode_output(block: &Block) -> Result<Output, BlockError> {
    let [name] = labels::<1>(block)?;
    Ok(Output { name: name.to_string(), raw_config: ReferenceCollector::from_body(&block.body) })
}

fn decode_provider(block: &Block) -> Result<ProviderConfig, BlockError> {
    let [name] = labels::<1>(block)?;
    Ok(ProviderConfig {
        name: name.to_string(),
        alias: block.body.get_attribute("alias").and_then(|attr| literal_string(&attr.value)),
        raw_config: ReferenceCollector::from_body(&block.body),
    })
}

fn decode_variable(block: &Block) -> Result<Variable, BlockError> {
    let [name] = labels::<1>(block)?;

    let default = match block.body.get_attribute("default") {
        Some(attr) => Some(literal_value(&attr.value).map_err(|reason| {
            BlockError::InvalidValue {
                block: "variable",
                name: name.to_string(),
                attribute: "default",
                reason,
            }
        })?),
        None => None,
    };

    Ok(Variable {
        name: name.to_string(),
        description: block
            .body
            .get_attribute("description")
            .and_then(|attr| literal_string(&attr.value)),
        default,
    })
}

fn decode_terraform(block: &Block) -> Result<TerraformSettings, BlockError> {
    labels::<0>(block)?;

    let mut settings = TerraformSettings {
        required_version: block
            .body
            .get_attribute("required_version")
            .and_then(|attr| literal_string(&attr.value)),
        ..Default::default()
    };

    for nested in block.body.blocks() {
        match nested.ident.as_str() {
            "backend" => {
                let [backend] = labels::<1>(nested)?;
                settings.backend = Some(backend.to_string());
            }
            "required_providers" => {
                settings
                    .required_providers
                    .extend(nested.body.attributes().map(|attr| attr.key.as_str().to_string()));
            }
            _ => {}
        }
    }
    Ok(settings)
}

fn decode_locals(block: &Block) -> Result<Vec<Local>, BlockError> {
    labels::<0>(block)?;
    Ok(block
        .body
        .attributes()
        .map(|attr| Local {
            name: attr.key.as_str().to_string(),
            raw_config: ReferenceCollector::from_expr(&attr.value),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Reference;
    use serde_json::json;

    fn decode(source: &str) -> Result<Document, BlockError> {
        let body: Body = source.parse().unwrap();
        decode_body(&body)
    }

    #[test]
    fn test_resource_count_is_kept_apart() {
        let doc = decode(
            r#"
            resource "aws_instance" "web" {
              count = var.instances
              ami   = var.ami
            }
            "#,
        )
        .unwrap();

        let resource = &doc.resources[0];
        assert_eq!(resource.id(), "aws_instance.web");
        assert_eq!(resource.mode, ResourceMode::Managed);
        assert_eq!(resource.raw_count.references, vec![Reference::user("instances")]);
        assert_eq!(resource.raw_config.references, vec![Reference::user("ami")]);
    }

    #[test]
    fn test_every_block_type_is_collected() {
        let doc = decode(
            r#"
            terraform {
              required_version = ">= 0.12"
              backend "s3" {}
              required_providers {
                aws = ">= 2.0"
              }
            }
            provider "aws" {
              alias  = "east"
              region = var.region
            }
            data "aws_ami" "ubuntu" {}
            module "network" {
              source = "./network"
            }
            locals {
              prefix = "app"
              name   = "${local.prefix}-web"
            }
            output "id" {
              value = module.network.id
            }
            variable "region" {
              description = "Deployment region"
              default     = ""
            }
            "#,
        )
        .unwrap();

        let terraform = doc.terraform.as_ref().unwrap();
        assert_eq!(terraform.required_version.as_deref(), Some(">= 0.12"));
        assert_eq!(terraform.backend.as_deref(), Some("s3"));
        assert_eq!(terraform.required_providers, vec!["aws"]);

        assert_eq!(doc.provider_configs[0].alias.as_deref(), Some("east"));
        assert_eq!(doc.resources[0].mode, ResourceMode::Data);
        assert_eq!(doc.modules[0].source.as_deref(), Some("./network"));
        let locals: Vec<_> = doc.locals.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(locals, vec!["prefix", "name"]);
        assert_eq!(doc.outputs[0].name, "id");
        assert_eq!(doc.variables[0].description.as_deref(), Some("Deployment region"));
        assert_eq!(doc.variables[0].default, Some(json!("")));
    }

    #[test]
    fn test_empty_terraform_block_is_present() {
        let doc = decode("terraform {}").unwrap();
        assert_eq!(doc.terraform, Some(TerraformSettings::default()));
    }

    #[test]
    fn test_unknown_blocks_and_attributes_are_rejected() {
        assert_eq!(decode("widget \"a\" {}"), Err(BlockError::UnknownBlock("widget".into())));
        assert_eq!(decode("x = 1"), Err(BlockError::UnexpectedAttribute("x".into())));
    }

    #[test]
    fn test_label_count_is_enforced() {
        assert_eq!(
            decode("resource \"aws_instance\" {}"),
            Err(BlockError::LabelCount { block: "resource".into(), expected: 2, found: 1 })
        );
        assert!(decode("locals \"extra\" {}").is_err());
    }

    #[test]
    fn test_non_literal_default_is_rejected() {
        let err = decode("variable \"a\" {\n  default = var.b\n}").unwrap_err();
        assert!(matches!(err, BlockError::InvalidValue { attribute: "default", .. }));
    }
}
