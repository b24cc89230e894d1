//! Schema command handler.
//!
//! Implements the `schema` subcommand: print JSON-LD markup.

use crate::pipeline::{write_output, OutputTarget};
use crate::schema::{ensure_image_field, generate_json_ld, SchemaInput, IMAGE_REQUIRED_TYPES};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Options for the `schema` command
#[derive(Debug, Clone)]
pub struct SchemaOptions {
    pub input: SchemaInput,
    /// Image used when the type needs one and none was given
    pub fallback_image: Option<String>,
    pub output_file: Option<PathBuf>,
    pub quiet: bool,
}

/// Build the markup as pretty-printed JSON.
pub fn render_schema(options: &SchemaOptions) -> Result<String> {
    let mut markup = generate_json_ld(&options.input);
    match &options.fallback_image {
        Some(fallback) => markup = ensure_image_field(markup, fallback),
        None => {
            let name = options.input.schema_type.schema_name();
            if IMAGE_REQUIRED_TYPES.contains(&name) && markup.get("image").is_none() {
                tracing::warn!(
                    "{} markup has no image; pass --image or --fallback-image",
                    name
                );
            }
        }
    }
    serde_json::to_string_pretty(&markup).context("failed to serialize markup")
}

/// Run the schema command.
pub fn run_schema(options: SchemaOptions) -> Result<()> {
    let json = render_schema(&options)?;
    let target = OutputTarget::from_option(options.output_file);
    write_output(json.as_bytes(), &target, options.quiet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaType;

    #[test]
    fn test_fallback_image_applied() {
        let options = SchemaOptions {
            input: SchemaInput::new(SchemaType::BlogPosting, "Hello"),
            fallback_image: Some("https://example.com/og.png".to_string()),
            output_file: None,
            quiet: true,
        };
        let json: serde_json::Value =
            serde_json::from_str(&render_schema(&options).unwrap()).unwrap();
        assert_eq!(json["image"], "https://example.com/og.png");
        assert_eq!(json["headline"], "Hello");
    }

    #[test]
    fn test_no_fallback_leaves_markup_alone() {
        let options = SchemaOptions {
            input: SchemaInput::new(SchemaType::Product, "Widget"),
            fallback_image: None,
            output_file: None,
            quiet: true,
        };
        let json: serde_json::Value =
            serde_json::from_str(&render_schema(&options).unwrap()).unwrap();
        assert!(json.get("image").is_none());
    }
}
