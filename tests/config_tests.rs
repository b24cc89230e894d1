//! Integration tests for configuration files and schema markup output.

use aeo_scorer::cli::{render_schema, SchemaOptions};
use aeo_scorer::config::{
    generate_example_config, load_config_file, load_or_default, AnalyzerMode, ConfigFileError,
    Validatable,
};
use aeo_scorer::model::ContentType;
use aeo_scorer::reports::render_report;
use aeo_scorer::schema::{FaqEntry, SchemaInput, SchemaType};
use aeo_scorer::ContentScorer;
use std::path::Path;
use tempfile::TempDir;

fn write_config(dir: &Path, yaml: &str) -> std::path::PathBuf {
    let path = dir.join(".aeo-scorer.yaml");
    std::fs::write(&path, yaml).unwrap();
    path
}

// ============================================================================
// Config Files
// ============================================================================

mod config_files {
    use super::*;

    #[test]
    fn test_config_drives_scoring_and_report() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(
            tmp.path(),
            r"
scoring:
  lexicons:
    product: [kite, string]
report:
  title: Kite Shop Review
  include_content_dump: false
",
        );

        let (config, loaded_from) = load_or_default(Some(&path));
        assert_eq!(loaded_from.as_deref(), Some(path.as_path()));
        assert!(config.is_valid());

        let text = "Every kite ships with string. Our kite line is strong.";
        let custom = ContentScorer::with_lexicons(config.lexicons());
        assert_eq!(custom.measure(text, ContentType::Product).keyword_count, 3);

        let scores = custom.score(text, ContentType::Product);
        let doc = render_report(&scores, text, ContentType::Product, &config.report_config());
        assert_eq!(doc.title, "Kite Shop Review");
        assert!(doc.body_text().any(|t| t == "Kite Shop Review"));
        assert!(!doc.body_text().any(|t| t == "Analyzed Content"));
    }

    #[test]
    fn test_invalid_values_are_reported_per_field() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(
            tmp.path(),
            r"
scoring:
  lexicons:
    recipe: [flour]
analyzer:
  mode: remote
  timeout_secs: 0
",
        );

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.analyzer.mode, AnalyzerMode::Remote);

        let fields: Vec<String> = config.validate().into_iter().map(|e| e.field).collect();
        assert!(fields.contains(&"scoring.lexicons.recipe".to_string()));
        assert!(fields.contains(&"analyzer.endpoint".to_string()));
        assert!(fields.contains(&"analyzer.timeout_secs".to_string()));
    }

    #[test]
    fn test_malformed_yaml_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(tmp.path(), "report: [not, a, map");

        assert!(matches!(
            load_config_file(&path),
            Err(ConfigFileError::Parse(_))
        ));
        let (config, loaded_from) = load_or_default(Some(&path));
        assert!(loaded_from.is_none());
        assert_eq!(config, Default::default());
    }

    #[test]
    fn test_example_config_loads_back() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(tmp.path(), &generate_example_config());
        let config = load_config_file(&path).unwrap();
        assert_eq!(config, Default::default());
        assert!(config.is_valid());
    }
}

// ============================================================================
// Schema Output
// ============================================================================

mod schema_output {
    use super::*;

    fn render(input: SchemaInput, fallback_image: Option<&str>) -> serde_json::Value {
        let options = SchemaOptions {
            input,
            fallback_image: fallback_image.map(str::to_string),
            output_file: None,
            quiet: true,
        };
        serde_json::from_str(&render_schema(&options).unwrap()).unwrap()
    }

    #[test]
    fn test_faq_page_markup() {
        let mut input = SchemaInput::new(SchemaType::FaqPage, "AEO FAQ");
        input.faqs = vec![
            FaqEntry::parse("What is AEO?|Optimizing content for answer engines.").unwrap(),
            FaqEntry::parse("Is it SEO? | It builds on SEO.").unwrap(),
        ];
        let json = render(input, Some("https://example.com/fallback.png"));

        assert_eq!(json["@context"], "https://schema.org");
        assert_eq!(json["@type"], "FAQPage");
        assert_eq!(json["mainEntity"][1]["name"], "Is it SEO?");
        assert_eq!(json["mainEntity"][1]["acceptedAnswer"]["text"], "It builds on SEO.");
        assert!(json.get("image").is_none());
    }

    #[test]
    fn test_product_gets_fallback_image_and_offer() {
        let mut input = SchemaInput::new(SchemaType::Product, "Trail Kite");
        input.price = Some("49.00".to_string());
        let json = render(input, Some("https://example.com/kite.png"));

        assert_eq!(json["image"], "https://example.com/kite.png");
        assert_eq!(json["offers"]["priceCurrency"], "USD");
    }

    #[test]
    fn test_existing_image_is_kept() {
        let mut input = SchemaInput::new(SchemaType::BlogPosting, "Hello");
        input.image = Some("https://example.com/own.png".to_string());
        let json = render(input, Some("https://example.com/fallback.png"));
        assert_eq!(json["image"], "https://example.com/own.png");
    }
}
