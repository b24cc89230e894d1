//! Schema.org JSON-LD markup generation.
//!
//! [`generate_json_ld`] builds a JSON-LD object from form-style input.
//! [`ensure_image_field`] is a separate pure transform that fills in an
//! `image` property for types whose rich results need one; call it on any
//! markup (generated or hand-written) before publishing.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// Schema.org vocabulary context
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Types whose rich results require an `image` property
pub const IMAGE_REQUIRED_TYPES: &[&str] = &[
    "Article",
    "BlogPosting",
    "NewsArticle",
    "Product",
    "Recipe",
    "LocalBusiness",
    "Event",
];

/// Supported schema types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
pub enum SchemaType {
    Article,
    BlogPosting,
    Product,
    Service,
    #[value(name = "faq-page", alias = "faq")]
    FaqPage,
    Organization,
    LocalBusiness,
}

impl SchemaType {
    /// The `@type` value
    #[must_use]
    pub const fn schema_name(&self) -> &'static str {
        match self {
            Self::Article => "Article",
            Self::BlogPosting => "BlogPosting",
            Self::Product => "Product",
            Self::Service => "Service",
            Self::FaqPage => "FAQPage",
            Self::Organization => "Organization",
            Self::LocalBusiness => "LocalBusiness",
        }
    }
}

impl std::fmt::Display for SchemaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.schema_name())
    }
}

/// A question and its answer for FAQ markup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    /// Parse `question|answer`. Returns `None` without a separator.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let (question, answer) = s.split_once('|')?;
        Some(Self {
            question: question.trim().to_string(),
            answer: answer.trim().to_string(),
        })
    }
}

/// Form fields for markup generation. Blank optional fields are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaInput {
    pub schema_type: SchemaType,
    /// Name, or headline for articles
    pub name: String,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
    /// Article author
    pub author: Option<String>,
    /// Article publication date (ISO 8601)
    pub date_published: Option<String>,
    /// Publisher for articles, provider for services
    pub organization: Option<String>,
    /// Product price
    pub price: Option<String>,
    /// ISO 4217 currency code for `price`
    pub currency: Option<String>,
    pub telephone: Option<String>,
    pub address: Option<String>,
    pub faqs: Vec<FaqEntry>,
}

impl SchemaInput {
    pub fn new(schema_type: SchemaType, name: impl Into<String>) -> Self {
        Self {
            schema_type,
            name: name.into(),
            description: None,
            url: None,
            image: None,
            author: None,
            date_published: None,
            organization: None,
            price: None,
            currency: None,
            telephone: None,
            address: None,
            faqs: Vec::new(),
        }
    }
}

fn insert_opt(map: &mut Map<String, Value>, key: &str, value: Option<&String>) {
    if let Some(v) = value.map(|v| v.trim()).filter(|v| !v.is_empty()) {
        map.insert(key.to_string(), Value::String(v.to_string()));
    }
}

fn named(kind: &str, name: &str) -> Value {
    json!({ "@type": kind, "name": name })
}

/// Build JSON-LD markup for the input.
#[must_use]
pub fn generate_json_ld(input: &SchemaInput) -> Value {
    let mut map = Map::new();
    map.insert("@context".to_string(), json!(SCHEMA_CONTEXT));
    map.insert("@type".to_string(), json!(input.schema_type.schema_name()));

    match input.schema_type {
        SchemaType::Article | SchemaType::BlogPosting => {
            map.insert("headline".to_string(), json!(input.name));
            insert_opt(&mut map, "description", input.description.as_ref());
            if let Some(author) = &input.author {
                map.insert("author".to_string(), named("Person", author));
            }
            insert_opt(&mut map, "datePublished", input.date_published.as_ref());
            if let Some(publisher) = &input.organization {
                map.insert("publisher".to_string(), named("Organization", publisher));
            }
        }
        SchemaType::Product => {
            map.insert("name".to_string(), json!(input.name));
            insert_opt(&mut map, "description", input.description.as_ref());
            if let Some(price) = &input.price {
                map.insert(
                    "offers".to_string(),
                    json!({
                        "@type": "Offer",
                        "price": price,
                        "priceCurrency": input.currency.as_deref().unwrap_or("USD"),
                    }),
                );
            }
        }
        SchemaType::Service => {
            map.insert("name".to_string(), json!(input.name));
            insert_opt(&mut map, "description", input.description.as_ref());
            if let Some(provider) = &input.organization {
                map.insert("provider".to_string(), named("Organization", provider));
            }
        }
        SchemaType::FaqPage => {
            map.insert("name".to_string(), json!(input.name));
            let entities: Vec<Value> = input
                .faqs
                .iter()
                .map(|faq| {
                    json!({
                        "@type": "Question",
                        "name": faq.question,
                        "acceptedAnswer": { "@type": "Answer", "text": faq.answer },
                    })
                })
                .collect();
            map.insert("mainEntity".to_string(), Value::Array(entities));
        }
        SchemaType::Organization | SchemaType::LocalBusiness => {
            map.insert("name".to_string(), json!(input.name));
            insert_opt(&mut map, "description", input.description.as_ref());
            insert_opt(&mut map, "telephone", input.telephone.as_ref());
            insert_opt(&mut map, "address", input.address.as_ref());
        }
    }

    insert_opt(&mut map, "url", input.url.as_ref());
    insert_opt(&mut map, "image", input.image.as_ref());
    Value::Object(map)
}

/// Whether a `@type` value (string or array of strings) needs an image
fn requires_image(kind: &Value) -> bool {
    match kind {
        Value::String(s) => IMAGE_REQUIRED_TYPES.contains(&s.as_str()),
        Value::Array(kinds) => kinds.iter().any(requires_image),
        _ => false,
    }
}

fn has_image(map: &Map<String, Value>) -> bool {
    match map.get("image") {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(_) => true,
    }
}

/// Add `image` to every schema object whose type needs one and lacks it.
///
/// Walks arrays, `@graph` containers and nested objects. Objects that
/// already carry an image, or whose type does not need one, are unchanged.
#[must_use]
pub fn ensure_image_field(value: Value, fallback_image: &str) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| ensure_image_field(item, fallback_image))
                .collect(),
        ),
        Value::Object(map) => {
            let mut map: Map<String, Value> = map
                .into_iter()
                .map(|(k, v)| (k, ensure_image_field(v, fallback_image)))
                .collect();
            let needs_image = map.get("@type").is_some_and(requires_image) && !has_image(&map);
            if needs_image {
                tracing::debug!("Adding fallback image to {:?}", map.get("@type"));
                map.insert("image".to_string(), Value::String(fallback_image.to_string()));
            }
            Value::Object(map)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "https://example.com/default.png";

    #[test]
    fn test_article_markup() {
        let mut input = SchemaInput::new(SchemaType::Article, "What is AEO?");
        input.author = Some("Sam Lee".to_string());
        input.organization = Some("Acme".to_string());
        input.description = Some("  ".to_string());
        let value = generate_json_ld(&input);
        assert_eq!(value["@context"], SCHEMA_CONTEXT);
        assert_eq!(value["@type"], "Article");
        assert_eq!(value["headline"], "What is AEO?");
        assert_eq!(value["author"]["name"], "Sam Lee");
        assert_eq!(value["publisher"]["@type"], "Organization");
        assert!(value.get("description").is_none());
    }

    #[test]
    fn test_faq_markup() {
        let mut input = SchemaInput::new(SchemaType::FaqPage, "FAQ");
        input.faqs.push(FaqEntry::parse("What is AEO? | Optimizing for answer engines.").unwrap());
        let value = generate_json_ld(&input);
        assert_eq!(value["@type"], "FAQPage");
        assert_eq!(value["mainEntity"][0]["name"], "What is AEO?");
        assert_eq!(
            value["mainEntity"][0]["acceptedAnswer"]["text"],
            "Optimizing for answer engines."
        );
        assert!(FaqEntry::parse("no separator").is_none());
    }

    #[test]
    fn test_product_offer_default_currency() {
        let mut input = SchemaInput::new(SchemaType::Product, "Widget");
        input.price = Some("19.99".to_string());
        let value = generate_json_ld(&input);
        assert_eq!(value["offers"]["priceCurrency"], "USD");
    }

    #[test]
    fn test_ensure_image_adds_missing() {
        let value = ensure_image_field(
            json!({"@type": "Product", "name": "Widget"}),
            FALLBACK,
        );
        assert_eq!(value["image"], FALLBACK);
    }

    #[test]
    fn test_ensure_image_keeps_existing_and_skips_other_types() {
        let existing = json!({"@type": "Article", "image": "https://example.com/a.png"});
        assert_eq!(ensure_image_field(existing.clone(), FALLBACK), existing);

        let service = json!({"@type": "Service", "name": "Audit"});
        assert_eq!(ensure_image_field(service.clone(), FALLBACK), service);
    }

    #[test]
    fn test_ensure_image_walks_graph() {
        let value = ensure_image_field(
            json!({
                "@context": SCHEMA_CONTEXT,
                "@graph": [
                    {"@type": "Organization", "name": "Acme"},
                    {"@type": ["BlogPosting"], "headline": "Hi", "image": ""}
                ]
            }),
            FALLBACK,
        );
        assert!(value["@graph"][0].get("image").is_none());
        assert_eq!(value["@graph"][1]["image"], FALLBACK);
    }
}
