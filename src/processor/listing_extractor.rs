use serde_json::Value;
use tracing::{debug, info, warn};

use crate::models::Article;

const ITEM_LIST_TYPE: &str = "ItemList";
const PRODUCT_TYPE: &str = "Product";

/// Walks the seller's structured-data document and collects the listed
/// products.
pub struct ListingExtractor;

impl ListingExtractor {
    pub fn new() -> Self {
        ListingExtractor
    }

    pub fn extract_articles(&self, document: &Value) -> Vec<Article> {
        let Some(nodes) = document.as_array() else {
            warn!("Seller JSON is not an array of objects, no articles extracted");
            return Vec::new();
        };

        let mut articles = Vec::new();
        let mut skipped = 0;

        for node in nodes.iter().filter(|node| has_type(node, ITEM_LIST_TYPE)) {
            let elements = node
                .get("itemListElement")
                .and_then(|e| e.as_array())
                .map(Vec::as_slice)
                .unwrap_or_default();

            for element in elements {
                match element.get("item") {
                    Some(product) if has_type(product, PRODUCT_TYPE) => {
                        articles.push(self.article_from_product(product));
                    }
                    _ => skipped += 1,
                }
            }
        }

        info!(
            "Listing extraction: {} articles, {} non-product elements skipped",
            articles.len(),
            skipped
        );

        articles
    }

    fn article_from_product(&self, product: &Value) -> Article {
        let price = product.get("offers").and_then(|offers| offers.get("price"));

        let article = Article::listed(
            text_field(product.get("sku")),
            text_field(product.get("name")),
            text_field(product.get("url")),
            text_field(price),
        );
        debug!("Listed article - ID: {}, Name: {}", article.id, article.name);
        article
    }
}

impl Default for ListingExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn has_type(node: &Value, expected: &str) -> bool {
    node.get("@type").and_then(|t| t.as_str()) == Some(expected)
}

/// Strings as-is, numbers in their JSON form, anything else empty
fn text_field(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}
