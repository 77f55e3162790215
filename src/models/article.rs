use serde::Serialize;

/// One catalog entry, keyed by the seller-assigned id.
///
/// Listing-side articles always carry `url` and `price` (empty when the
/// source omits them); catalog-side articles leave both unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl Article {
    /// Article as found in the seller JSON listing
    pub fn listed(
        id: impl Into<String>,
        name: impl Into<String>,
        url: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: Some(url.into()),
            price: Some(price.into()),
        }
    }

    /// Article as found in the rendered catalog page
    pub fn indexed(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: None,
            price: None,
        }
    }

    pub fn url_or_empty(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }
}

/// A URL problem found on an article present in both sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlIssue {
    pub id: String,
    pub name: String,
    pub issue: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_article_has_no_listing_fields() {
        let article = Article::indexed("42", "Lamp");
        assert_eq!(article.url, None);
        assert_eq!(article.price, None);
        assert_eq!(article.url_or_empty(), "");
    }

    #[test]
    fn test_catalog_article_serializes_without_optional_fields() {
        let json = serde_json::to_value(Article::indexed("7", "Chair")).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "7", "name": "Chair" }));
    }
}
