use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::debug;

use super::UrlValidator;
use crate::models::{Article, UrlIssue};

/// Differences between the seller listing and the catalog page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Comparison {
    /// Listed but absent from the catalog
    pub missing: Vec<Article>,
    /// In the catalog but not listed; informational only
    pub extra: Vec<Article>,
    pub url_issues: Vec<UrlIssue>,
}

impl Comparison {
    /// Extra catalog entries never fail a run
    pub fn is_successful(&self) -> bool {
        self.missing.is_empty() && self.url_issues.is_empty()
    }
}

pub struct Comparator<'a> {
    validator: &'a UrlValidator,
}

impl<'a> Comparator<'a> {
    pub fn new(validator: &'a UrlValidator) -> Self {
        Self { validator }
    }

    pub fn compare(&self, listed: &[Article], indexed: &[Article]) -> Comparison {
        let listed_by_id = by_id(listed);
        let indexed_by_id = by_id(indexed);

        let mut missing: Vec<Article> = listed_by_id
            .iter()
            .filter(|(id, _)| !indexed_by_id.contains_key(*id))
            .map(|(_, article)| (*article).clone())
            .collect();

        let mut extra: Vec<Article> = indexed_by_id
            .iter()
            .filter(|(id, _)| !listed_by_id.contains_key(*id))
            .map(|(_, article)| (*article).clone())
            .collect();

        let mut url_issues: Vec<UrlIssue> = listed_by_id
            .iter()
            .filter(|(id, _)| indexed_by_id.contains_key(*id))
            .filter_map(|(id, article)| {
                self.validator
                    .validate(article.url_or_empty())
                    .err()
                    .map(|issue| UrlIssue {
                        id: id.to_string(),
                        name: article.name.clone(),
                        issue,
                    })
            })
            .collect();

        missing.sort_by(|a, b| compare_ids(&a.id, &b.id));
        extra.sort_by(|a, b| compare_ids(&a.id, &b.id));
        url_issues.sort_by(|a, b| compare_ids(&a.id, &b.id));

        debug!(
            "Comparison: {} missing, {} extra, {} URL issues",
            missing.len(),
            extra.len(),
            url_issues.len()
        );

        Comparison {
            missing,
            extra,
            url_issues,
        }
    }
}

/// Later articles with the same id replace earlier ones
fn by_id(articles: &[Article]) -> HashMap<&str, &Article> {
    articles.iter().map(|a| (a.id.as_str(), a)).collect()
}

/// Numeric ids by value, everything else lexically after them
fn compare_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<u128>(), b.parse::<u128>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
