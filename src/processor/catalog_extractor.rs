use anyhow::{Context, Result};
use regex::Regex;
use tracing::{debug, info};

use crate::config::CatalogConfig;
use crate::models::Article;

/// Pulls articles out of the rendered catalog page.
///
/// Extraction runs in two passes: the block pattern splits the page into
/// product items, then the id and name patterns are searched inside each
/// block. Blocks are assumed not to nest.
pub struct CatalogExtractor {
    block_pattern: Regex,
    id_pattern: Regex,
    name_pattern: Regex,
}

impl CatalogExtractor {
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        Ok(Self {
            block_pattern: compile("block_pattern", &config.block_pattern)?,
            id_pattern: compile("id_pattern", &config.id_pattern)?,
            name_pattern: compile("name_pattern", &config.name_pattern)?,
        })
    }

    pub fn extract_articles(&self, html: &str) -> Vec<Article> {
        let blocks: Vec<&str> = self.block_pattern.find_iter(html).map(|m| m.as_str()).collect();
        info!("Found {} product items", blocks.len());

        let mut articles = Vec::new();
        for (index, block) in blocks.iter().enumerate() {
            debug!("Product item {} ({} bytes)", index, block.len());

            match self.article_from_block(block) {
                Some(article) => {
                    info!("Found article - ID: {}, Name: {}", article.id, article.name);
                    articles.push(article);
                }
                None => debug!("Product item {} has no ID or name, skipped", index),
            }
        }

        articles
    }

    fn article_from_block(&self, block: &str) -> Option<Article> {
        let id = self.id_pattern.captures(block)?.get(1)?.as_str();
        let name = self.name_pattern.captures(block)?.get(1)?.as_str().trim();
        Some(Article::indexed(id, name))
    }
}

fn compile(field: &str, pattern: &str) -> Result<Regex> {
    Regex::new(pattern).with_context(|| format!("Invalid catalog {}: {}", field, pattern))
}
