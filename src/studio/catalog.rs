use tracing::{info, warn};

use super::result::ExampleCategory;
use crate::client::ParserService;

/// Sample inputs grouped by category, fetched once at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExampleCatalog {
    categories: Vec<ExampleCategory>,
}

impl ExampleCatalog {
    pub fn new(categories: Vec<ExampleCategory>) -> Self {
        Self { categories }
    }

    /// Fetch the examples. Failure degrades to an empty catalog.
    pub async fn load(service: &dyn ParserService) -> Self {
        match service.examples().await {
            Ok(categories) => {
                info!("Loaded {} example categories", categories.len());
                Self::new(categories)
            }
            Err(err) => {
                warn!("Failed to fetch examples: {}", err);
                Self::default()
            }
        }
    }

    pub fn categories(&self) -> &[ExampleCategory] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.iter().all(|c| c.inputs.is_empty())
    }

    /// Every input in display order, flattened across categories.
    pub fn inputs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.categories.iter().flat_map(|c| {
            c.inputs
                .iter()
                .map(move |input| (c.category.as_str(), input.as_str()))
        })
    }

    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.inputs.len()).sum()
    }

    /// Example at `index` in [`inputs`](Self::inputs) order.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.inputs().nth(index).map(|(_, input)| input)
    }

    /// The chosen text, ready to overwrite the input buffer.
    pub fn select(example: &str) -> String {
        example.to_string()
    }
}
