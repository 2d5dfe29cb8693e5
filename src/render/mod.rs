//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod sexp;

use crate::model::Keywords;
use anyhow::{anyhow, Result};

/// Trait for rendering extracted keywords into a specific output format.
pub trait Renderer {
    fn render(&self, keywords: &Keywords) -> String;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "sexp" | "lisp" => Ok(Box::new(sexp::SexpRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        _ => Err(anyhow!("unknown format: {}. Use sexp or json", format)),
    }
}
