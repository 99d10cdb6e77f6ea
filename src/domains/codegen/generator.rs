//! The generation batch job.
//!
//! A run validates the catalog, loads every template in catalog order,
//! drops the prompts whose template cannot be read, and overwrites the
//! target file with the rendered module.

use std::path::PathBuf;
use tracing::{debug, info, warn};

use super::emitter::{render_module, render_prompt};
use super::error::CodegenError;
use crate::core::{GeneratorConfig, Result};
use crate::domains::prompts::{
    PromptDescriptor, PromptError, TemplateContent, catalog, validate_catalog,
};

/// A prompt left out of the generated module.
#[derive(Debug)]
pub struct SkippedPrompt {
    /// Id of the dropped prompt.
    pub id: String,

    /// Template path that failed to load.
    pub path: PathBuf,

    /// Why the template could not be read.
    pub error: PromptError,
}

/// Outcome of a successful generation run.
#[derive(Debug)]
pub struct GenerationReport {
    /// File the module was written to (or would be, for `render`).
    pub target_file: PathBuf,

    /// Ids present in the output, in catalog order.
    pub written_ids: Vec<String>,

    /// Prompts dropped because their template could not be read.
    pub skipped: Vec<SkippedPrompt>,
}

/// Rendered module text plus its report, before anything is written.
#[derive(Debug)]
pub struct RenderedModule {
    pub source: String,
    pub report: GenerationReport,
}

/// Generates the `PROMPTS` module from the catalog and the template files.
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run the generator over the built-in catalog.
    pub fn generate(&self) -> Result<GenerationReport> {
        self.generate_catalog(&catalog())
    }

    /// Run the generator over an explicit catalog and write the target file.
    ///
    /// Template read failures are recorded in the report and do not abort
    /// the run. A failure to write the target file does.
    pub fn generate_catalog(&self, prompts: &[PromptDescriptor]) -> Result<GenerationReport> {
        let rendered = self.render_catalog(prompts)?;
        let target = &self.config.target_file;

        std::fs::write(target, rendered.source.as_bytes())
            .map_err(|e| CodegenError::write_output(target, e))?;

        info!(
            "Wrote {} prompt(s) to {}",
            rendered.report.written_ids.len(),
            target.display()
        );
        Ok(rendered.report)
    }

    /// Render the module for the built-in catalog without writing it.
    pub fn render(&self) -> Result<RenderedModule> {
        self.render_catalog(&catalog())
    }

    /// Render the module for an explicit catalog without writing it.
    pub fn render_catalog(&self, prompts: &[PromptDescriptor]) -> Result<RenderedModule> {
        validate_catalog(prompts)?;

        let mut entries = Vec::with_capacity(prompts.len());
        let mut written_ids = Vec::with_capacity(prompts.len());
        let mut skipped = Vec::new();

        for prompt in prompts {
            let path = self.config.template_path(&prompt.filename);
            let template = match TemplateContent::load(&path) {
                Ok(template) => template,
                Err(error) => {
                    warn!("Skipping prompt '{}': {}", prompt.id, error);
                    skipped.push(SkippedPrompt {
                        id: prompt.id.clone(),
                        path,
                        error,
                    });
                    continue;
                }
            };

            debug!("Rendering prompt '{}'", prompt.id);
            entries.push(render_prompt(prompt, &template)?);
            written_ids.push(prompt.id.clone());
        }

        Ok(RenderedModule {
            source: render_module(&entries),
            report: GenerationReport {
                target_file: self.config.target_file.clone(),
                written_ids,
                skipped,
            },
        })
    }
}
