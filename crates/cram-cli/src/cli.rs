//! Command handlers
//!
//! Each handler converts its clap arguments into core types, drives
//! `cram-core`, and hands markdown to the [`TerminalRenderer`].

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use cram_core::{
    display::{SavedPlan, ToggleResult, TransitionStatus},
    error::GENERATION_FAILED_MESSAGE,
    export_bytes, export_file_name, import_topics,
    params::StudyForm,
    schema::study_plan_schema,
    GeneratorBuilder, RequestController, Session, TaskPosition, Transition,
};
use jiff::Zoned;
use log::{debug, info, warn};

use crate::{
    args::{GenerateArgs, ShowArgs, ToggleArgs},
    renderer::TerminalRenderer,
};

pub struct Cli {
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(renderer: TerminalRenderer) -> Self {
        Self { renderer }
    }

    pub async fn generate(&self, args: GenerateArgs) -> Result<()> {
        let topics = match &args.topics_file {
            Some(path) => {
                let bytes = read_file(path)?;
                import_topics(&bytes)
                    .with_context(|| format!("Failed to read topics from {}", path.display()))?
            }
            None => args.topics.clone().unwrap_or_default(),
        };
        let form = StudyForm {
            topics,
            test_date: args.test_date,
            comfort_level: args.comfort.into(),
        };

        // Reject bad input before asking for credentials or touching the network.
        let today = Zoned::now().date();
        form.validate(today)?;

        let generator = GeneratorBuilder::new()
            .with_api_key(args.api_key)
            .with_model(args.model)
            .build()
            .context("Failed to configure the generation provider")?;
        let mut session = Session::new(generator);

        eprintln!("Generating study plan (Ctrl-C to cancel)...");
        let interrupt = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("Cannot listen for Ctrl-C: {e}");
                std::future::pending::<()>().await;
            }
        };

        match session.generate(&form, today, interrupt).await? {
            Transition::Succeeded => {
                let plan = session
                    .controller()
                    .plan()
                    .context("Generation finished without a plan")?;
                let path = match args.output {
                    Some(path) => path,
                    None => available_path(Path::new(""), &export_file_name(&plan.title)),
                };
                write_file(&path, &export_bytes(plan)?)?;
                info!("Saved plan to {}", path.display());
                self.renderer.render(&SavedPlan::new(plan, &path).to_string())
            }
            Transition::Cancelled => self
                .renderer
                .render(&TransitionStatus(Transition::Cancelled).to_string()),
            transition => {
                debug!("Generation ended with {transition:?}");
                let message = session
                    .controller()
                    .error()
                    .unwrap_or(GENERATION_FAILED_MESSAGE);
                bail!("{message}")
            }
        }
    }

    pub fn show(&self, args: ShowArgs) -> Result<()> {
        let controller = load_plan(&args.file)?;
        let plan = controller.plan().context("No plan loaded")?;
        self.renderer.render(&plan.to_string())
    }

    pub fn toggle(&self, args: ToggleArgs) -> Result<()> {
        let mut controller = load_plan(&args.file)?;
        let position = TaskPosition::from(args.position);

        if !controller.toggle_task(position) {
            bail!(
                "No task at {} in {}; the plan was left unchanged",
                args.position,
                args.file.display()
            );
        }

        let plan = controller.plan().context("No plan loaded")?;
        write_file(&args.file, &export_bytes(plan)?)?;
        self.renderer
            .render(&ToggleResult::new(plan, position).to_string())
    }

    pub fn schema(&self) -> Result<()> {
        let schema = serde_json::to_string_pretty(&study_plan_schema().to_json())?;
        println!("{schema}");
        Ok(())
    }
}

fn load_plan(path: &Path) -> Result<RequestController> {
    let bytes = read_file(path)?;
    let mut controller = RequestController::new();
    controller
        .import(&bytes)
        .with_context(|| format!("Failed to import {}", path.display()))?;
    Ok(controller)
}

/// `dir/file_name`, or the first `dir/<stem>-N.json` that does not exist yet.
fn available_path(dir: &Path, file_name: &str) -> PathBuf {
    let path = dir.join(file_name);
    if !path.exists() {
        return path;
    }
    let stem = file_name.strip_suffix(".json").unwrap_or(file_name);
    let mut n = 2;
    loop {
        let candidate = dir.join(format!("{stem}-{n}.json"));
        if !candidate.exists() {
            info!("{} exists, saving to {}", path.display(), candidate.display());
            return candidate;
        }
        n += 1;
    }
}

fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}
