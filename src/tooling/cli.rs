//! CLI definition and command execution
//!
//! `Cli` is the clap surface; `CliContext` resolves configuration once and
//! executes commands, returning the text to print so the binary stays a thin
//! shim and tests can assert on output.

use crate::config::StencilConfig;
use crate::render;
use crate::template::{ProjectTemplate, TemplateKind};
use anyhow::bail;
use clap::{Parser, Subcommand};
use dialoguer::{Input, Select};
use std::path::{Path, PathBuf};

/// Stencil CLI - project scaffolding and directory tree visualization
#[derive(Parser)]
#[command(name = "stencil")]
#[command(about = "Project scaffolding and colorized directory tree visualization")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scaffold a new project from a template
    New {
        /// Template to scaffold (prompted when omitted)
        #[arg(long, value_enum)]
        template: Option<TemplateKind>,

        /// Project or script name (prompted when omitted)
        #[arg(long)]
        name: Option<String>,

        /// Author recorded in the generated boilerplate
        #[arg(long)]
        author: Option<String>,

        /// Directory to scaffold into
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Skip virtualenv provisioning
        #[arg(long)]
        no_env: bool,
    },
    /// Print a colorized visual tree of an existing directory
    Tree {
        /// Directory to render (default: current directory)
        path: Option<PathBuf>,

        /// Strip ANSI colors from the output
        #[arg(long)]
        plain: bool,
    },
}

/// Execution context carrying resolved configuration.
pub struct CliContext {
    config: StencilConfig,
}

impl CliContext {
    /// Create a new CLI context
    pub fn new(config_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let config = StencilConfig::load(config_path.as_deref())?;
        Ok(CliContext { config })
    }

    pub fn config(&self) -> &StencilConfig {
        &self.config
    }

    /// Execute a command, returning the text to print on stdout.
    pub fn execute(&self, command: &Commands) -> anyhow::Result<String> {
        match command {
            Commands::New {
                template,
                name,
                author,
                root,
                no_env,
            } => self.execute_new(*template, name.clone(), author.clone(), root, *no_env),
            Commands::Tree { path, plain } => self.execute_tree(path.as_deref(), *plain),
        }
    }

    fn execute_new(
        &self,
        template: Option<TemplateKind>,
        name: Option<String>,
        author: Option<String>,
        root: &Path,
        no_env: bool,
    ) -> anyhow::Result<String> {
        let kind = match template {
            Some(kind) => kind,
            None => {
                let options = [
                    TemplateKind::PyScript,
                    TemplateKind::PyProject,
                    TemplateKind::FlaskApp,
                ];
                let choice = Select::new()
                    .with_prompt("Choose a template")
                    .items(&options)
                    .default(0)
                    .interact()?;
                options[choice]
            }
        };

        let name = match name {
            Some(name) => name,
            None => Input::<String>::new()
                .with_prompt("Enter the name of the project")
                .interact_text()?,
        };

        // Author precedence: CLI flag, config default, prompt.
        let author = match author.or_else(|| self.config.default_author.clone()) {
            Some(author) => author,
            None => Input::<String>::new()
                .with_prompt("Enter the author")
                .interact_text()?,
        };

        let project = ProjectTemplate::new(name, author, root.to_path_buf(), kind);
        Ok(project.create_project(&self.config.python, !no_env)?)
    }

    fn execute_tree(&self, path: Option<&Path>, plain: bool) -> anyhow::Result<String> {
        let dir = resolve_tree_path(path)?;
        let mut lines = Vec::new();
        if plain {
            for line in render::plain_from_path(&dir)? {
                lines.push(line?);
            }
        } else {
            for line in render::tree_from_path(&dir)? {
                lines.push(line?);
            }
        }
        Ok(lines.join("\n"))
    }
}

/// Resolve the directory to render: current directory when absent, the path
/// as given when it exists, otherwise a retry under the home directory.
fn resolve_tree_path(path: Option<&Path>) -> anyhow::Result<PathBuf> {
    match path {
        None => Ok(std::env::current_dir()?),
        Some(p) if p.exists() => Ok(p.to_path_buf()),
        Some(p) => {
            if p.is_relative() {
                if let Some(dirs) = directories::BaseDirs::new() {
                    let under_home = dirs.home_dir().join(p);
                    if under_home.exists() {
                        return Ok(under_home);
                    }
                }
            }
            bail!("the path `{}` doesn't exist", p.display())
        }
    }
}
