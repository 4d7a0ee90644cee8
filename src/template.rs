//! Template assembler
//!
//! Composes a [`Directory`] tree from boilerplate content, materializes it,
//! and asks the environment provisioner for an isolated `env/`. Provisioning
//! failures degrade to a warning: by that point the tree is already on disk.

pub mod content;

use crate::error::FsError;
use crate::provision;
use crate::tree::{Directory, File};
use chrono::{Datelike, Local};
use clap::ValueEnum;
use std::path::PathBuf;
use tracing::{info, warn};

/// Built-in project templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TemplateKind {
    /// A bare Python script
    #[value(name = "pyscript")]
    PyScript,
    /// A library-style Python project
    #[value(name = "pyproject")]
    PyProject,
    /// A small Flask web-application skeleton
    #[value(name = "flaskapp")]
    FlaskApp,
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TemplateKind::PyScript => "pyscript",
            TemplateKind::PyProject => "pyproject",
            TemplateKind::FlaskApp => "flaskapp",
        };
        f.write_str(name)
    }
}

/// What a template assembles to before touching disk.
#[derive(Debug)]
pub enum ScaffoldPlan {
    /// A single script file written directly into the root directory
    Script(File),
    /// A full project tree materialized under the root directory
    Project(Directory),
}

/// A named, authored instance of a template, rooted somewhere on disk.
#[derive(Debug, Clone)]
pub struct ProjectTemplate {
    pub project_name: String,
    pub author: String,
    pub root_dir: PathBuf,
    pub kind: TemplateKind,
}

impl ProjectTemplate {
    pub fn new(
        project_name: impl Into<String>,
        author: impl Into<String>,
        root_dir: PathBuf,
        kind: TemplateKind,
    ) -> Self {
        ProjectTemplate {
            project_name: project_name.into(),
            author: author.into(),
            root_dir,
            kind,
        }
    }

    /// Project directory name: Title_Cased with underscores for spaces.
    pub fn title_name(&self) -> String {
        self.project_name
            .split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => {
                        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                    }
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join("_")
    }

    /// Script/package name: lowercased with underscores, `.py` stripped.
    pub fn snake_name(&self) -> String {
        let name = self.project_name.trim_end_matches(".py");
        name.to_lowercase().replace(' ', "_")
    }

    /// Build the in-memory plan for this template. Pure: no disk access.
    pub fn assemble(&self) -> ScaffoldPlan {
        let today = Local::now().format("%b %d, %Y").to_string();
        match self.kind {
            TemplateKind::PyScript => {
                let script_name = format!("{}.py", self.snake_name());
                let body = content::script_main_py(&script_name, &self.author, &today);
                ScaffoldPlan::Script(File::text(script_name, body))
            }
            TemplateKind::PyProject => ScaffoldPlan::Project(self.pyproject_tree(&today)),
            TemplateKind::FlaskApp => ScaffoldPlan::Project(self.flaskapp_tree(&today)),
        }
    }

    /// Assemble, materialize, and (for project templates) provision `env/`.
    ///
    /// Returns a user-facing summary. Provisioning failure does not fail the
    /// call; the summary carries remediation instructions instead.
    pub fn create_project(&self, python: &str, provision_env: bool) -> Result<String, FsError> {
        match self.assemble() {
            ScaffoldPlan::Script(script) => {
                let path = script.create(&self.root_dir)?;
                info!(path = %path.display(), "created script");
                Ok(format!(
                    "A `{}` has been created at the following path:\n\t{}",
                    self.kind,
                    path.display()
                ))
            }
            ScaffoldPlan::Project(tree) => {
                let project_dir = tree.create(&self.root_dir)?;
                info!(path = %project_dir.display(), template = %self.kind, "created project");

                let mut summary = format!(
                    "1. A `{}` has been created at the following dir:\n\t`{}`",
                    self.kind,
                    project_dir.display()
                );

                if provision_env {
                    match provision::create_virtualenv(&project_dir.join("env"), python) {
                        Ok(()) => {
                            summary.push_str(&format!(
                                "\n\n2. A virtualenv has been created too. Activate it with:\
                                 \n\t- cd {}\n\t- source env/bin/activate",
                                project_dir.display()
                            ));
                        }
                        Err(e) => {
                            warn!(error = %e, "environment provisioning failed");
                            summary.push_str(&format!(
                                "\n\nWARNING: could not provision a virtualenv ({e}).\
                                 \nCreate one manually with:\n\t- {python} -m venv {}",
                                project_dir.join("env").display()
                            ));
                        }
                    }
                }

                if self.kind == TemplateKind::FlaskApp {
                    summary.push_str(
                        "\n\n3. Run the flaskapp with:\
                         \n\t- source env/bin/activate\
                         \n\t- pip install -r requirements.txt\
                         \n\t- env/bin/python run.py",
                    );
                }
                Ok(summary)
            }
        }
    }

    fn pyproject_tree(&self, today: &str) -> Directory {
        let proj_name = self.title_name();
        let package = proj_name.to_lowercase();
        let mut root = Directory::new(proj_name.clone());

        root.add_directory(&package);
        if let Some(pkg) = root.dir_mut(&package) {
            pkg.add_file(
                "__init__.py",
                Some(content::pyproj_init_py(&proj_name)),
                None,
            );
            pkg.add_file(
                "model.py",
                Some(content::model_py(&proj_name, &self.author, today)),
                None,
            );
        }
        root.add_file(".gitignore", Some(content::PY_GITIGNORE.into()), None);
        root.add_file(
            "main.py",
            Some(content::main_py(&proj_name, &self.author, today, &package)),
            None,
        );
        root.add_file("requirements.txt", Some(content::REQUIREMENTS.into()), None);
        root.add_file("README.md", Some(content::README_MD.into()), None);
        root.add_file("setup.py", None, None);
        root
    }

    fn flaskapp_tree(&self, today: &str) -> Directory {
        let proj_name = self.title_name();
        let mut root = Directory::new(proj_name.clone());

        root.add_directory("app");
        if let Some(app) = root.dir_mut("app") {
            app.add_file(
                "routes.py",
                Some(content::routes_py(&proj_name, &self.author, today)),
                None,
            );
            app.add_file("__init__.py", Some(content::FLASK_INIT.into()), None);
            app.add_directory("templates");
            if let Some(templates) = app.dir_mut("templates") {
                templates.add_file("index.html", Some(content::FLASK_INDEX_HTML.into()), None);
            }
            app.add_directory("static");
            if let Some(static_dir) = app.dir_mut("static") {
                static_dir.add_directory("css");
                if let Some(css) = static_dir.dir_mut("css") {
                    css.add_file("style.css", Some(content::FLASK_STYLE_CSS.into()), None);
                }
                static_dir.add_directory("images");
            }
        }
        root.add_file(".gitignore", Some(content::PY_GITIGNORE.into()), None);
        root.add_file(
            "run.py",
            Some(content::run_py(&proj_name, &self.author, today)),
            None,
        );
        root.add_file(
            "requirements.txt",
            Some(content::FLASK_REQUIREMENTS.into()),
            None,
        );
        root.add_file(
            "config.py",
            Some(content::flask_config_py(&self.author, today)),
            None,
        );
        root.add_file("README.md", Some(content::README_MD.into()), None);
        root.add_file(
            "LICENSE",
            Some(content::mit_license(&self.author, Local::now().year())),
            None,
        );
        root.add_directory("scripts");
        root
    }
}
