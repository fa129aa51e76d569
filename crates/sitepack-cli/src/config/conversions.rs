use crate::config::{SiteConfig, ToolConfig};
use sitepack_bundler::{AssetSpec, BundlePlan, SourceList};
use sitepack_lint::{LintKind, LintStep};
use std::path::Path;

impl SiteConfig {
    /// Bundler plan for the site at `root`.
    pub fn bundle_plan(&self, root: &Path) -> BundlePlan {
        BundlePlan {
            root: root.to_path_buf(),
            css: AssetSpec::new(
                SourceList::new(self.bundle.css.iter().cloned()),
                self.bundle.css_out.clone(),
            ),
            js: AssetSpec::new(
                SourceList::new(self.bundle.js.iter().cloned()),
                self.bundle.js_out.clone(),
            ),
        }
    }

    /// Lint steps in execution order: JS, then CSS.
    pub fn lint_steps(&self) -> Vec<LintStep> {
        vec![
            to_step(LintKind::Js, &self.lint.js),
            to_step(LintKind::Css, &self.lint.css),
        ]
    }
}

fn to_step(kind: LintKind, tool: &ToolConfig) -> LintStep {
    LintStep::new(kind, tool.tool.clone(), tool.files.iter().cloned())
        .with_args(tool.args.iter().cloned())
}
