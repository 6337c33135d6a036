//! Iframe renderer whose HTML files outlive the kernel session.
//!
//! Every render writes `IFRAME_DIR/<uuid>.html` next to the notebook and
//! displays it through an `<iframe>`. File names never repeat, so saved
//! notebooks keep showing their plots; orphaned files are removed by
//! [`remove_unused_htmls`](crate::crawl::remove_unused_htmls).

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::{MimeBundle, Renderer, unique_id};
use crate::defaults::{DEFAULT_PLOT_HEIGHT, IFRAME_BUFFER, IFRAME_DIR};
use crate::error::Result;
use crate::output::html::{self, IncludePlotlyJs};

#[derive(Debug, Clone)]
pub struct IFrameRenderer {
    root: PathBuf,
    include_plotlyjs: IncludePlotlyJs,
}

impl IFrameRenderer {
    /// Renderer rooted at the notebook directory `root`.
    ///
    /// # Errors
    /// Returns an error if `root/IFRAME_DIR` cannot be created.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(root.join(IFRAME_DIR))?;
        Ok(Self {
            root,
            include_plotlyjs: IncludePlotlyJs::Cdn,
        })
    }

    #[must_use]
    pub fn with_plotlyjs(mut self, include: IncludePlotlyJs) -> Self {
        self.include_plotlyjs = include;
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Iframe markup sized slightly larger than the figure so the iframe
    /// gets no scroll bar of its own.
    fn iframe_html(layout: &Value, src: &str) -> String {
        let width = layout
            .get("width")
            .and_then(Value::as_f64)
            .map_or_else(|| "100%".to_string(), |w| format!("{}px", w + IFRAME_BUFFER));
        let height = layout
            .get("height")
            .and_then(Value::as_f64)
            .map_or_else(
                || format!("{}px", DEFAULT_PLOT_HEIGHT + IFRAME_BUFFER),
                |h| (h + IFRAME_BUFFER).to_string(),
            );

        format!(
            r#"<iframe
sandbox="allow-scripts allow-downloads"
scrolling="no"
width="{width}"
height="{height}"
src="{src}"
frameborder="0"
allowfullscreen
></iframe>
"#
        )
    }
}

impl Renderer for IFrameRenderer {
    fn render(&self, figure: &Value, config: &Map<String, Value>) -> Result<MimeBundle> {
        // The iframe src stays relative to the notebook directory.
        let src = format!("{IFRAME_DIR}/{}.html", unique_id());
        let document = html::document(figure, config, &self.include_plotlyjs, None)?;
        fs::write(self.root.join(&src), document)?;
        tracing::debug!(file = %src, "wrote iframe figure");

        let layout = figure.get("layout").unwrap_or(&Value::Null);
        Ok(MimeBundle::html(Self::iframe_html(layout, &src)))
    }
}

#[cfg(test)]
#[path = "iframe_tests.rs"]
mod tests;
