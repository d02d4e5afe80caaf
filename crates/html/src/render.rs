//! Rendering of chart documents to output sinks.

use pievis_charts::chart::PieChart;

use crate::error::Result;
use crate::id::Id;
use crate::output::OutputStream;
use crate::template::Context;
use crate::template::TemplateEngine;

/// Types that render into HTML pages.
///
/// The contract: the document is validated first and nothing is written
/// when validation fails; otherwise the page is rendered once and every
/// sink receives the same bytes.
pub trait Render {
    /// Renders to an in-memory string.
    fn render_to_string(&self) -> Result<String>;

    /// Renders into every sink in `sinks`. An empty slice is allowed;
    /// the document is still validated and rendered.
    fn render<O>(&self, sinks: &mut [O]) -> Result<()>
    where
        O: OutputStream,
    {
        let page = self.render_to_string()?;

        for sink in sinks.iter_mut() {
            sink.write(&page)?;
        }

        Ok(())
    }
}

impl Render for PieChart {
    fn render_to_string(&self) -> Result<String> {
        self.validate()?;

        let init = self.init_options();
        let theme_arg = match &init.theme {
            Some(theme) => format!(", {}", serde_json::to_string(theme)?),
            None => String::new(),
        };

        let id = Id::next();
        let context = Context {
            chart_id: id.to_string(),
            page_title: init.page_title.clone(),
            width: init.width,
            height: init.height,
            script_src: format!("{}echarts.min.js", init.asset_host),
            theme_arg,
            option: serde_json::to_string(self)?,
        };

        log::debug!("rendering {id} with {} series", self.series().len());
        TemplateEngine::render(&context)
    }
}
