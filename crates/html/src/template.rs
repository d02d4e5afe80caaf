use serde::Serialize;
use tinytemplate::TinyTemplate;

use crate::error::Result;

const INDEX_TEMPLATE: &str = include_str!("./template/index.html.tt");

pub(crate) struct TemplateEngine;

impl TemplateEngine {
    pub fn render(context: &Context) -> Result<String> {
        let mut template = TinyTemplate::new();
        template.add_template("index", INDEX_TEMPLATE)?;

        Ok(template.render("index", context)?)
    }
}

// Everything the page template needs, pre-shaped so the template itself
// stays free of logic. `theme_arg` is either empty or a leading comma
// followed by the JSON-quoted theme name, and `option` is the serialized
// echarts option object; both are substituted unescaped.
#[derive(Serialize, Debug)]
pub(crate) struct Context {
    pub chart_id: String,
    pub page_title: String,
    pub width: u32,
    pub height: u32,
    pub script_src: String,
    pub theme_arg: String,
    pub option: String,
}
