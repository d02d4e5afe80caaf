//! Document-level display options and the capability trait they share.
//!
//! Every option type here mutates one part of the [GlobalOptions] bag
//! through the [GlobalOption] capability. Options are applied in the order
//! the caller passes them; a later option overrides an earlier one for the
//! fields it sets.

use serde::Serialize;

use crate::series::PieSeries;
use crate::series::SeriesOption;

/// A capability for mutating the document-level options.
pub trait GlobalOption {
    /// Writes the option's fields into the bag.
    fn apply(&self, options: &mut GlobalOptions);
}

/// The document-level option bag.
///
/// Serializes into the top-level fields of the echarts option object. The
/// [InitOptions] section is consumed by the page renderer instead and never
/// serialized.
#[derive(Serialize, Debug, Clone, Default)]
pub struct GlobalOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) legend: Option<Legend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) tooltip: Option<Tooltip>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub(crate) color: Vec<String>,
    #[serde(skip)]
    pub(crate) init: InitOptions,
    #[serde(skip)]
    pub(crate) palette_merge: PaletteMerge,
}

impl GlobalOptions {
    pub(crate) fn new() -> GlobalOptions {
        Self::default()
    }

    pub(crate) fn merge_colors(&mut self, colors: &[String]) {
        match self.palette_merge {
            PaletteMerge::Extend => {
                self.color.extend(colors.iter().cloned());
            }
            PaletteMerge::Replace => {
                if !self.color.is_empty() {
                    log::debug!("replacing palette, {} colors dropped", self.color.len());
                }
                self.color = colors.to_vec();
            }
        }
    }
}

/// How palette contributions combine with colors already on the document.
///
/// The policy itself is a [GlobalOption], so it is set like any other
/// option and affects every later contribution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PaletteMerge {
    /// Append new colors after the existing ones. Nothing is dropped and
    /// insertion order is preserved.
    #[default]
    Extend,
    /// Discard the existing palette and start over with the new colors.
    Replace,
}

impl GlobalOption for PaletteMerge {
    fn apply(&self, options: &mut GlobalOptions) {
        options.palette_merge = *self;
    }
}

/// The chart title block.
#[derive(Serialize, Debug, Clone, Default)]
pub struct Title {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    subtext: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    left: Option<String>,
}

impl Title {
    /// Creates a title with the given main text.
    pub fn new(text: impl Into<String>) -> Title {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// Sets the subtitle shown under the main text.
    pub fn subtext(mut self, subtext: impl Into<String>) -> Title {
        self.subtext = Some(subtext.into());
        self
    }

    /// Horizontal placement, e.g. `"center"`.
    pub fn left(mut self, left: impl Into<String>) -> Title {
        self.left = Some(left.into());
        self
    }
}

impl GlobalOption for Title {
    fn apply(&self, options: &mut GlobalOptions) {
        options.title = Some(self.clone());
    }
}

/// The legend listing series categories.
#[derive(Serialize, Debug, Clone)]
pub struct Legend {
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    left: Option<String>,
    show: bool,
}

impl Legend {
    /// Creates a visible legend with no explicit entries; echarts derives
    /// the entries from the series data.
    pub fn new() -> Legend {
        Self {
            data: None,
            left: None,
            show: true,
        }
    }

    /// Restricts the legend to the given entries.
    pub fn data<I>(mut self, data: I) -> Legend
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.data = Some(data.into_iter().map(Into::into).collect());
        self
    }

    /// Horizontal placement, e.g. `"left"` or `"center"`.
    pub fn left(mut self, left: impl Into<String>) -> Legend {
        self.left = Some(left.into());
        self
    }

    /// Shows or hides the legend.
    pub fn show(mut self, show: bool) -> Legend {
        self.show = show;
        self
    }
}

impl Default for Legend {
    fn default() -> Self {
        Self::new()
    }
}

impl GlobalOption for Legend {
    fn apply(&self, options: &mut GlobalOptions) {
        options.legend = Some(self.clone());
    }
}

/// The hover tooltip.
#[derive(Serialize, Debug, Clone, Default)]
pub struct Tooltip {
    #[serde(skip_serializing_if = "Option::is_none")]
    trigger: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    formatter: Option<String>,
}

impl Tooltip {
    /// Creates a tooltip with the echarts defaults.
    pub fn new() -> Tooltip {
        Self::default()
    }

    /// What triggers the tooltip, e.g. `"item"` for per-wedge tooltips.
    pub fn trigger(mut self, trigger: impl Into<String>) -> Tooltip {
        self.trigger = Some(trigger.into());
        self
    }

    /// Content template, e.g. `"{a} <br/>{b}: {c} ({d}%)"`.
    pub fn formatter(mut self, formatter: impl Into<String>) -> Tooltip {
        self.formatter = Some(formatter.into());
        self
    }
}

impl GlobalOption for Tooltip {
    fn apply(&self, options: &mut GlobalOptions) {
        options.tooltip = Some(self.clone());
    }
}

/// An ordered list of series colors.
///
/// A palette flows into the document either through
/// [set_global_options](crate::chart::PieChart::set_global_options) or
/// alongside a series through an add call; both routes merge it according
/// to the configured [PaletteMerge] policy.
#[derive(Debug, Clone, Default)]
pub struct Palette(Vec<String>);

impl Palette {
    /// Creates a palette from colors in presentation order.
    pub fn new<I>(colors: I) -> Palette
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self(colors.into_iter().map(Into::into).collect())
    }
}

impl GlobalOption for Palette {
    fn apply(&self, options: &mut GlobalOptions) {
        options.merge_colors(&self.0);
    }
}

impl SeriesOption for Palette {
    fn apply(&self, _series: &mut PieSeries) {}

    fn colors(&self) -> Option<&[String]> {
        Some(&self.0)
    }
}

/// Page-level settings consumed by the HTML renderer rather than echarts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOptions {
    /// `<title>` of the generated page.
    pub page_title: String,
    /// Chart container width in pixels.
    pub width: u32,
    /// Chart container height in pixels.
    pub height: u32,
    /// Base URL the echarts script is loaded from. Must be an absolute
    /// http(s) URL ending with `/`; checked by
    /// [validate](crate::chart::PieChart::validate).
    pub asset_host: String,
    /// Name of a registered echarts theme, passed to `echarts.init`.
    pub theme: Option<String>,
}

impl InitOptions {
    const DEFAULT_ASSET_HOST: &str = "https://cdn.jsdelivr.net/npm/echarts@5/dist/";

    /// Creates the default page settings: a 900x500 container served the
    /// echarts script from the jsDelivr CDN.
    pub fn new() -> InitOptions {
        Self {
            page_title: String::from("Awesome charts"),
            width: 900,
            height: 500,
            asset_host: String::from(Self::DEFAULT_ASSET_HOST),
            theme: None,
        }
    }

    /// Sets the page title.
    pub fn page_title(mut self, page_title: impl Into<String>) -> InitOptions {
        self.page_title = page_title.into();
        self
    }

    /// Sets the container size in pixels.
    pub fn size(mut self, width: u32, height: u32) -> InitOptions {
        self.width = width;
        self.height = height;
        self
    }

    /// Overrides where the echarts script is loaded from.
    pub fn asset_host(mut self, asset_host: impl Into<String>) -> InitOptions {
        self.asset_host = asset_host.into();
        self
    }

    /// Renders with a registered echarts theme.
    pub fn theme(mut self, theme: impl Into<String>) -> InitOptions {
        self.theme = Some(theme.into());
        self
    }
}

impl Default for InitOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl GlobalOption for InitOptions {
    fn apply(&self, options: &mut GlobalOptions) {
        options.init = self.clone();
    }
}
