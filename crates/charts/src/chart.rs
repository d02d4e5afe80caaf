//! The assembled chart document.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;
use crate::error::ValidationError;
use crate::options::GlobalOption;
use crate::options::GlobalOptions;
use crate::options::InitOptions;
use crate::series::PieSeries;
use crate::series::SeriesOption;

/// A fully assembled description of one pie chart, ready for rendering.
///
/// The document starts empty, accumulates series through [PieChart::add]
/// and [PieChart::add_sorted], and is handed to a renderer once assembled.
/// Series are append-only and their insertion order is the presentation
/// order. Serializing the document produces the echarts option object:
/// the global option fields first, then the `series` array.
#[derive(Serialize, Debug, Clone, Default)]
pub struct PieChart {
    #[serde(flatten)]
    options: GlobalOptions,
    series: Vec<PieSeries>,
}

impl PieChart {
    /// Creates an empty document.
    pub fn new() -> PieChart {
        Self {
            options: GlobalOptions::new(),
            series: Vec::new(),
        }
    }

    /// Appends a series built from `data` in the map's iteration order.
    ///
    /// The wedge order is unspecified because `HashMap` iteration order
    /// is; see [PieSeries::from_map]. Palette colors carried by `options`
    /// are merged into the document palette in option order.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        data: &HashMap<String, Value>,
        options: &[&dyn SeriesOption],
    ) -> &mut PieChart {
        let series = PieSeries::from_map(name, data, options);
        self.push(series, options)
    }

    /// Appends a series ordered by value, largest wedge first.
    pub fn add_sorted(
        &mut self,
        name: impl Into<String>,
        data: &HashMap<String, Value>,
        options: &[&dyn SeriesOption],
    ) -> &mut PieChart {
        let series = PieSeries::from_map_sorted(name, data, options);
        self.push(series, options)
    }

    fn push(&mut self, series: PieSeries, options: &[&dyn SeriesOption]) -> &mut PieChart {
        for option in options {
            if let Some(colors) = option.colors() {
                self.options.merge_colors(colors);
            }
        }
        self.series.push(series);
        self
    }

    /// Merges document-level options, applying them in the order given.
    ///
    /// Later calls override earlier ones for overlapping fields. No
    /// validation happens here; see [PieChart::validate].
    pub fn set_global_options(&mut self, options: &[&dyn GlobalOption]) -> &mut PieChart {
        for option in options {
            option.apply(&mut self.options);
        }
        self
    }

    /// The series in insertion order.
    pub fn series(&self) -> &[PieSeries] {
        &self.series
    }

    /// The page-level settings a renderer needs.
    pub fn init_options(&self) -> &InitOptions {
        &self.options.init
    }

    /// Checks that the document can be handed to a renderer.
    ///
    /// The only thing that can be wrong with an assembled document is a
    /// malformed asset host. A pure check: validating twice yields the
    /// same result.
    pub fn validate(&self) -> Result<()> {
        let host = &self.options.init.asset_host;

        if !host.starts_with("http://") && !host.starts_with("https://") {
            return Err(ValidationError::AssetHostScheme(host.clone()));
        }
        if !host.ends_with('/') {
            return Err(ValidationError::AssetHostNoTrailingSlash(host.clone()));
        }

        Ok(())
    }
}
