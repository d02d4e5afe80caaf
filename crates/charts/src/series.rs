//! Pie series and their display options.

use std::collections::HashMap;

use serde::Serialize;
use serde::Serializer;
use serde_json::Value;

use crate::data::PieSlice;
use crate::data::coerced_value;

/// Chart type tag attached to every series.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    /// Wedges of a pie.
    #[default]
    Pie,
}

/// Nightingale rose mode for a pie series.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RoseType {
    /// The wedge angle encodes the share of the total and the radius
    /// encodes the value.
    Radius,
    /// All wedge angles are equal; only the radius varies with the value.
    Area,
}

/// A length expressed in pixels or as a percentage of the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    /// An absolute length in pixels, serialized as a bare number.
    Pixels(f64),
    /// A relative length, serialized as an `"NN%"` string.
    Percent(f64),
}

impl Serialize for Dimension {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Dimension::Pixels(v) => serializer.serialize_f64(*v),
            Dimension::Percent(p) => serializer.collect_str(&format_args!("{p}%")),
        }
    }
}

/// The center of the pie as an `[x, y]` pair.
///
/// Percentages are relative to the container width for `x` and to the
/// container height for `y`.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Center(pub Dimension, pub Dimension);

/// The radius of the pie.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(untagged)]
pub enum Radius {
    /// The outer radius alone. A percentage is relative to the smaller of
    /// the container width and height.
    Outer(Dimension),
    /// Inner and outer radii, which turn the pie into a ring.
    Ring(Dimension, Dimension),
}

/// One named dataset destined for one pie, with its display options.
#[derive(Serialize, Debug, Clone)]
pub struct PieSeries {
    /// Series name, used by tooltips and legend filtering.
    pub name: String,
    #[serde(rename = "type")]
    kind: SeriesKind,
    #[serde(rename = "roseType", skip_serializing_if = "Option::is_none")]
    pub(crate) rose_type: Option<RoseType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) center: Option<Center>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) radius: Option<Radius>,
    /// Wedges in presentation order.
    pub data: Vec<PieSlice>,
}

impl PieSeries {
    /// Builds a series from a mapping, in the map's iteration order.
    ///
    /// `HashMap` iteration order is unspecified, so the wedge order of the
    /// resulting series is unspecified too. Use [PieSeries::from_map_sorted]
    /// when the order matters.
    pub fn from_map(
        name: impl Into<String>,
        data: &HashMap<String, Value>,
        options: &[&dyn SeriesOption],
    ) -> PieSeries {
        let slices = data
            .iter()
            .map(|(name, value)| PieSlice::new(name.clone(), value.clone()))
            .collect();

        Self::from_slices(name, slices, options)
    }

    /// Builds a series ordered by value, largest wedge first.
    ///
    /// Values are compared after [coerced_value] conversion. The sort is
    /// not stable: entries with equal coerced values end up in arbitrary
    /// relative order.
    pub fn from_map_sorted(
        name: impl Into<String>,
        data: &HashMap<String, Value>,
        options: &[&dyn SeriesOption],
    ) -> PieSeries {
        let mut slices: Vec<PieSlice> = data
            .iter()
            .map(|(name, value)| PieSlice::new(name.clone(), value.clone()))
            .collect();

        slices.sort_unstable_by(|a, b| {
            coerced_value(&b.value).total_cmp(&coerced_value(&a.value))
        });

        Self::from_slices(name, slices, options)
    }

    fn from_slices(
        name: impl Into<String>,
        data: Vec<PieSlice>,
        options: &[&dyn SeriesOption],
    ) -> PieSeries {
        let mut series = PieSeries {
            name: name.into(),
            kind: SeriesKind::Pie,
            rose_type: None,
            center: None,
            radius: None,
            data,
        };

        for option in options {
            option.apply(&mut series);
        }

        series
    }
}

/// A capability for mutating the display options of a single series.
///
/// Options are applied in the order they are passed; when two options set
/// the same field, the later one wins.
pub trait SeriesOption {
    /// Writes the option's fields into the series.
    fn apply(&self, series: &mut PieSeries);

    /// Colors this option contributes to the document palette, if any.
    fn colors(&self) -> Option<&[String]> {
        None
    }
}

/// Pie display options: rose mode, center and radius.
///
/// A style only overrides the fields it sets, so styles compose: a later
/// style with an unset center leaves an earlier center in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieStyle {
    rose_type: Option<RoseType>,
    center: Option<Center>,
    radius: Option<Radius>,
}

impl PieStyle {
    /// Creates a style that sets nothing.
    pub fn new() -> PieStyle {
        Self::default()
    }

    /// Renders the series as a Nightingale rose.
    pub fn rose_type(mut self, rose_type: RoseType) -> PieStyle {
        self.rose_type = Some(rose_type);
        self
    }

    /// Places the center of the pie.
    pub fn center(mut self, center: Center) -> PieStyle {
        self.center = Some(center);
        self
    }

    /// Sets the outer radius, or the inner and outer radii of a ring.
    pub fn radius(mut self, radius: Radius) -> PieStyle {
        self.radius = Some(radius);
        self
    }
}

impl SeriesOption for PieStyle {
    fn apply(&self, series: &mut PieSeries) {
        if let Some(rose_type) = self.rose_type {
            series.rose_type = Some(rose_type);
        }
        if let Some(center) = self.center {
            series.center = Some(center);
        }
        if let Some(radius) = self.radius {
            series.radius = Some(radius);
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample() -> HashMap<String, Value> {
        HashMap::from([
            (String::from("A"), json!(10)),
            (String::from("B"), json!(30)),
            (String::from("C"), json!(20)),
        ])
    }

    fn names(series: &PieSeries) -> Vec<&str> {
        series.data.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn sorted_build_orders_by_descending_value() {
        let series = PieSeries::from_map_sorted("sales", &sample(), &[]);

        assert_eq!(names(&series), ["B", "C", "A"]);
    }

    #[test]
    fn unsorted_build_keeps_every_entry() {
        let data = sample();
        let series = PieSeries::from_map("sales", &data, &[]);

        assert_eq!(series.data.len(), data.len());
        for slice in &series.data {
            assert_eq!(data.get(&slice.name), Some(&slice.value));
        }
    }

    #[test]
    fn empty_map_builds_an_empty_series() {
        let data = HashMap::new();

        assert!(PieSeries::from_map("empty", &data, &[]).data.is_empty());
        assert!(PieSeries::from_map_sorted("empty", &data, &[]).data.is_empty());
    }

    #[test]
    fn non_numeric_values_sort_as_zero() {
        let data = HashMap::from([
            (String::from("X"), json!("not-a-number")),
            (String::from("Y"), json!(5)),
        ]);
        let series = PieSeries::from_map_sorted("odd", &data, &[]);

        assert_eq!(names(&series), ["Y", "X"]);
    }

    #[test]
    fn single_non_numeric_value_still_builds() {
        let data = HashMap::from([(String::from("X"), json!("not-a-number"))]);
        let series = PieSeries::from_map_sorted("odd", &data, &[]);

        assert_eq!(names(&series), ["X"]);
    }

    #[test]
    fn later_style_wins_per_field() {
        let first = PieStyle::new()
            .rose_type(RoseType::Radius)
            .center(Center(Dimension::Percent(25.0), Dimension::Percent(50.0)));
        let second = PieStyle::new()
            .center(Center(Dimension::Percent(75.0), Dimension::Percent(50.0)));

        let data = sample();
        let series = PieSeries::from_map("styled", &data, &[&first, &second]);

        // The second style left the rose type untouched.
        assert_eq!(series.rose_type, Some(RoseType::Radius));
        assert_eq!(
            series.center,
            Some(Center(Dimension::Percent(75.0), Dimension::Percent(50.0)))
        );
    }

    #[test]
    fn series_serializes_into_echarts_shape() {
        let data = HashMap::from([(String::from("A"), json!(10))]);
        let style = PieStyle::new()
            .rose_type(RoseType::Area)
            .center(Center(Dimension::Percent(50.0), Dimension::Percent(50.0)))
            .radius(Radius::Ring(Dimension::Pixels(0.0), Dimension::Percent(75.0)));
        let series = PieSeries::from_map("sales", &data, &[&style]);

        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(
            json,
            json!({
                "name": "sales",
                "type": "pie",
                "roseType": "area",
                "center": ["50%", "50%"],
                "radius": [0.0, "75%"],
                "data": [{ "name": "A", "value": 10 }],
            })
        );
    }

    #[test]
    fn unset_display_options_are_omitted() {
        let data = HashMap::from([(String::from("A"), json!(10))]);
        let series = PieSeries::from_map("plain", &data, &[]);

        let json = serde_json::to_value(&series).unwrap();
        assert_eq!(
            json,
            json!({
                "name": "plain",
                "type": "pie",
                "data": [{ "name": "A", "value": 10 }],
            })
        );
    }
}
