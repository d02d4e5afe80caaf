//! End-to-end rendering tests: assemble a document, render it, inspect
//! the page.

use std::collections::HashMap;
use std::io;
use std::io::Write;

use pievis_charts::chart::PieChart;
use pievis_charts::options::InitOptions;
use pievis_charts::options::Title;
use pievis_charts::series::PieStyle;
use pievis_charts::series::RoseType;
use pievis_html::error::RenderError;
use pievis_html::render::Render;
use serde_json::Value;
use serde_json::json;

fn fruit_sales() -> HashMap<String, Value> {
    HashMap::from([
        (String::from("Apples"), json!(32)),
        (String::from("Pears"), json!(17)),
        (String::from("Plums"), json!(24)),
    ])
}

#[test]
fn renders_a_self_contained_page() {
    let mut chart = PieChart::new();
    chart
        .set_global_options(&[&Title::new("Fruit sales")])
        .add_sorted("sales", &fruit_sales(), &[&PieStyle::new().rose_type(RoseType::Radius)]);

    let page = chart.render_to_string().unwrap();

    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("echarts.min.js"));
    assert!(page.contains("echarts.init"));
    // The option object is embedded unescaped, sorted largest wedge first.
    assert!(page.contains(r#""title":{"text":"Fruit sales"}"#));
    assert!(page.contains(r#""name":"sales","type":"pie","roseType":"radius""#));
    assert!(page.contains(r#"{"name":"Apples","value":32}"#));
}

#[test]
fn page_title_lands_in_the_head() {
    let mut chart = PieChart::new();
    chart.set_global_options(&[&InitOptions::new().page_title("Quarterly review")]);

    let page = chart.render_to_string().unwrap();

    assert!(page.contains("<title>Quarterly review</title>"));
}

#[test]
fn theme_is_passed_to_echarts_init() {
    let mut chart = PieChart::new();
    chart.set_global_options(&[&InitOptions::new().theme("dark")]);

    let page = chart.render_to_string().unwrap();

    assert!(page.contains(r#"echarts.init(container, "dark")"#));
}

#[test]
fn without_a_theme_init_takes_the_container_alone() {
    let chart = PieChart::new();

    let page = chart.render_to_string().unwrap();

    assert!(page.contains("echarts.init(container)"));
}

#[test]
fn every_sink_receives_the_same_bytes() {
    let mut chart = PieChart::new();
    chart.add_sorted("sales", &fruit_sales(), &[]);

    let mut sinks: Vec<Vec<u8>> = vec![Vec::new(), Vec::new()];
    chart.render(&mut sinks).unwrap();

    assert!(!sinks[0].is_empty());
    assert_eq!(sinks[0], sinks[1]);
}

#[test]
fn zero_sinks_is_allowed() {
    let mut chart = PieChart::new();
    chart.add("sales", &fruit_sales(), &[]);

    let mut sinks: Vec<Vec<u8>> = Vec::new();
    chart.render(&mut sinks).unwrap();
}

#[test]
fn malformed_asset_host_fails_before_anything_is_written() {
    let mut chart = PieChart::new();
    chart
        .add("sales", &fruit_sales(), &[])
        .set_global_options(&[&InitOptions::new().asset_host("ftp://cdn.example.com/")]);

    let mut sinks: Vec<Vec<u8>> = vec![Vec::new()];
    let error = chart.render(&mut sinks).unwrap_err();

    assert!(matches!(error, RenderError::Validation(_)));
    assert!(sinks[0].is_empty());
}

struct FailingSink;

impl Write for FailingSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn a_failing_sink_fails_the_render() {
    let mut chart = PieChart::new();
    chart.add("sales", &fruit_sales(), &[]);

    let mut sinks = [FailingSink];
    let error = chart.render(&mut sinks).unwrap_err();

    assert!(matches!(error, RenderError::Io(_)));
}

#[test]
fn documents_stay_usable_after_a_render() {
    let mut chart = PieChart::new();
    chart.add("before", &fruit_sales(), &[]);

    let first = chart.render_to_string().unwrap();

    chart.add("after", &fruit_sales(), &[]);
    let second = chart.render_to_string().unwrap();

    assert!(first.contains(r#""name":"before""#));
    assert!(second.contains(r#""name":"before""#));
    assert!(second.contains(r#""name":"after""#));
}
