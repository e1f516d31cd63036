//! Cobertura XML format parser

use anyhow::{Context, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::fs;
use std::path::Path;

use super::{ClassCoverage, CoverageData};

/// Parse a Cobertura XML file
pub fn parse_cobertura(path: &Path) -> Result<CoverageData> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read coverage report '{}'", path.display()))?;
    parse_cobertura_string(&content)
        .with_context(|| format!("failed to parse '{}' as Cobertura XML", path.display()))
}

/// Parse Cobertura XML content from a string
///
/// Overall rates come from the root element's `line-rate`/`branch-rate`
/// attributes; per-file records come from `<class>` elements nested as
/// `packages > package > classes > class`. Missing or non-numeric rate
/// attributes default to 0.
pub fn parse_cobertura_string(content: &str) -> Result<CoverageData> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    let mut data = CoverageData::default();
    let mut classes: Vec<ClassCoverage> = Vec::new();
    let mut root_seen = false;

    // Open-element stack; stack[0] is the document root.
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                collect_element(e, &stack, &mut root_seen, &mut data, &mut classes);
                stack.push(e.name().as_ref().to_vec());
            }
            Ok(Event::Empty(ref e)) => {
                collect_element(e, &stack, &mut root_seen, &mut data, &mut classes);
            }
            Ok(Event::End(_)) => {
                stack.pop();
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "malformed XML at byte {}: {}",
                    reader.buffer_position(),
                    e
                ))
            }
            _ => {}
        }
        buf.clear();
    }

    classes.sort_by(ClassCoverage::by_filename);
    data.classes = classes;
    Ok(data)
}

fn collect_element(
    e: &BytesStart,
    stack: &[Vec<u8>],
    root_seen: &mut bool,
    data: &mut CoverageData,
    classes: &mut Vec<ClassCoverage>,
) {
    if stack.is_empty() {
        // Document root: overall rates, whatever the element is called.
        // Only the first top-level element counts as the root.
        if !*root_seen {
            *root_seen = true;
            data.line_coverage = float_attr(e, b"line-rate", 0.0) * 100.0;
            data.branch_coverage = float_attr(e, b"branch-rate", 0.0) * 100.0;
        }
        return;
    }

    if e.name().as_ref() == b"class" && at_class_path(stack) {
        classes.push(ClassCoverage {
            filename: string_attr(e, b"filename"),
            line_coverage: float_attr(e, b"line-rate", 0.0) * 100.0,
            branch_coverage: float_attr(e, b"branch-rate", 0.0) * 100.0,
        });
    }
}

/// True when the open elements are exactly `root > packages > package > classes`.
fn at_class_path(stack: &[Vec<u8>]) -> bool {
    stack.len() == 4
        && stack[1] == b"packages"
        && stack[2] == b"package"
        && stack[3] == b"classes"
}

/// Read an attribute as a float, defaulting when absent or non-numeric.
fn float_attr(e: &BytesStart, name: &[u8], default: f64) -> f64 {
    e.attributes()
        .filter_map(|a| a.ok())
        .find(|a| a.key.as_ref() == name)
        .and_then(|a| String::from_utf8_lossy(&a.value).parse::<f64>().ok())
        .unwrap_or(default)
}

/// Read an attribute as a string, defaulting to empty when absent.
/// Entity references are unescaped (`&amp;` reads as `&`).
fn string_attr(e: &BytesStart, name: &[u8]) -> String {
    e.attributes()
        .filter_map(|a| a.ok())
        .find(|a| a.key.as_ref() == name)
        .map(|a| match a.unescape_value() {
            Ok(value) => value.into_owned(),
            Err(_) => String::from_utf8_lossy(&a.value).into_owned(),
        })
        .unwrap_or_default()
}
