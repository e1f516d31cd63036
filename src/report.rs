use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::coverage::CoverageData;

/// Render and write the Markdown coverage report
pub fn write_report(data: &CoverageData, output_path: &Path) -> Result<()> {
    let markdown = render_markdown(data);
    fs::write(output_path, markdown)
        .with_context(|| format!("failed to write report to '{}'", output_path.display()))?;
    Ok(())
}

/// Build the Markdown summary document.
///
/// The "Overall ..." lines and the "## File Coverage" heading carry two
/// trailing spaces (Markdown hard line breaks); the document ends with a
/// single trailing newline.
pub fn render_markdown(data: &CoverageData) -> String {
    let mut md = String::new();

    md.push_str("# Coverage Report\n\n");
    md.push_str(&format!(
        "**Overall Line Coverage:** {:.2}%  \n",
        data.line_coverage
    ));
    md.push_str(&format!(
        "**Overall Branch Coverage:** {:.2}%  \n",
        data.branch_coverage
    ));
    md.push_str("\n## File Coverage  \n\n");
    md.push_str("| File | Line Coverage | Branch Coverage |\n");
    md.push_str("| ---- | ------------- | --------------- |\n");

    for class in &data.classes {
        md.push_str(&format!(
            "| {} | {:.2}% | {:.2}% |\n",
            class.filename, class.line_coverage, class.branch_coverage
        ));
    }

    md
}
