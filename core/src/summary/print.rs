use std::io::{self, Write};
use std::time::Duration;

use crate::testjson::format::format_duration_as_seconds;
use crate::testjson::{Execution, FormatContext, TestCase};

use super::{SummarySection, SummarySections};

/// Writes the end-of-run summary: the enabled sections, then the `DONE` line.
pub fn print_summary(
    out: &mut dyn Write,
    execution: &Execution,
    sections: &SummarySections,
    ctx: &FormatContext,
) -> io::Result<()> {
    write_summary(out, execution, sections, ctx, execution.elapsed())
}

fn write_summary(
    out: &mut dyn Write,
    execution: &Execution,
    sections: &SummarySections,
    ctx: &FormatContext,
    elapsed: Duration,
) -> io::Result<()> {
    let palette = &ctx.palette;
    let with_output = sections.contains(SummarySection::Output);
    let failed = execution.failed();
    let skipped = execution.skipped();
    let errors = execution.errors();

    if sections.contains(SummarySection::Skipped) {
        let block = CaseBlock {
            header: palette.yellow("Skipped"),
            prefix: palette.yellow("SKIP"),
        };
        write_cases(out, execution, ctx, &block, &skipped, with_output)?;
    }
    if sections.contains(SummarySection::Failed) {
        let block = CaseBlock {
            header: palette.red("Failed"),
            prefix: palette.red("FAIL"),
        };
        write_cases(out, execution, ctx, &block, &failed, with_output)?;
    }
    if sections.contains(SummarySection::Errors) && !errors.is_empty() {
        writeln!(out, "{}", palette.red("\n=== Errors"))?;
        for line in errors {
            writeln!(out, "{line}")?;
        }
    }

    let status = if failed.is_empty() {
        "DONE".to_string()
    } else {
        palette.red("DONE")
    };
    writeln!(
        out,
        "\n{status} {} tests{}{}{} in {}",
        execution.total(),
        format_count(skipped.len(), "skipped", ""),
        format_count(failed.len(), "failure", "s"),
        format_count(errors.len(), "error", "s"),
        format_duration_as_seconds(elapsed, 3),
    )?;
    out.flush()
}

struct CaseBlock {
    header: String,
    prefix: String,
}

fn write_cases(
    out: &mut dyn Write,
    execution: &Execution,
    ctx: &FormatContext,
    block: &CaseBlock,
    cases: &[TestCase],
    with_output: bool,
) -> io::Result<()> {
    if cases.is_empty() {
        return Ok(());
    }
    writeln!(out, "\n=== {}", block.header)?;
    for tc in cases {
        writeln!(
            out,
            "=== {}: {} {} ({})",
            block.prefix,
            ctx.packages.relative(&tc.package),
            tc.test,
            format_duration_as_seconds(tc.elapsed, 2),
        )?;
        if with_output {
            out.write_all(execution.output(&tc.package, &tc.test).as_bytes())?;
        }
    }
    Ok(())
}

fn format_count(count: usize, category: &str, plural: &str) -> String {
    match count {
        0 => String::new(),
        1 => format!(", {count} {category}"),
        _ => format!(", {count} {category}{plural}"),
    }
}
