//! Text and JSON renderings of catalog results.

use std::io::{self, Write};

use hypno_core::{Catalog, FilterOutcome};
use hypno_model::ProjectRecord;
use serde_json::json;

/// Column widths of the table view, sized for the built-in catalog.
const TITLE_WIDTH: usize = 18;
const STATUS_WIDTH: usize = 11;
const PLATFORM_WIDTH: usize = 15;
const CATEGORY_WIDTH: usize = 13;

/// `"1 project"`, `"3 projects"`.
pub fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

pub fn write_row(
    out: &mut impl Write,
    project: &ProjectRecord,
    tag_preview: usize,
) -> io::Result<()> {
    writeln!(
        out,
        "{:>3}  {:<tw$}  {:<sw$}  {:<pw$}  {:<cw$}  {}",
        project.id.value(),
        project.title,
        project.status.label(),
        project.platform,
        project.category,
        project.tag_preview(tag_preview).join(", "),
        tw = TITLE_WIDTH,
        sw = STATUS_WIDTH,
        pw = PLATFORM_WIDTH,
        cw = CATEGORY_WIDTH,
    )
}

pub fn write_table<'a>(
    out: &mut impl Write,
    projects: impl IntoIterator<Item = &'a ProjectRecord>,
    tag_preview: usize,
) -> io::Result<usize> {
    let mut count = 0;
    for project in projects {
        write_row(out, project, tag_preview)?;
        count += 1;
    }
    Ok(count)
}

pub fn write_json<'a>(
    out: &mut impl Write,
    projects: impl IntoIterator<Item = &'a ProjectRecord>,
) -> io::Result<()> {
    let projects: Vec<&ProjectRecord> = projects.into_iter().collect();
    serde_json::to_writer_pretty(&mut *out, &projects)?;
    writeln!(out)
}

pub fn write_outcome_table(
    out: &mut impl Write,
    outcome: &FilterOutcome<'_>,
    tag_preview: usize,
) -> io::Result<()> {
    write_table(out, outcome.iter(), tag_preview)?;
    writeln!(out, "{outcome}")
}

pub fn write_outcome_json(
    out: &mut impl Write,
    outcome: &FilterOutcome<'_>,
) -> io::Result<()> {
    let body = json!({
        "filter": outcome.filter,
        "query": outcome.filter.to_query_string(),
        "count": outcome.len(),
        "projects": outcome.projects,
    });
    serde_json::to_writer_pretty(&mut *out, &body)?;
    writeln!(out)
}

/// Full card for a single project.
pub fn write_details(
    out: &mut impl Write,
    project: &ProjectRecord,
) -> io::Result<()> {
    writeln!(out, "#{} {}", project.id, project.title)?;
    writeln!(out, "  {}", project.summary())?;
    writeln!(out)?;
    writeln!(out, "  {}", project.description)?;
    writeln!(out)?;
    writeln!(out, "  status:    {}", project.status)?;
    writeln!(out, "  platform:  {}", project.platform)?;
    writeln!(out, "  category:  {}", project.category)?;
    writeln!(out, "  launch:    {}", project.launch_date)?;
    writeln!(out, "  tags:      {}", project.tags.join(", "))?;
    writeln!(
        out,
        "  players:   {}   revenue: {}   rating: {}",
        project.stats.players, project.stats.revenue, project.stats.rating
    )?;
    if project.featured {
        writeln!(out, "  featured")?;
    }
    Ok(())
}

/// Facet option lists, each followed by the values present in `catalog`.
pub fn write_facets(out: &mut impl Write, catalog: &Catalog) -> io::Result<()> {
    let sections = [
        (
            "categories",
            Catalog::category_options(),
            catalog.observed_categories(),
        ),
        (
            "statuses",
            Catalog::status_options(),
            catalog.observed_statuses(),
        ),
        (
            "platforms",
            Catalog::platform_options(),
            catalog.observed_platforms(),
        ),
    ];
    for (name, options, observed) in sections {
        writeln!(out, "{name}: {}", options.join(", "))?;
        writeln!(out, "  in catalog: {}", observed.join(", "))?;
    }
    Ok(())
}

pub fn write_facets_json(
    out: &mut impl Write,
    catalog: &Catalog,
) -> io::Result<()> {
    let body = json!({
        "categories": {
            "options": Catalog::category_options(),
            "observed": catalog.observed_categories(),
        },
        "statuses": {
            "options": Catalog::status_options(),
            "observed": catalog.observed_statuses(),
        },
        "platforms": {
            "options": Catalog::platform_options(),
            "observed": catalog.observed_platforms(),
        },
    });
    serde_json::to_writer_pretty(&mut *out, &body)?;
    writeln!(out)
}
