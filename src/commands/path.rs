//! `routegraph path` command - cheapest route between two nodes

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::{NodeRef, OutputFormat};
use crate::commands::dispatch::CommandContext;
use crate::commands::helpers::{node_record, print_json, NodeEntry};
use routegraph_core::error::Result;
use routegraph_core::format::format_distance;
use routegraph_core::graph::{shortest_paths, GraphStore, NodeIndex, ShortestPaths};
use routegraph_core::records::{self, or_dash};
use routegraph_core::trace_time;

/// A resolved route query
pub struct Route {
    pub from: NodeIndex,
    pub to: NodeIndex,
    pub distance: Option<f64>,
    pub hops: Vec<NodeIndex>,
}

impl Route {
    pub fn from_paths(paths: &ShortestPaths, to: NodeIndex) -> Self {
        Route {
            from: paths.source,
            to,
            distance: paths.distance(to),
            hops: paths.path_to(to).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
struct HopEntry<'a> {
    index: NodeIndex,
    label: &'a str,
    distance: Option<f64>,
}

#[derive(Debug, Serialize)]
struct PathReport<'a> {
    from: NodeEntry<'a>,
    to: NodeEntry<'a>,
    distance: Option<f64>,
    path: Vec<HopEntry<'a>>,
}

/// Execute the path command
pub fn execute(ctx: &CommandContext, from: &NodeRef, to: &NodeRef) -> Result<()> {
    let store = ctx.load_graph()?;
    let from = from.resolve(&store)?;
    let to = to.resolve(&store)?;
    let paths = shortest_paths(&store, from)?;
    let route = Route::from_paths(&paths, to);
    trace_time!(ctx.start, "path", hops = route.hops.len());

    match ctx.format {
        OutputFormat::Human => render_human(&store, &route, &mut io::stdout().lock())?,
        OutputFormat::Json => {
            let mut hops = Vec::with_capacity(route.hops.len());
            for &node in &route.hops {
                hops.push(HopEntry {
                    index: node,
                    label: store.label(node)?,
                    distance: paths.distance(node),
                });
            }
            print_json(&PathReport {
                from: NodeEntry::new(&store, from)?,
                to: NodeEntry::new(&store, to)?,
                distance: route.distance,
                path: hops,
            })?
        }
        OutputFormat::Records => {
            println!(
                "{}",
                records::header(
                    "path",
                    &[
                        ("from", from.to_string()),
                        ("to", to.to_string()),
                        ("distance", or_dash(route.distance.map(format_distance))),
                        ("hops", route.hops.len().to_string()),
                    ],
                )
            );
            for &node in &route.hops {
                println!(
                    "{} distance={}",
                    node_record(node, store.label(node)?),
                    or_dash(paths.distance(node).map(format_distance))
                );
            }
        }
    }

    Ok(())
}

pub fn render_human(store: &GraphStore, route: &Route, out: &mut dyn Write) -> Result<()> {
    let from = store.label(route.from)?;
    let to = store.label(route.to)?;

    let Some(distance) = route.distance else {
        writeln!(out, "No path from {} to {}", from, to)?;
        return Ok(());
    };

    writeln!(
        out,
        "Cheapest route from {} to {}: {} units",
        from,
        to,
        format_distance(distance)
    )?;
    let labels = route
        .hops
        .iter()
        .map(|&node| store.label(node))
        .collect::<Result<Vec<_>>>()?;
    writeln!(out, "{}", labels.join(" -> "))?;
    Ok(())
}
