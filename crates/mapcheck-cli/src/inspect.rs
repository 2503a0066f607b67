//! # Inspect Subcommand
//!
//! Summarizes a map without judging it: record counts, continent
//! membership with bonuses, each territory's neighbors, and optionally which
//! border lies under a given point.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use mapcheck_core::{BorderId, ContinentId, MapData, Point, TerritoryId};
use mapcheck_geometry::border_at;
use mapcheck_validate::ValidationConfig;
use serde::Serialize;

/// Arguments for the `mapcheck inspect` subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Map document to inspect.
    #[arg(value_name = "MAP")]
    pub map: PathBuf,

    /// Report the border passing near this point, given as `X,Y`.
    #[arg(long, value_name = "X,Y", value_parser = parse_point)]
    pub at: Option<Point>,

    /// Print the summary as JSON.
    #[arg(long)]
    pub json: bool,
}

/// One continent's membership.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContinentSummary {
    pub id: ContinentId,
    pub name: String,
    pub bonus: u32,
    pub territories: Vec<TerritoryId>,
}

/// Everything `inspect` reports about a map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapSummary {
    pub name: String,
    pub territory_count: usize,
    pub border_count: usize,
    pub continents: Vec<ContinentSummary>,
    pub neighbors: BTreeMap<TerritoryId, Vec<TerritoryId>>,
    /// Border found by the `--at` query, if one was asked for and hit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_at: Option<BorderId>,
}

impl MapSummary {
    /// Summarize `map`, hit-testing `at` within `tolerance` when given.
    pub fn build(map: &MapData, at: Option<Point>, tolerance: f64) -> Self {
        let continents = map
            .continents
            .values()
            .map(|c| ContinentSummary {
                id: c.id.clone(),
                name: c.name.clone(),
                bonus: c.bonus,
                territories: c.territories.clone(),
            })
            .collect();

        let neighbors = map
            .territories
            .keys()
            .map(|id| (id.clone(), map.neighbors(id).into_iter().cloned().collect()))
            .collect();

        Self {
            name: map.metadata.name.clone(),
            territory_count: map.territories.len(),
            border_count: map.borders.len(),
            continents,
            neighbors,
            border_at: at.and_then(|p| border_at(map, p, tolerance)).map(|b| b.id.clone()),
        }
    }

    /// Plain-text rendering.
    pub fn render(&self, at: Option<Point>) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{}: {} territories, {} borders, {} continents",
            self.name,
            self.territory_count,
            self.border_count,
            self.continents.len()
        );

        for continent in &self.continents {
            let members: Vec<&str> = continent.territories.iter().map(|t| t.as_str()).collect();
            let _ = writeln!(
                out,
                "  {} (+{}): {}",
                continent.name,
                continent.bonus,
                members.join(", ")
            );
        }

        for (territory, neighbors) in &self.neighbors {
            let names: Vec<&str> = neighbors.iter().map(|t| t.as_str()).collect();
            let _ = writeln!(out, "  {territory} -> {}", names.join(", "));
        }

        if let Some(point) = at {
            match &self.border_at {
                Some(border) => {
                    let _ = writeln!(out, "At ({}, {}): {border}", point.x, point.y);
                }
                None => {
                    let _ = writeln!(out, "At ({}, {}): no border", point.x, point.y);
                }
            }
        }
        out
    }
}

/// Execute the inspect subcommand. Always returns exit code 0.
pub fn run_inspect(args: &InspectArgs, config: &ValidationConfig) -> Result<u8> {
    let map = crate::read_map(&args.map)?;
    let summary = MapSummary::build(&map, args.at, config.edge_tolerance);

    if args.json {
        let json = serde_json::to_string_pretty(&summary).context("failed to encode summary")?;
        println!("{json}");
    } else {
        print!("{}", summary.render(args.at));
    }
    Ok(0)
}

/// Parse an `X,Y` coordinate pair.
pub fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{s}'"))?;
    let coord = |v: &str| {
        v.trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| format!("'{}' is not a coordinate", v.trim()))
    };
    Ok(Point::new(coord(x)?, coord(y)?))
}
