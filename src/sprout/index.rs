//! # Display Indexing
//!
//! Plants are identified by a stable [`PlantId`](crate::model::PlantId) in the
//! store, but users refer to them by their position in the list they are
//! looking at. That list is a *projection*: the store's collection filtered
//! by sunlight and optionally sorted by watering frequency.
//!
//! [`project`] builds the projection and numbers it from 1. Commands that
//! take user indexes resolve them against the same projection the user saw
//! (same filter, same sort), so "2" always means the second card on screen.
//!
//! The store is never touched here: projection allocates a fresh list.

use crate::model::Plant;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A user-facing, 1-based position in a projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(pub usize);

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(0) => Err("Indexes start at 1".to_string()),
            Ok(n) => Ok(DisplayIndex(n)),
            Err(_) => Err(format!("Invalid index format: {}", s)),
        }
    }
}

/// Widest range a single argument may name.
pub const MAX_RANGE_LEN: usize = 10_000;

/// Parses a single index ("3") or an inclusive range ("2-4").
pub fn parse_index_or_range(s: &str) -> Result<Vec<DisplayIndex>, String> {
    if let Some((start, end)) = s.split_once('-') {
        if start.is_empty() {
            return Err(format!("Invalid index format: {}", s));
        }
        let start = DisplayIndex::from_str(start)?;
        let end = DisplayIndex::from_str(end)?;
        if start > end {
            return Err(format!(
                "Invalid range: start ({}) must be <= end ({})",
                start, end
            ));
        }
        if end.0 - start.0 >= MAX_RANGE_LEN {
            return Err(format!(
                "Invalid range: {} spans more than {} plants",
                s, MAX_RANGE_LEN
            ));
        }
        return Ok((start.0..=end.0).map(DisplayIndex).collect());
    }

    DisplayIndex::from_str(s).map(|idx| vec![idx])
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    None,
    Asc,
    Desc,
}

impl SortOrder {
    pub fn next(self) -> Self {
        match self {
            SortOrder::None => SortOrder::Asc,
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::None,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SortOrder::None => "none",
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        };
        f.write_str(s)
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(SortOrder::None),
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(format!("Unknown sort order: {} (use none, asc or desc)", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SunlightFilter {
    #[default]
    All,
    Only(String),
}

impl SunlightFilter {
    pub fn matches(&self, plant: &Plant) -> bool {
        match self {
            SunlightFilter::All => true,
            SunlightFilter::Only(value) => plant.sunlight == *value,
        }
    }

    /// Steps through `All` and then each option in turn.
    pub fn next(&self, options: &[String]) -> Self {
        let next = match self {
            SunlightFilter::All => options.first(),
            SunlightFilter::Only(v) => options
                .iter()
                .position(|o| o == v)
                .and_then(|i| options.get(i + 1)),
        };
        next.map(|o| SunlightFilter::Only(o.clone()))
            .unwrap_or(SunlightFilter::All)
    }
}

impl fmt::Display for SunlightFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SunlightFilter::All => f.write_str("All"),
            SunlightFilter::Only(v) => f.write_str(v),
        }
    }
}

impl FromStr for SunlightFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(SunlightFilter::All)
        } else {
            Ok(SunlightFilter::Only(s.to_string()))
        }
    }
}

/// The filter and sort a list was shown with. Indexes typed by the user
/// are resolved against the same view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListView {
    pub filter: SunlightFilter,
    pub sort: SortOrder,
}

impl ListView {
    pub fn new(filter: SunlightFilter, sort: SortOrder) -> Self {
        Self { filter, sort }
    }

    pub fn project(&self, plants: &[Plant]) -> Vec<DisplayPlant> {
        project(plants, &self.filter, self.sort)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayPlant {
    pub plant: Plant,
    pub index: DisplayIndex,
}

/// Filters and sorts `plants` into a numbered list. Sorting is stable, so
/// plants with equal frequency keep their relative order.
pub fn project(plants: &[Plant], filter: &SunlightFilter, sort: SortOrder) -> Vec<DisplayPlant> {
    let mut selected: Vec<&Plant> = plants.iter().filter(|p| filter.matches(p)).collect();

    match sort {
        SortOrder::None => {}
        SortOrder::Asc => selected.sort_by_key(|p| p.watering_frequency),
        SortOrder::Desc => selected.sort_by(|a, b| b.watering_frequency.cmp(&a.watering_frequency)),
    }

    selected
        .into_iter()
        .enumerate()
        .map(|(i, plant)| DisplayPlant {
            plant: plant.clone(),
            index: DisplayIndex(i + 1),
        })
        .collect()
}
