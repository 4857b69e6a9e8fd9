//! Line range settings such as `1,3-5,8`.
//!
//! ```text
//! ranges := token (',' token)*
//! token  := INT | INT '-' INT
//! ```
//!
//! Whitespace around numbers is ignored. Tokens that are malformed, zero, or
//! reversed (`5-3`) are skipped rather than rejected, so a typo in one token
//! never disables the rest of the setting.

use std::convert::Infallible;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// A set of 1-based line numbers, stored as sorted, merged inclusive ranges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineRanges {
    ranges: Vec<RangeInclusive<u32>>,
}

impl LineRanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(setting: &str) -> Self {
        let ranges = setting.split(',').filter_map(|token| {
            let token = token.trim();
            if token.is_empty() {
                return None;
            }
            let parsed = parse_token(token);
            if parsed.is_none() {
                log::debug!("skipping line range token {token:?}");
            }
            parsed
        });
        Self::from_ranges(ranges)
    }

    /// Build from arbitrary ranges; empty ranges and line 0 are dropped.
    pub fn from_ranges(ranges: impl IntoIterator<Item = RangeInclusive<u32>>) -> Self {
        let mut sorted: Vec<_> = ranges
            .into_iter()
            .filter_map(|range| {
                let start = (*range.start()).max(1);
                (start <= *range.end()).then(|| start..=*range.end())
            })
            .collect();
        sorted.sort_by_key(|range| *range.start());

        let mut merged: Vec<RangeInclusive<u32>> = Vec::with_capacity(sorted.len());
        for range in sorted {
            match merged.last_mut() {
                Some(last) if *range.start() <= last.end().saturating_add(1) => {
                    let end = (*last.end()).max(*range.end());
                    *last = *last.start()..=end;
                }
                _ => merged.push(range),
            }
        }

        Self { ranges: merged }
    }

    pub fn contains(&self, line: u32) -> bool {
        let idx = self.ranges.partition_point(|range| *range.end() < line);
        self.ranges
            .get(idx)
            .is_some_and(|range| range.contains(&line))
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn ranges(&self) -> &[RangeInclusive<u32>] {
        &self.ranges
    }

    /// Every line number in the set, ascending.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.ranges.iter().flat_map(|range| range.clone())
    }
}

fn parse_token(token: &str) -> Option<RangeInclusive<u32>> {
    let (start, end) = match token.split_once('-') {
        Some((start, end)) => (parse_line(start)?, parse_line(end)?),
        None => {
            let line = parse_line(token)?;
            (line, line)
        }
    };
    (start <= end).then_some(start..=end)
}

fn parse_line(text: &str) -> Option<u32> {
    text.trim().parse().ok().filter(|&line| line > 0)
}

impl FromStr for LineRanges {
    type Err = Infallible;

    fn from_str(setting: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(setting))
    }
}

impl fmt::Display for LineRanges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, range) in self.ranges.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            if range.start() == range.end() {
                write!(f, "{}", range.start())?;
            } else {
                write!(f, "{}-{}", range.start(), range.end())?;
            }
        }
        Ok(())
    }
}
