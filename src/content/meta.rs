//! Metadata extraction chain
//!
//! A post's title, date and series position come from an ordered list of
//! strategies. Each one looks at the file and returns whatever fields it can
//! find; earlier strategies win field by field:
//!
//! 1. [`Strategy::FrontMatter`] - the YAML block at the top of the file
//! 2. [`Strategy::TilDate`] - `YYYY.MM.DD` in a TIL file name
//! 3. [`Strategy::SeriesName`] - `<series> <order> : <title>` in a series file name
//! 4. [`Strategy::FileName`] - the file name itself, as a last resort title

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

use super::{Category, FrontMatter};
use crate::helpers::parse_date_string;

lazy_static! {
    static ref TIL_DATE: Regex = Regex::new(r"(\d{4})\.(\d{2})\.(\d{2})").unwrap();
    static ref SERIES_NAME: Regex = Regex::new(r"^(.+?)\s+(\d+)\s*:\s*(.+)$").unwrap();
}

/// Fields a strategy managed to extract
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialMeta {
    pub title: Option<String>,
    pub date: Option<NaiveDate>,
    pub series: Option<String>,
    pub series_order: Option<u32>,
}

impl PartialMeta {
    /// Fill the fields still missing in `self` from `fallback`
    pub fn or(self, fallback: PartialMeta) -> PartialMeta {
        PartialMeta {
            title: self.title.or(fallback.title),
            date: self.date.or(fallback.date),
            series: self.series.or(fallback.series),
            series_order: self.series_order.or(fallback.series_order),
        }
    }
}

/// What a strategy gets to look at
#[derive(Debug, Clone, Copy)]
pub struct FileContext<'a> {
    /// File name without extension
    pub stem: &'a str,
    pub category: Category,
    pub front_matter: &'a FrontMatter,
}

/// A named metadata source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    FrontMatter,
    TilDate,
    SeriesName,
    FileName,
}

impl Strategy {
    /// The extraction order; earlier entries take precedence
    pub const CHAIN: [Strategy; 4] = [
        Strategy::FrontMatter,
        Strategy::TilDate,
        Strategy::SeriesName,
        Strategy::FileName,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::FrontMatter => "front-matter",
            Strategy::TilDate => "til-date",
            Strategy::SeriesName => "series-name",
            Strategy::FileName => "file-name",
        }
    }

    /// Run this strategy against a file
    pub fn extract(&self, ctx: &FileContext<'_>) -> PartialMeta {
        match self {
            Strategy::FrontMatter => from_front_matter(ctx),
            Strategy::TilDate if ctx.category == Category::Til => from_til_date(ctx.stem),
            Strategy::SeriesName if ctx.category == Category::Series => {
                from_series_name(ctx.stem)
            }
            Strategy::TilDate | Strategy::SeriesName => PartialMeta::default(),
            Strategy::FileName => from_file_name(ctx.stem),
        }
    }
}

/// Run the whole chain and merge the results
pub fn resolve(ctx: &FileContext<'_>) -> PartialMeta {
    Strategy::CHAIN
        .iter()
        .fold(PartialMeta::default(), |acc, strategy| {
            let found = strategy.extract(ctx);
            if found != PartialMeta::default() {
                tracing::trace!("{}: {} -> {:?}", ctx.stem, strategy.name(), found);
            }
            acc.or(found)
        })
}

fn from_front_matter(ctx: &FileContext<'_>) -> PartialMeta {
    let fm = ctx.front_matter;

    let date = fm.date.as_deref().and_then(|raw| {
        let parsed = parse_date_string(raw);
        if parsed.is_none() {
            tracing::warn!("{}: unrecognized front-matter date {:?}", ctx.stem, raw);
        }
        parsed
    });

    PartialMeta {
        title: fm.title().map(str::to_string),
        date,
        series: fm.series().map(str::to_string),
        series_order: fm.series_order,
    }
}

fn from_til_date(stem: &str) -> PartialMeta {
    let Some(caps) = TIL_DATE.captures(stem) else {
        return PartialMeta::default();
    };
    let (y, m, d) = (&caps[1], &caps[2], &caps[3]);

    let date = match (y.parse::<i32>(), m.parse::<u32>(), d.parse::<u32>()) {
        (Ok(y), Ok(m), Ok(d)) => NaiveDate::from_ymd_opt(y, m, d),
        _ => None,
    };
    let Some(date) = date else {
        return PartialMeta::default();
    };

    PartialMeta {
        title: Some(format!("TIL - {}.{}.{}", y, m, d)),
        date: Some(date),
        ..Default::default()
    }
}

fn from_series_name(stem: &str) -> PartialMeta {
    let Some(caps) = SERIES_NAME.captures(stem) else {
        return PartialMeta::default();
    };
    let order = caps[2].parse::<u32>().ok();
    if order.is_none() {
        tracing::warn!("Series number {} in {:?} is out of range, ignoring it", &caps[2], stem);
    }

    PartialMeta {
        title: Some(format!("{} {} : {}", &caps[1], &caps[2], &caps[3])),
        series: Some(caps[1].to_string()),
        series_order: order,
        ..Default::default()
    }
}

fn from_file_name(stem: &str) -> PartialMeta {
    let title = stem.replace(['-', '_'], " ");
    PartialMeta {
        title: Some(title).filter(|t| !t.trim().is_empty()),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx<'a>(stem: &'a str, category: Category, fm: &'a FrontMatter) -> FileContext<'a> {
        FileContext {
            stem,
            category,
            front_matter: fm,
        }
    }

    #[test]
    fn test_til_date_from_file_name() {
        let fm = FrontMatter::default();
        let meta = resolve(&ctx("2025.05.15_TIL", Category::Til, &fm));
        assert_eq!(meta.title.as_deref(), Some("TIL - 2025.05.15"));
        assert_eq!(meta.date, NaiveDate::from_ymd_opt(2025, 5, 15));
        assert_eq!(meta.series, None);
    }

    #[test]
    fn test_til_pattern_ignored_outside_til() {
        let fm = FrontMatter::default();
        let meta = resolve(&ctx("2025.05.15_notes", Category::Development, &fm));
        assert_eq!(meta.title.as_deref(), Some("2025.05.15 notes"));
        assert_eq!(meta.date, None);
    }

    #[test]
    fn test_til_impossible_date_does_not_match() {
        let fm = FrontMatter::default();
        let meta = resolve(&ctx("2025.13.40_TIL", Category::Til, &fm));
        assert_eq!(meta.date, None);
        assert_eq!(meta.title.as_deref(), Some("2025.13.40 TIL"));
    }

    #[test]
    fn test_series_from_file_name() {
        let fm = FrontMatter::default();
        let meta = resolve(&ctx("ElasticSearch 1 : 개요", Category::Series, &fm));
        assert_eq!(meta.series.as_deref(), Some("ElasticSearch"));
        assert_eq!(meta.series_order, Some(1));
        assert_eq!(meta.title.as_deref(), Some("ElasticSearch 1 : 개요"));
    }

    #[test]
    fn test_series_name_with_spaces() {
        let fm = FrontMatter::default();
        let meta = resolve(&ctx("Spring Boot 12:Testing", Category::Series, &fm));
        assert_eq!(meta.series.as_deref(), Some("Spring Boot"));
        assert_eq!(meta.series_order, Some(12));
        assert_eq!(meta.title.as_deref(), Some("Spring Boot 12 : Testing"));
    }

    #[test]
    fn test_series_number_out_of_range_keeps_series() {
        let fm = FrontMatter::default();
        let meta = resolve(&ctx("Kafka 99999999999 : Huge", Category::Series, &fm));
        assert_eq!(meta.series.as_deref(), Some("Kafka"));
        assert_eq!(meta.title.as_deref(), Some("Kafka 99999999999 : Huge"));
        assert_eq!(meta.series_order, None);
    }

    #[test]
    fn test_series_without_pattern_falls_back_to_file_name() {
        let fm = FrontMatter::default();
        let meta = resolve(&ctx("intro_to-kafka", Category::Series, &fm));
        assert_eq!(meta.series, None);
        assert_eq!(meta.series_order, None);
        assert_eq!(meta.title.as_deref(), Some("intro to kafka"));
    }

    #[test]
    fn test_front_matter_takes_precedence() {
        let fm = FrontMatter {
            title: Some("Custom".to_string()),
            series_order: Some(9),
            ..Default::default()
        };
        let meta = resolve(&ctx("Kafka 2 : Producer", Category::Series, &fm));
        assert_eq!(meta.title.as_deref(), Some("Custom"));
        assert_eq!(meta.series_order, Some(9));
        // Fields the front-matter lacks still come from the file name
        assert_eq!(meta.series.as_deref(), Some("Kafka"));
    }

    #[test]
    fn test_unparseable_front_matter_date_falls_through() {
        let fm = FrontMatter {
            date: Some("someday".to_string()),
            ..Default::default()
        };
        let meta = resolve(&ctx("2024.02.29_TIL", Category::Til, &fm));
        assert_eq!(meta.date, NaiveDate::from_ymd_opt(2024, 2, 29));
    }

    #[test]
    fn test_chain_order_is_fixed() {
        assert_eq!(
            Strategy::CHAIN.map(|s| s.name()),
            ["front-matter", "til-date", "series-name", "file-name"]
        );
    }
}
