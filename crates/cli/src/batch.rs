//! Equivalence-class reports over many nets.

use anyhow::{Context, Result};
use cubecanon::layout::Net;
use cubecanon::{canonicalize_with, CanonCfg, CanonicalForm};
use polars::prelude::*;
use serde::Serialize;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// One classified net.
#[derive(Clone, Debug)]
pub struct BatchRow {
    pub index: usize,
    pub canonical: CanonicalForm,
    /// Class id, numbered by first appearance from 0.
    pub class: u32,
    pub display: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub nets: usize,
    pub classes: usize,
    pub largest_class: usize,
}

pub fn classify(nets: &[Net], cfg: &CanonCfg) -> Result<Vec<BatchRow>> {
    let mut ids: HashMap<CanonicalForm, u32> = HashMap::new();
    let mut rows = Vec::with_capacity(nets.len());
    for (index, net) in nets.iter().enumerate() {
        let canonical = canonicalize_with(&net.state, cfg).form;
        let next = ids.len() as u32;
        let class = *ids.entry(canonical).or_insert(next);
        let display = net
            .palette
            .display(&canonical)
            .with_context(|| format!("painting net #{index}"))?;
        rows.push(BatchRow {
            index,
            canonical,
            class,
            display,
        });
    }
    Ok(rows)
}

pub fn summarize(rows: &[BatchRow]) -> BatchSummary {
    let mut sizes: HashMap<u32, usize> = HashMap::new();
    for row in rows {
        *sizes.entry(row.class).or_default() += 1;
    }
    BatchSummary {
        nets: rows.len(),
        classes: sizes.len(),
        largest_class: sizes.values().copied().max().unwrap_or(0),
    }
}

pub fn to_frame(rows: &[BatchRow]) -> PolarsResult<DataFrame> {
    let index: Vec<u32> = rows.iter().map(|r| r.index as u32).collect();
    let canonical: Vec<String> = rows.iter().map(|r| r.canonical.to_string()).collect();
    let class: Vec<u32> = rows.iter().map(|r| r.class).collect();
    let display: Vec<String> = rows.iter().map(|r| r.display.clone()).collect();
    df!(
        "index" => index,
        "canonical" => canonical,
        "class" => class,
        "display" => display
    )
}

/// Write the frame as Parquet for `.parquet` paths, CSV otherwise.
pub fn write_frame(df: &mut DataFrame, out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    if out.extension().is_some_and(|e| e == "parquet") {
        ParquetWriter::new(&mut file).finish(df)?;
    } else {
        CsvWriter::new(&mut file).include_header(true).finish(df)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubecanon::layout::{parse_net, parse_nets, render_net, Palette};
    use cubecanon::scramble::{draw_layout, draw_symmetric_variant, ReplayToken};
    use cubecanon::Strategy;
    use tempfile::tempdir;

    fn sample_nets(count: u64, seed: u64) -> Vec<Net> {
        let palette = Palette::standard();
        let mut tok = ReplayToken { seed, index: 0 };
        let mut nets = Vec::new();
        for _ in 0..count {
            nets.push(Net {
                palette: palette.clone(),
                state: draw_layout(tok),
            });
            tok = tok.next();
        }
        nets
    }

    #[test]
    fn variants_share_a_class() {
        let base = sample_nets(1, 5).remove(0);
        let mut nets = vec![base.clone()];
        let mut tok = ReplayToken { seed: 77, index: 0 };
        for _ in 0..3 {
            nets.push(Net {
                palette: base.palette.clone(),
                state: draw_symmetric_variant(&base.state, tok),
            });
            tok = tok.next();
        }
        nets.extend(sample_nets(2, 6));
        let rows = classify(&nets, &CanonCfg::default()).unwrap();
        let classes: Vec<u32> = rows.iter().map(|r| r.class).collect();
        assert_eq!(&classes[..4], &[0, 0, 0, 0]);
        assert_eq!(classes[4], 1);
        assert_eq!(classes[5], 2);
        assert_eq!(
            summarize(&rows),
            BatchSummary {
                nets: 6,
                classes: 3,
                largest_class: 4
            }
        );
    }

    #[test]
    fn csv_report_has_one_row_per_net() {
        let nets = sample_nets(3, 11);
        let rows = classify(&nets, &CanonCfg::sequential(Strategy::LexMin)).unwrap();
        let mut df = to_frame(&rows).unwrap();
        assert_eq!(df.shape(), (3, 4));

        let dir = tempdir().unwrap();
        let out = dir.path().join("classes.csv");
        write_frame(&mut df, &out).unwrap();
        let text = std::fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "index,canonical,class,display");
        assert_eq!(lines.len(), 4);
        for (line, row) in lines[1..].iter().zip(&rows) {
            let fields: Vec<&str> = line.split(',').collect();
            assert_eq!(fields[0], row.index.to_string());
            assert_eq!(fields[1], row.canonical.to_string());
            assert_eq!(fields[3], row.display);
        }

        let back = LazyCsvReader::new(&out)
            .with_infer_schema_length(Some(0))
            .finish()
            .unwrap()
            .collect()
            .unwrap();
        assert_eq!(back.shape(), (3, 4));
    }

    #[test]
    fn orbit_dump_collapses_to_one_class() {
        let net = parse_net(&sample_nets(1, 2)[0].render().unwrap()).unwrap();
        let cfg = CanonCfg::default();
        let members = cubecanon::orbit(&net.state, &cfg);
        let mut text = String::new();
        for (k, m) in members.iter().step_by(97).enumerate() {
            text.push_str(&format!("Form {}\n", k + 1));
            text.push_str(&render_net(&net.palette.paint(m).unwrap()).unwrap());
            text.push('\n');
        }
        let nets = parse_nets(&text).unwrap();
        let rows = classify(&nets, &cfg).unwrap();
        let summary = summarize(&rows);
        assert_eq!(summary.classes, 1);
        assert_eq!(summary.nets, members.len().div_ceil(97));
    }
}
