use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use cubecanon::layout::{parse_net, parse_nets, render_net, Net, Palette};
use cubecanon::scramble::{draw_layout, draw_symmetric_variant, ReplayToken};
use cubecanon::{canonicalize_with, orbit, Candidate, CanonCfg, Strategy};
use serde_json::json;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod batch;
mod provenance;

use provenance::{CfgRecord, InputRecord, Outcome, Provenance};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Canonical forms of cube sticker layouts")]
struct Cmd {
    /// Generate orbits on the current thread only
    #[arg(long, global = true)]
    sequential: bool,

    /// How the canonical member is picked
    #[arg(long, value_enum, global = true, default_value_t = StrategyArg::Refine)]
    strategy: StrategyArg,

    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    Refine,
    LexMin,
}

#[derive(Subcommand)]
enum Action {
    /// Print the canonical form of one net
    Canon {
        #[arg(long)]
        input: PathBuf,
        /// Also print the form spelled in the net's own labels
        #[arg(long)]
        display: bool,
        /// Log every refinement step
        #[arg(long)]
        trace: bool,
    },
    /// Classify many nets and write a CSV (or Parquet) report
    Batch {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write the orbit members of one net as `Form k` headed nets
    Orbit {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Write random layouts, or symmetric variants of `--of`
    Sample {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 10)]
        count: u64,
        #[arg(long)]
        out: PathBuf,
        #[arg(long)]
        of: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

impl Cmd {
    fn cfg(&self) -> CanonCfg {
        let strategy = match self.strategy {
            StrategyArg::Refine => Strategy::Refine,
            StrategyArg::LexMin => Strategy::LexMin,
        };
        CanonCfg {
            parallel: !self.sequential,
            strategy,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let cfg = cmd.cfg();
    match cmd.action {
        Action::Canon {
            input,
            display,
            trace,
        } => canon(&input, display, trace, &cfg),
        Action::Batch { input, out } => run_batch(&input, &out, &cfg),
        Action::Orbit { input, out, limit } => dump_orbit(&input, &out, limit, &cfg),
        Action::Sample {
            seed,
            count,
            out,
            of,
        } => sample(seed, count, &out, of.as_deref()),
        Action::Report => report(&cfg),
    }
}

fn read_net(path: &Path) -> Result<Net> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_net(&text).with_context(|| format!("parsing {}", path.display()))
}

fn write_text(out: &Path, text: &str) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out, text).with_context(|| format!("writing {}", out.display()))
}

fn canon(input: &Path, display: bool, trace: bool, cfg: &CanonCfg) -> Result<()> {
    let net = read_net(input)?;
    let out = canonicalize_with(&net.state, cfg);
    if trace {
        for r in &out.refinements {
            let (face, row, col) = r.sticker();
            tracing::info!(
                position = r.position,
                face = %face,
                row,
                col,
                symbol = r.symbol,
                survivors = r.survivors,
                "refinement"
            );
        }
    }
    println!("{}", out.form);
    if display {
        println!("{}", net.palette.display(&out.form)?);
    }
    tracing::info!(orbit = out.orbit_size, "canon");
    Ok(())
}

fn run_batch(input: &Path, out: &Path, cfg: &CanonCfg) -> Result<()> {
    let text =
        std::fs::read_to_string(input).with_context(|| format!("reading {}", input.display()))?;
    let nets = parse_nets(&text)?;
    tracing::info!(nets = nets.len(), "batch");
    let rows = batch::classify(&nets, cfg)?;
    let summary = batch::summarize(&rows);
    let mut df = batch::to_frame(&rows)?;
    batch::write_frame(&mut df, out)?;
    tracing::info!(
        classes = summary.classes,
        largest = summary.largest_class,
        "batch_classes"
    );
    Provenance::new(Outcome::Batch(summary))
        .with_cfg(cfg)
        .with_input(InputRecord::file(input))
        .write_beside(out)?;
    Ok(())
}

/// Back-to-back `Form k` headed nets of the first `limit` members of
/// `members`, painted in the input net's palette.
fn orbit_text(net: &Net, members: &[Candidate], limit: Option<usize>) -> Result<String> {
    let take = limit.unwrap_or(members.len());
    let mut text = String::new();
    for (k, member) in members.iter().take(take).enumerate() {
        writeln!(text, "Form {}", k + 1)?;
        text.push_str(&render_net(&net.palette.paint(member)?)?);
    }
    Ok(text)
}

fn dump_orbit(input: &Path, out: &Path, limit: Option<usize>, cfg: &CanonCfg) -> Result<()> {
    let net = read_net(input)?;
    let members = orbit(&net.state, cfg);
    write_text(out, &orbit_text(&net, &members, limit)?)?;
    let canon = canonicalize_with(&net.state, cfg);
    let written = limit.map_or(members.len(), |n| n.min(members.len()));
    tracing::info!(written, out = %out.display(), "orbit");
    Provenance::new(Outcome::Orbit {
        orbit_size: members.len(),
        written,
        refinements: canon.refinements.len(),
    })
    .with_cfg(cfg)
    .with_input(InputRecord::net(input, &canon.form))
    .write_beside(out)?;
    Ok(())
}

/// `count` nets drawn from `seed`: random layouts in the standard palette,
/// or symmetric variants of `base`.
fn sample_text(seed: u64, count: u64, base: Option<&Net>) -> Result<String> {
    let standard = Palette::standard();
    let mut tok = ReplayToken { seed, index: 0 };
    let mut text = String::new();
    for _ in 0..count {
        let net = match base {
            Some(b) => Net {
                palette: b.palette.clone(),
                state: draw_symmetric_variant(&b.state, tok),
            },
            None => Net {
                palette: standard.clone(),
                state: draw_layout(tok),
            },
        };
        writeln!(text, "# seed {} index {}", tok.seed, tok.index)?;
        text.push_str(&net.render()?);
        text.push('\n');
        tok = tok.next();
    }
    Ok(text)
}

fn sample(seed: u64, count: u64, out: &Path, of: Option<&Path>) -> Result<()> {
    let base = of.map(read_net).transpose()?;
    write_text(out, &sample_text(seed, count, base.as_ref())?)?;
    tracing::info!(seed, count, out = %out.display(), "sample");
    let mut prov = Provenance::new(Outcome::Sample { seed, count });
    if let (Some(path), Some(net)) = (of, &base) {
        let form = canonicalize_with(&net.state, &CanonCfg::default()).form;
        prov = prov.with_input(InputRecord::net(path, &form));
    }
    prov.write_beside(out)?;
    Ok(())
}

fn report(cfg: &CanonCfg) -> Result<()> {
    let obj = json!({
        "code_rev": provenance::git_rev(),
        "cubecanon": cubecanon::VERSION,
        "cfg": CfgRecord::from(cfg),
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use cubecanon::canonicalize;
    use tempfile::tempdir;

    #[test]
    fn command_definition_is_consistent() {
        Cmd::command().debug_assert();
    }

    #[test]
    fn global_flags_reach_the_config() {
        let cmd = Cmd::try_parse_from(["cli", "report", "--sequential", "--strategy", "lex-min"])
            .unwrap();
        assert_eq!(cmd.cfg(), CanonCfg::sequential(Strategy::LexMin));
        let cmd = Cmd::try_parse_from(["cli", "report"]).unwrap();
        assert_eq!(cmd.cfg(), CanonCfg::default());
    }

    #[test]
    fn sample_is_reproducible_and_parses_back() {
        let a = sample_text(4, 3, None).unwrap();
        assert_eq!(a, sample_text(4, 3, None).unwrap());
        assert_ne!(a, sample_text(5, 3, None).unwrap());
        assert_eq!(parse_nets(&a).unwrap().len(), 3);
    }

    #[test]
    fn variants_of_a_net_collapse_to_one_class() {
        let base = parse_nets(&sample_text(8, 1, None).unwrap())
            .unwrap()
            .remove(0);
        let nets = parse_nets(&sample_text(9, 5, Some(&base)).unwrap()).unwrap();
        let expected = canonicalize(&base.state);
        for net in &nets {
            assert_eq!(canonicalize(&net.state), expected);
        }
    }

    #[test]
    fn orbit_dump_respects_limit_and_writes_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("net.txt");
        write_text(&input, &sample_text(1, 1, None).unwrap()).unwrap();
        let out = dir.path().join("orbit.txt");
        let cfg = CanonCfg::sequential(Strategy::Refine);
        dump_orbit(&input, &out, Some(12), &cfg).unwrap();

        let text = std::fs::read_to_string(&out).unwrap();
        assert_eq!(text.lines().filter(|l| l.starts_with("Form ")).count(), 12);
        let nets = parse_nets(&text).unwrap();
        assert_eq!(nets.len(), 12);
        let expected = canonicalize(&read_net(&input).unwrap().state);
        assert!(nets.iter().all(|n| canonicalize(&n.state) == expected));
        assert!(!text.contains("\n\n"));

        let sidecar: serde_json::Value = serde_json::from_slice(
            &std::fs::read(dir.path().join("orbit.provenance.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(sidecar["outcome"]["command"], "orbit");
        assert_eq!(sidecar["outcome"]["orbit_size"], 17280);
        assert_eq!(sidecar["outcome"]["written"], 12);
        assert_eq!(sidecar["inputs"][0]["canonical"], expected.to_string());
    }

    #[test]
    fn batch_writes_report_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("nets.txt");
        write_text(&input, &sample_text(2, 4, None).unwrap()).unwrap();
        let out = dir.path().join("report").join("classes.csv");
        run_batch(&input, &out, &CanonCfg::default()).unwrap();

        let csv = std::fs::read_to_string(&out).unwrap();
        assert_eq!(csv.lines().count(), 5);
        let sidecar: serde_json::Value = serde_json::from_slice(
            &std::fs::read(dir.path().join("report").join("classes.provenance.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(sidecar["outcome"]["command"], "batch");
        assert_eq!(sidecar["outcome"]["nets"], 4);
        assert_eq!(sidecar["cfg"]["strategy"], "refine");
        assert_eq!(sidecar["cfg"]["parallel"], true);
    }
}
