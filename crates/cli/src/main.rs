use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use knots::api::{build_scene, draw_pair, names, pd_code, DrawCmd, Knot, ReplayToken};
use tracing_subscriber::fmt::SubscriberBuilder;

mod svg;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Knot equivalence quiz and diagram renderer")]
struct Cmd {
    /// Seed for reproducible rounds; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Run the interactive equivalence quiz; writes one SVG per round
    Quiz {
        #[arg(long, default_value = "rounds")]
        out_dir: PathBuf,
    },
    /// Render one named catalog knot to an SVG file
    Render {
        #[arg(long)]
        name: String,
        #[arg(long)]
        out: PathBuf,
    },
    /// List the knot catalog
    List,
    /// Print one knot's scene as JSON (for other backends or inspection)
    Dump {
        #[arg(long)]
        name: String,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let seed = cmd.seed.unwrap_or_else(rand_seed);
    match cmd.action {
        Action::Quiz { out_dir } => quiz(seed, &out_dir),
        Action::Render { name, out } => render(&name, &out),
        Action::List => list(),
        Action::Dump { name } => dump(&name),
    }
}

/// Time-derived fallback seed; `--seed` overrides for reproducibility.
fn rand_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

fn quiz(seed: u64, out_dir: &Path) -> Result<()> {
    tracing::info!(seed, out_dir = %out_dir.display(), "quiz");
    std::fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    println!("Knot equivalence quiz");
    println!("=====================");
    println!("Rules:");
    println!("1. Each round writes a picture of two knot projections.");
    println!("2. Decide whether the two knots are equivalent (deformable into each other).");
    println!("3. Answer 'y' for equivalent, 'n' for not equivalent.");
    println!("4. All knots are non-trivial, with 3-10 crossings.");
    println!("5. At a crossing the solid strand passes over; the broken one passes under.");
    println!("6. Answer 'q' to quit.\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut score = 0u32;
    let mut total = 0u32;
    let mut index = 0u64;

    'rounds: loop {
        index += 1;
        let round = match run_round(seed, index, total + 1, out_dir) {
            Ok(round) => round,
            Err(err) => {
                // One bad round is discarded and regenerated; nothing retries
                // below this loop.
                tracing::warn!(error = %err, "round failed; regenerating");
                continue;
            }
        };

        let answer = loop {
            print!("Are these two knots equivalent? (y/n/q): ");
            io::stdout().flush()?;
            let Some(line) = lines.next() else {
                break 'rounds;
            };
            match line?.trim().to_lowercase().as_str() {
                "y" => break true,
                "n" => break false,
                "q" => break 'rounds,
                _ => println!("Invalid input; please answer 'y', 'n' or 'q'."),
            }
        };

        total += 1;
        if answer == round.equivalent {
            println!("Correct!");
            score += 1;
        } else if round.equivalent {
            println!(
                "Wrong! The two knots are equivalent; both are the {} knot.",
                round.first_name
            );
        } else {
            println!(
                "Wrong! The knots differ: A is {}, B is {}.",
                round.first_name, round.second_name
            );
        }
        println!(
            "Current score: {score}/{total} ({:.1}%)\n",
            100.0 * f64::from(score) / f64::from(total)
        );
    }

    println!("\nQuiz over!");
    if total > 0 {
        println!(
            "Final score: {score}/{total} ({:.1}%)",
            100.0 * f64::from(score) / f64::from(total)
        );
    }
    Ok(())
}

struct RoundInfo {
    equivalent: bool,
    first_name: String,
    second_name: String,
}

/// Generate one pair, render it side by side, and write the round file.
fn run_round(seed: u64, index: u64, round_no: u32, out_dir: &Path) -> Result<RoundInfo> {
    let pair = draw_pair(ReplayToken { seed, index })?;
    let left = build_scene(&pair.first, "Knot A");
    let right = build_scene(&pair.second, "Knot B");
    let file = out_dir.join(format!("round_{round_no}.svg"));
    std::fs::write(&file, svg::pair_to_svg(&left, &right))
        .with_context(|| format!("writing {}", file.display()))?;
    tracing::info!(round = round_no, file = %file.display(), "round rendered");
    println!("Round {round_no}: open {}", file.display());
    Ok(RoundInfo {
        equivalent: pair.equivalent,
        first_name: pair.first.name().to_string(),
        second_name: pair.second.name().to_string(),
    })
}

fn lookup(name: &str) -> Result<Knot> {
    let pd = pd_code(name).with_context(|| format!("no catalog knot named {name:?}"))?;
    Ok(Knot::from_pd(name, pd))
}

fn render(name: &str, out: &Path) -> Result<()> {
    let knot = lookup(name)?;
    let scene = build_scene(&knot, "Knot");
    ensure_parent(out)?;
    std::fs::write(out, svg::scene_to_svg(&scene))
        .with_context(|| format!("writing {}", out.display()))?;
    tracing::info!(name, out = %out.display(), "rendered");
    Ok(())
}

fn list() -> Result<()> {
    for name in names() {
        let pd = pd_code(name).with_context(|| format!("catalog entry {name:?}"))?;
        println!("{name}\t{} crossings", pd.crossing_count());
    }
    Ok(())
}

fn dump(name: &str) -> Result<()> {
    let knot = lookup(name)?;
    let scene = build_scene(&knot, "Knot");
    let cmds: Vec<serde_json::Value> = scene
        .cmds
        .iter()
        .map(|cmd| match cmd {
            DrawCmd::Polyline { points, style } => serde_json::json!({
                "kind": "polyline",
                "points": points.iter().map(|p| [p.x, p.y]).collect::<Vec<_>>(),
                "color": [style.color.r, style.color.g, style.color.b],
                "width": style.width,
                "alpha": style.alpha,
                "z": style.z,
            }),
            DrawCmd::Segment { a, b, style } => serde_json::json!({
                "kind": "segment",
                "a": [a.x, a.y],
                "b": [b.x, b.y],
                "color": [style.color.r, style.color.g, style.color.b],
                "width": style.width,
                "alpha": style.alpha,
                "z": style.z,
            }),
            DrawCmd::Marker {
                at,
                radius,
                fill,
                style,
            } => serde_json::json!({
                "kind": "marker",
                "at": [at.x, at.y],
                "radius": radius,
                "fill": [fill.r, fill.g, fill.b],
                "edge": [style.color.r, style.color.g, style.color.b],
                "z": style.z,
            }),
        })
        .collect();
    let doc = serde_json::json!({
        "title": scene.title,
        "half_extent": scene.half_extent,
        "cmds": cmds,
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_writes_an_svg_file() {
        let dir = tempfile::tempdir().unwrap();
        let info = run_round(42, 1, 1, dir.path()).unwrap();
        let file = dir.path().join("round_1.svg");
        let svg = std::fs::read_to_string(file).unwrap();
        assert!(svg.contains("Knot A:"));
        assert!(svg.contains("Knot B:"));
        if info.equivalent {
            assert_eq!(info.first_name, info.second_name);
        } else {
            assert_ne!(info.first_name, info.second_name);
        }
    }

    #[test]
    fn render_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("nested/out.svg");
        render("Trefoil", &out).unwrap();
        assert!(out.exists());
    }

    #[test]
    fn lookup_rejects_unknown_names() {
        assert!(lookup("NoSuchKnot").is_err());
    }
}
