use anyhow::{Context, Result};
use faceted_cube::{Color, CubeConfig, Layout, Scene, SceneOption, StyleParameters};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, StructOpt)]
#[structopt(name = "faceted_cube", about = "Generate and lay out faceted cubes")]
struct Opt {
    /// Seed for cube generation; random when omitted
    #[structopt(long)]
    seed: Option<u64>,

    #[structopt(long, default_value = "10")]
    side: f32,

    #[structopt(long, default_value = "0.01", allow_hyphen_values = true)]
    thickness: f32,

    #[structopt(long, default_value = "0.1")]
    explosion: f32,

    #[structopt(long, default_value = "0.9")]
    sub_squares_scale: f32,

    #[structopt(long, default_value = "0.9")]
    sub_square_opacity: f32,

    #[structopt(long, default_value = "0.1")]
    cylinder_thickness: f32,

    #[structopt(long, default_value = "0.8")]
    cylinder_opacity: f32,

    #[structopt(long)]
    color0: Option<Color>,
    #[structopt(long)]
    color1: Option<Color>,
    #[structopt(long)]
    color2: Option<Color>,
    #[structopt(long)]
    color3: Option<Color>,
    #[structopt(long)]
    color4: Option<Color>,
    #[structopt(long)]
    color5: Option<Color>,

    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Print the face grids of both cubes
    Show,
    /// Print instance transforms as JSON
    Layout {
        /// primary, secondary or both
        #[structopt(long, default_value = "both")]
        cube: Which,
        #[structopt(long)]
        pretty: bool,
    },
}

#[derive(Debug, Clone, Copy)]
enum Which {
    Primary,
    Secondary,
    Both,
}

impl std::str::FromStr for Which {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "primary" => Ok(Which::Primary),
            "secondary" => Ok(Which::Secondary),
            "both" => Ok(Which::Both),
            _ => anyhow::bail!("Unknown cube {:?}", s),
        }
    }
}

#[derive(Serialize)]
struct Output<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    primary: Option<&'a Layout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    secondary: Option<&'a Layout>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opt = Opt::from_args();

    let rng = match opt.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let style = StyleParameters {
        main_cube_side: opt.side,
        thickness: opt.thickness,
        explosion: opt.explosion,
        sub_squares_scale: opt.sub_squares_scale,
        sub_square_opacity: opt.sub_square_opacity,
        cylinder_thickness: opt.cylinder_thickness,
        cylinder_opacity: opt.cylinder_opacity,
    };
    let mut scene = Scene::with_style(rng, style).context("Invalid style")?;

    let colors = [
        opt.color0, opt.color1, opt.color2, opt.color3, opt.color4, opt.color5,
    ];
    for (face, color) in colors.into_iter().enumerate() {
        if let Some(color) = color {
            scene.apply(SceneOption::Color(face, color))?;
        }
    }

    match opt.cmd {
        Command::Show => {
            print_cube("primary", scene.primary());
            print_cube("secondary", scene.secondary());
        }
        Command::Layout { cube, pretty } => {
            let (primary, secondary) = scene.layouts()?;
            let out = Output {
                primary: matches!(cube, Which::Primary | Which::Both).then_some(primary),
                secondary: matches!(cube, Which::Secondary | Which::Both).then_some(secondary),
            };
            let stdout = std::io::stdout().lock();
            if pretty {
                serde_json::to_writer_pretty(stdout, &out)?;
            } else {
                serde_json::to_writer(stdout, &out)?;
            }
            println!();
        }
    }

    Ok(())
}

fn print_cube(name: &str, cube: &CubeConfig) {
    println!("{} {:?}", name, cube.active_counts());
    for (i, face) in cube.faces().iter().enumerate() {
        println!("face {}:", i);
        for row in face.cells().chunks_exact(face.side()) {
            let line: String = row.iter().map(|&c| if c { 'o' } else { '.' }).collect();
            println!("  {}", line);
        }
    }
}
