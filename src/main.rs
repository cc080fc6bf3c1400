//! Image Life CLI - Run Game of Life from an image or a JSON scenario.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::path::PathBuf;

use image_life::{
    RunConfig, RunError, Scenario,
    driver::{self, SeedSource},
    error::EXIT_USAGE,
    schema::ConfigError,
};

fn print_usage(program: &str) {
    eprintln!("Usage: {} <image_file | scenario.json> [options]", program);
    eprintln!();
    eprintln!("Run Conway's Game of Life seeded from an image or a saved scenario.");
    eprintln!("Writes stage0.json, out.gif and (if requested) outNNN.jpg.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --seed N        Seed for random scenario ops (default: entropy)");
    eprintln!("  --out DIR       Output directory (default: .)");
    eprintln!("  --epoch N       Generation budget for image input (default: 300)");
    eprintln!("  --strict-lives  Reject scenarios whose lives length mismatches");
    eprintln!("  --example       Print an example scenario");
}

/// Parse CLI arguments into the input path and run configuration.
fn parse_args(args: &[String]) -> Result<(PathBuf, RunConfig), ConfigError> {
    let mut config = RunConfig::default();
    let mut input = None;
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .cloned()
                .ok_or_else(|| ConfigError::InvalidArgument(format!("{flag} needs a value")))
        };
        match arg.as_str() {
            "--seed" => {
                let v = value("--seed")?;
                config.random_seed = Some(v.parse().map_err(|_| {
                    ConfigError::InvalidArgument(format!("--seed expects an integer, got {v:?}"))
                })?);
            }
            "--epoch" => {
                let v = value("--epoch")?;
                config.image_epoch = v.parse().map_err(|_| {
                    ConfigError::InvalidArgument(format!("--epoch expects an integer, got {v:?}"))
                })?;
            }
            "--out" => config.output_dir = PathBuf::from(value("--out")?),
            "--strict-lives" => config.strict_lives = true,
            flag if flag.starts_with("--") => {
                return Err(ConfigError::InvalidArgument(format!("unknown option {flag}")));
            }
            path if input.is_none() => input = Some(PathBuf::from(path)),
            extra => {
                return Err(ConfigError::InvalidArgument(format!(
                    "unexpected argument {extra:?}"
                )));
            }
        }
    }

    let input = input.ok_or_else(|| ConfigError::InvalidArgument("missing input file".into()))?;
    config.validate()?;
    Ok((input, config))
}

fn print_example_scenario() {
    let scenario = Scenario {
        epoch: 300,
        width: 10,
        height: 9,
        lives: (0..90).map(|i| (i / 10 == 4) as i64).collect(),
        ops: vec![0, 0, 3],
        out_frames: false,
        verbose: false,
    };

    match serde_json::to_string_pretty(&scenario) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing example: {}", e),
    }
}

fn execute(input: PathBuf, config: RunConfig) -> Result<(), RunError> {
    let source = SeedSource::from_path(&input);
    let mut state = source.load(&config)?;

    println!("Image Life");
    println!("==========");
    println!("Input: {}", input.display());
    println!("Grid: {}x{}", state.width(), state.height());
    println!("Epoch budget: {}", state.epoch_budget);
    println!("Initial lives: {}", state.count_lives());
    println!();

    let summary = driver::run(&mut state, &config)?;

    println!("Generations: {}", summary.generations);
    println!("Final lives: {}", summary.final_stats.live_cells);
    if summary.stills > 0 {
        println!("Stills: {}", summary.stills);
    }
    println!("Animation: {}", summary.animation);
    Ok(())
}

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("image-life");

    if args.iter().any(|a| a == "--example") {
        print_example_scenario();
        return;
    }

    let (input, config) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(program);
            std::process::exit(EXIT_USAGE);
        }
    };

    if let Err(e) = execute(input, config) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
