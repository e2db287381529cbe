mod config;
mod gates;
mod neuroevolution;
mod wing_design;

use config::DemoConfig;

use std::env;
use std::error::Error;
use std::process;

const USAGE: &str =
    "usage: demos <nor|adder|nor-training|xor|wing|neuroevolution|all|print-config> [config.ron]";

const DEMOS: [&str; 6] = [
    "nor",
    "adder",
    "nor-training",
    "xor",
    "wing",
    "neuroevolution",
];

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let demo = match args.first() {
        Some(demo) => demo.as_str(),
        None => {
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };
    let config = match args.get(1) {
        Some(path) => match DemoConfig::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("could not load {}: {}", path, e);
                process::exit(1);
            }
        },
        None => DemoConfig::default(),
    };

    if let Err(e) = run(demo, &config) {
        eprintln!("{} failed: {}", demo, e);
        process::exit(1);
    }
}

fn run(demo: &str, config: &DemoConfig) -> Result<(), Box<dyn Error>> {
    match demo {
        "nor" => gates::nor(),
        "adder" => gates::adder(),
        "nor-training" => gates::nor_training(config),
        "xor" => gates::xor_training(config),
        "wing" => wing_design::benchmark(config),
        "neuroevolution" => neuroevolution::xor(config),
        "all" => {
            for demo in DEMOS {
                println!("==> {}", demo);
                run(demo, config)?;
                println!();
            }
            Ok(())
        }
        "print-config" => {
            println!("{}", config.to_ron()?);
            Ok(())
        }
        other => Err(format!("unknown demo {:?}\n{}", other, USAGE).into()),
    }
}
