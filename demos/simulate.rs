use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use rusty_izhikevich::config::SimulationConfig;
use rusty_izhikevich::error::SNNError;
use rusty_izhikevich::report::print_params;
use rusty_izhikevich::simulation::Simulation;

#[derive(Parser, Debug)]
struct Args {
    /// A JSON configuration file, command line values override its content
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// The seed of the random number generator (0 for a fresh one)
    #[arg(long)]
    seed: Option<u64>,
    /// The number of neurons
    #[arg(short = 'N', long)]
    num_neurons: Option<usize>,
    /// The fraction of inhibitory neurons
    #[arg(long)]
    inhibitory_fraction: Option<f64>,
    /// The mean out-degree
    #[arg(short = 'C', long)]
    mean_degree: Option<f64>,
    /// The mean link strength
    #[arg(short = 'L', long)]
    mean_strength: Option<f64>,
    /// The number of ticks
    #[arg(short = 'T', long)]
    num_steps: Option<usize>,
    /// The trajectory output file (standard output if missing)
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// The parameter output file
    #[arg(long)]
    params: Option<PathBuf>,
}

fn main() -> Result<(), SNNError> {
    let args = Args::parse();

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{l} - {m}\n")))
        .build();
    let log_config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(LevelFilter::Info))
        .map_err(|e| SNNError::IOError(e.to_string()))?;
    log4rs::init_config(log_config).map_err(|e| SNNError::IOError(e.to_string()))?;

    log::info!("{:?}", args);

    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_json(&fs::read_to_string(path)?)?,
        None => SimulationConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(num_neurons) = args.num_neurons {
        config.num_neurons = num_neurons;
    }
    if let Some(inhibitory_fraction) = args.inhibitory_fraction {
        config.inhibitory_fraction = inhibitory_fraction;
    }
    if let Some(mean_degree) = args.mean_degree {
        config.mean_degree = mean_degree;
    }
    if let Some(mean_strength) = args.mean_strength {
        config.mean_strength = mean_strength;
    }
    if let Some(num_steps) = args.num_steps {
        config.num_steps = num_steps;
    }

    let mut simulation = Simulation::new(config)?;

    if let Some(path) = &args.params {
        let mut writer = BufWriter::new(File::create(path)?);
        print_params(simulation.network(), &mut writer)?;
        writer.flush()?;
        log::info!("Parameters saved to {}", path.display());
    }

    let mut writer: BufWriter<Box<dyn Write>> = match &args.output {
        Some(path) => BufWriter::new(Box::new(File::create(path)?)),
        None => BufWriter::new(Box::new(io::stdout())),
    };
    let raster = simulation.run(&mut writer)?;
    writer.flush()?;

    let num_spikes: usize = raster.iter().map(|fired| fired.len()).sum();
    log::info!(
        "Mean firing rate: {:.3} spikes per neuron per tick",
        num_spikes as f64 / (simulation.network().size().max(1) * raster.len().max(1)) as f64
    );
    Ok(())
}
