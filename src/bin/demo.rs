//! Producer/consumer demonstration over registry channels
//!
//! A producer thread sends body measurements on one named queue, a consumer
//! thread answers with a formatted name and BMI on another. Neither thread
//! creates anything up front: both just open the queues by name.

use std::{error::Error, thread, time::Duration};

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::{debug, info};
use rendezvous::{Channel, Registry, Result};

const ARGUMENT_QUEUE_NAME: &str = "ARGUMENT_QUEUE";
const RESULT_QUEUE_NAME: &str = "RESULT_QUEUE";

#[derive(Debug, Clone, Default)]
struct Argument {
    count: u32,
    height: f64,
    weight: f64,
    first_name: String,
    family_name: String,
}

#[derive(Debug, Clone, Default)]
struct Outcome {
    bmi: f64,
    full_name: String,
}

#[derive(Debug, Clone)]
struct PipelineSettings {
    iterations: u32,
    producer_interval: Duration,
    consumer_interval: Duration,
    first_name: String,
    argument_queue: String,
    result_queue: String,
}

impl PipelineSettings {
    fn from_matches(matches: &ArgMatches) -> Self {
        let millis = |name: &str| Duration::from_millis(matches.get_one::<u64>(name).copied().unwrap_or_default());
        let text = |name: &str| matches.get_one::<String>(name).cloned().unwrap_or_default();

        Self {
            iterations: matches.get_one::<u32>("iterations").copied().unwrap_or(30),
            producer_interval: millis("producer_interval"),
            consumer_interval: millis("consumer_interval"),
            first_name: text("first_name"),
            argument_queue: text("argument_queue"),
            result_queue: text("result_queue"),
        }
    }
}

fn main() -> std::result::Result<(), Box<dyn Error>> {
    env_logger::init();

    let matches = Command::new("rendezvous-demo")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Rendezvous named queue demonstration")
        .subcommand(
            Command::new("run")
                .about("Run the producer/consumer pipeline")
                .arg(
                    Arg::new("iterations")
                        .short('n')
                        .long("iterations")
                        .value_name("COUNT")
                        .help("Number of records the producer sends")
                        .default_value("30")
                        .value_parser(value_parser!(u32).range(1..)),
                )
                .arg(
                    Arg::new("producer_interval")
                        .long("producer-interval-ms")
                        .value_name("MILLIS")
                        .help("Pause between two producer iterations")
                        .default_value("100")
                        .value_parser(value_parser!(u64)),
                )
                .arg(
                    Arg::new("consumer_interval")
                        .long("consumer-interval-ms")
                        .value_name("MILLIS")
                        .help("Pause between two consumer polls")
                        .default_value("10")
                        .value_parser(value_parser!(u64)),
                )
                .arg(
                    Arg::new("first_name")
                        .long("first-name")
                        .value_name("NAME")
                        .help("First name attached to every record")
                        .default_value("guest"),
                )
                .arg(
                    Arg::new("argument_queue")
                        .long("argument-queue")
                        .value_name("KEY")
                        .help("Registry key of the request queue")
                        .default_value(ARGUMENT_QUEUE_NAME),
                )
                .arg(
                    Arg::new("result_queue")
                        .long("result-queue")
                        .value_name("KEY")
                        .help("Registry key of the response queue")
                        .default_value(RESULT_QUEUE_NAME),
                )
                .arg(
                    Arg::new("stats_json")
                        .long("stats-json")
                        .help("Print registry statistics as JSON when done")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("info").about("Show version information"))
        .get_matches();

    match matches.subcommand() {
        Some(("run", run_matches)) => {
            let settings = PipelineSettings::from_matches(run_matches);
            run_pipeline(&settings, run_matches.get_flag("stats_json"))
        }
        Some(("info", _)) => {
            println!("rendezvous {}", rendezvous::VERSION);
            Ok(())
        }
        _ => {
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn run_pipeline(settings: &PipelineSettings, stats_json: bool) -> std::result::Result<(), Box<dyn Error>> {
    let registry = Registry::new();

    // Both queues stay alive for the whole run: records sent before the
    // consumer opens its end are kept, and late answers can still be
    // collected after the producer has finished.
    let arguments = Channel::<Argument>::open(&registry, &settings.argument_queue)?;
    let results = Channel::<Outcome>::open(&registry, &settings.result_queue)?;

    let producer = {
        let registry = registry.clone();
        let settings = settings.clone();
        thread::spawn(move || produce(&registry, &settings))
    };
    let consumer = {
        let registry = registry.clone();
        let settings = settings.clone();
        thread::spawn(move || consume(&registry, &settings))
    };

    producer.join().map_err(|_| "producer thread panicked")??;
    consumer.join().map_err(|_| "consumer thread panicked")??;

    for outcome in results.drain() {
        print_outcome(&outcome);
    }
    drop(results);
    drop(arguments);

    info!("pipeline finished, live keys: {:?}", registry.keys());
    if stats_json {
        println!("{}", serde_json::to_string_pretty(&registry.stats())?);
    }

    Ok(())
}

fn produce(registry: &Registry, settings: &PipelineSettings) -> Result<()> {
    let arguments = Channel::<Argument>::open(registry, &settings.argument_queue)?;
    let results = Channel::<Outcome>::open(registry, &settings.result_queue)?;

    for i in 1..=settings.iterations {
        arguments.send(Argument {
            count: i,
            height: 160.0 + f64::from(i) * 0.1,
            weight: 60.0 + f64::from(i) * 0.2,
            first_name: settings.first_name.clone(),
            family_name: format!("person-{}", i),
        });
        debug!("producer: sent record {}", i);

        while let Some(outcome) = results.try_recv() {
            print_outcome(&outcome);
        }

        thread::sleep(settings.producer_interval);
    }

    Ok(())
}

fn consume(registry: &Registry, settings: &PipelineSettings) -> Result<()> {
    let arguments = Channel::<Argument>::open(registry, &settings.argument_queue)?;
    let results = Channel::<Outcome>::open(registry, &settings.result_queue)?;

    loop {
        let mut last_count = 0;
        while let Some(argument) = arguments.try_recv() {
            println!(
                "first name : {} family name : {} height : {} weight : {}",
                argument.first_name, argument.family_name, argument.height, argument.weight
            );
            last_count = argument.count;
            results.send(evaluate(&argument));
        }

        if last_count == settings.iterations {
            return Ok(());
        }

        thread::sleep(settings.consumer_interval);
    }
}

fn evaluate(argument: &Argument) -> Outcome {
    Outcome {
        bmi: argument.weight / (argument.height * argument.height * 0.0001),
        full_name: format!("{}-{}", argument.family_name, argument.first_name),
    }
}

fn print_outcome(outcome: &Outcome) {
    println!("full name : {} bmi : {:.2}", outcome.full_name, outcome.bmi);
}
