use clap::Parser;
use tracing::info;
use tracing::metadata::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use workload_api::apps::v1alpha1::StatefulSet;
use workload_api::crd;
use workload_api::Error;

pub mod opts;

fn main() -> Result<(), Error> {
    let opts = opts::Opts::parse();

    let default_level = if opts.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let log_filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();
    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(true).with_writer(std::io::stderr))
        .with(log_filter)
        .init();

    let scheme = workload_api::default_scheme()?;

    match opts.command {
        opts::SubCmd::Crd { json } => {
            let crd = crd::statefulset_crd()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&crd)?);
            } else {
                print!("{}", serde_yaml::to_string(&crd)?);
            }
        }
        opts::SubCmd::Kinds => {
            for entry in scheme.known_kinds() {
                println!("{}\t{}", entry.gvk, entry.type_name);
            }
        }
        opts::SubCmd::Decode { path } => {
            info!(path = %path.display(), "decoding manifest");
            let doc = std::fs::read_to_string(&path)?;
            // JSON is a subset of YAML, so one parser covers both.
            let statefulset: StatefulSet = scheme.decode_yaml(&doc)?;
            print!("{}", serde_yaml::to_string(&statefulset)?);
        }
    }
    Ok(())
}
