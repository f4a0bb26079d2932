use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
pub struct Opts {
    #[clap(subcommand)]
    pub command: SubCmd,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[clap(long, short, global = true)]
    pub verbose: bool,
}

#[derive(clap::Subcommand, Debug)]
pub enum SubCmd {
    /// Print the CustomResourceDefinition manifest.
    Crd {
        /// Emit JSON instead of YAML.
        #[clap(long)]
        json: bool,
    },
    /// List the kinds registered in the scheme.
    Kinds,
    /// Decode a StatefulSet manifest and print it back in normalized form.
    Decode {
        /// Path to a YAML or JSON manifest.
        path: PathBuf,
    },
}
