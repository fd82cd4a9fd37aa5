//! Command-line definition
//!
//! Every flag is optional: with no arguments the bundled defaults decide
//! the source image and output directory.

use clap::{Arg, ArgAction, Command as ClapCommand};

/// Build the clap command describing the CLI
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("logocrop")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Crop a logo out of an image and derive a 32x32 favicon from it")
        .arg(
            Arg::new("source")
                .short('s')
                .long("source")
                .help("Source image containing the logo")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("output-dir")
                .short('o')
                .long("output-dir")
                .help("Directory receiving logo.png and favicon.ico")
                .value_name("DIR")
                .required(false),
        )
        .arg(
            Arg::new("crop")
                .long("crop")
                .help("Crop region in pixels (left,top,right,bottom)")
                .value_name("LEFT,TOP,RIGHT,BOTTOM")
                .allow_hyphen_values(true)
                .required(false),
        )
        .arg(
            Arg::new("favicon-size")
                .long("favicon-size")
                .help("Side length of the favicon in pixels (1-256)")
                .value_name("PIXELS")
                .required(false),
        )
        .arg(
            Arg::new("filter")
                .long("filter")
                .help("Resize filter (nearest, triangle, catmullrom, gaussian, lanczos3)")
                .value_name("NAME")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Log file path")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("inspect")
                .short('i')
                .long("inspect")
                .help("Report the source dimensions and crop fit without writing anything")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Do not draw a progress bar")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
}
