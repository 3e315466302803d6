use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};

use xml2wiki::{BuildOptions, ConvertOptions, RenderOptions};

fn cli() -> Command {
    Command::new("xml2wiki")
        .about("Convert Texinfo XML to Google Code wiki markup")
        .arg(
            Arg::new("input")
                .help("Texinfo XML file produced by makeinfo --xml, or - for stdin")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Write wiki text to FILE instead of stdout"),
        )
        .arg(
            Arg::new("indent")
                .long("indent")
                .value_name("N")
                .default_value("4")
                .value_parser(value_parser!(usize))
                .help("Spaces per indentation level"),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Trace element open/close events to stderr"),
        )
        .arg(
            Arg::new("text")
                .short('t')
                .long("text")
                .action(ArgAction::SetTrue)
                .help("Trace text events to stderr"),
        )
}

fn options_from(matches: &ArgMatches) -> ConvertOptions {
    let indent_width = matches.get_one::<usize>("indent").copied().unwrap_or(4);

    ConvertOptions {
        build: BuildOptions {
            trace_elements: matches.get_flag("debug"),
            trace_text: matches.get_flag("text"),
        },
        render: RenderOptions::new().with_indent_width(indent_width),
    }
}

fn init_tracing(options: &BuildOptions) {
    let default_filter = if options.trace_elements || options.trace_text {
        "warn,xml2wiki=debug"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let matches = cli().get_matches();
    let options = options_from(&matches);
    init_tracing(&options.build);

    let input = matches
        .get_one::<String>("input")
        .context("missing input argument")?;

    let source: Box<dyn io::BufRead> = if input == "-" {
        Box::new(BufReader::new(io::stdin().lock()))
    } else {
        let file = File::open(input).with_context(|| format!("Failed to open {}", input))?;
        Box::new(BufReader::new(file))
    };

    let sink: Box<dyn Write> = match matches.get_one::<String>("output") {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("Failed to create {}", path))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    tracing::debug!("Converting {}", input);
    let mut sink = xml2wiki::convert(source, sink, &options)
        .with_context(|| format!("Failed to convert {}", input))?;
    sink.flush()?;

    Ok(())
}
