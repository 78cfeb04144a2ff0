#[macro_use]
extern crate clap;
extern crate image;

use clap::{App, Arg};
use failure::{format_err, Error, ResultExt};
use seamshrink::convert::{grid_from_image, grid_to_image};
use seamshrink::dump::energy_to_image;
use seamshrink::logging::init_logging;
use seamshrink::{CarveConfig, SeamCarver};
use std::process;
use tracing::info;

fn run() -> Result<(), Error> {
    let matches = App::new("seamshrink")
        .version(crate_version!())
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Narrow an image by removing low-energy seams")
        .arg(
            Arg::with_name("INPUT")
                .help("The image to shrink")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("FILE")
                .help("Where to write the result")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("seams")
                .short("n")
                .long("seams")
                .value_name("COUNT")
                .help("How many columns to remove [default: 50]")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .help("Write the energy map of the input instead of carving"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Log every removed seam"),
        )
        .get_matches();

    let mut config = CarveConfig::default();
    if matches.is_present("seams") {
        config = config.with_seams_per_request(value_t!(matches, "seams", u32)?);
    }
    if matches.is_present("verbose") {
        config = config.with_log_level("debug");
    }
    init_logging(&config);

    let input = matches.value_of("INPUT").unwrap_or_default();
    let output = matches.value_of("output").unwrap_or_default();

    let rgb = image::open(input)
        .with_context(|_| format!("could not read {}", input))?
        .to_rgb8();
    info!(input, width = rgb.width(), height = rgb.height(), "image loaded");

    let mut carver = SeamCarver::new(grid_from_image(&rgb)?, config)?;

    if matches.is_present("energy") {
        carver.analyze()?;
        energy_to_image(carver.energy())
            .save(output)
            .with_context(|_| format!("could not write {}", output))?;
        return Ok(());
    }

    carver.request_default_removal()?;
    let width = carver.run_to_completion()?;
    info!(width, "carving finished");

    let carved: image::RgbImage = grid_to_image(carver.image())
        .ok_or_else(|| format_err!("carved image does not have three channels"))?;
    carved
        .save(output)
        .with_context(|_| format!("could not write {}", output))?;
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprint!("seamshrink: {}", err);
        for cause in err.iter_causes() {
            eprint!(": {}", cause);
        }
        eprintln!();
        process::exit(1);
    }
}
