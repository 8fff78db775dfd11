mod cli;

use log::{debug, error};
use std::env;
use std::io::{self, BufWriter};
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();

    let cfg = match cli::parse_args(args) {
        Ok(cfg) => cfg,
        Err(e) => {
            println!("Error: {e}");
            cli::help();
            process::exit(2)
        }
    };

    cli::logger::init(cfg.verbose);

    if cfg.version {
        println!("iniread {}", cli::VERSION);
        process::exit(0);
    }

    if cfg.help {
        cli::help();
        process::exit(0);
    }

    debug!("Starting iniread, inputs: {:?}", &cfg.inputs);

    let mut writer = BufWriter::new(io::stdout().lock());
    match cli::run(&cfg, &mut writer) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            error!("Can't write listing: {e}");
            process::exit(1)
        }
    }
}
