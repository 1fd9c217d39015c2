use std::{env, process};

mod logging;

fn main() {
    logging::setup_logging();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let result = movielib::resolve_catalog_file(env::var("MOVIELIB_FILE").ok(), &mut args)
        .and_then(|file| movielib::run(&file, &args));

    if let Err(e) = result {
        log::error!("{}", e);
        process::exit(1);
    }
}
