use std::io;
use std::io::Write;

use clap::{App, Arg};
use content_classifier::Pipeline;

fn main() {
    env_logger::Builder::from_default_env()
        .default_format_timestamp_nanos(true)
        .init();

    let matches = App::new("content-classify")
        .about("Interactive CLI classifying texts with a pipeline model")
        .arg(
            Arg::with_name("PIPELINE_PATH")
                .required(true)
                .takes_value(true)
                .index(1)
                .help("path to the json pipeline model"),
        )
        .arg(
            Arg::with_name("top")
                .short("k")
                .long("top")
                .takes_value(true)
                .help("number of classes to display for each text, all of them by default"),
        )
        .get_matches();
    let pipeline_path = matches.value_of("PIPELINE_PATH").unwrap();
    let top = matches
        .value_of("top")
        .map(|v| v.to_string().parse::<usize>().unwrap());

    println!("\nLoading the pipeline...");
    let pipeline = Pipeline::from_path(pipeline_path).unwrap();
    let nb_classes = pipeline.info().classifier().classes().len();

    loop {
        print!("> ");
        io::stdout().flush().unwrap();
        let mut text = String::new();
        if io::stdin().read_line(&mut text).unwrap() == 0 {
            break;
        }
        let predictions = pipeline.top_predictions(text.trim(), top.unwrap_or(nb_classes));
        let predictions_json = serde_json::to_string_pretty(&predictions).unwrap();
        println!("{}", predictions_json);
    }
}
