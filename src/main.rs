use recycling_report::pipeline::Pipeline;
use std::process;

fn main() {
    env_logger::init();

    Pipeline::default().run().unwrap_or_else(|err| {
        eprintln!("Error reading or writing file: {}", err);
        process::exit(1);
    });
    println!("Output file created successfully.");
}
