use clap::Parser;

use amc_helper::{length_add, logging, public_key, AddFive, CrossCaller};

#[derive(Debug, Parser)]
#[command(name = "amc-helper-demo")]
#[command(about = "Exercises the helper across its module boundary")]
struct Args {
    /// Integer passed to the length adder
    #[arg(long, default_value_t = 5, allow_negative_numbers = true)]
    p1: i32,

    /// String whose length is added
    #[arg(long, default_value = "this is a string", conflicts_with = "no_text")]
    text: String,

    /// Call the length adder with an absent string
    #[arg(long)]
    no_text: bool,

    /// Integer forwarded to the partner's high-five function
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    partner_input: i32,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(args.verbose)?;

    tracing::info!("Starting amc-helper demo");
    tracing::debug!("args: {:?}", args);

    let text = (!args.no_text).then_some(args.text.as_str());
    println!("Calling length_add...");
    let v = length_add(args.p1, text);
    println!("  .. the returned value was {v}");

    println!("Calling the partner for a high five...");
    let caller = CrossCaller::new(AddFive);
    let v = caller.call(args.partner_input);
    println!("  .. the returned value was {v}");

    println!("{}", public_key());
    Ok(())
}
