use bitcheckers::bitwise;
use bitcheckers::error::{BitwiseError, BitwiseResult};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Value to convert
    value: String,

    /// Base the input value is written in
    #[arg(short, long, default_value = "dec", value_parser = ["dec", "bin", "hex"])]
    base: String,
}

fn run(args: &Args) -> BitwiseResult<()> {
    let n = match args.base.as_str() {
        "bin" => bitwise::binary_to_decimal(&args.value)?,
        "hex" => bitwise::hexadecimal_to_decimal(&args.value)?,
        _ => args
            .value
            .parse::<i64>()
            .map_err(|_| BitwiseError::InvalidFormat {
                input: args.value.clone(),
                base: 10,
            })?,
    };

    println!("decimal: {}", n);
    println!("binary:  {}", bitwise::decimal_to_binary(n));
    println!("hex:     {}", bitwise::decimal_to_hexadecimal(n));
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
