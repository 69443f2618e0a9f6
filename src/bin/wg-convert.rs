use std::error::Error;
use std::path::PathBuf;

use wondergray::{convert, decode, help, operations};

fn main() {
    if let Err(e) = real_main() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn real_main() -> Result<(), Box<dyn Error>> {
    help::maybe_print_help_and_exit("wg-convert");
    let mut args = std::env::args_os().skip(1);
    let input = PathBuf::from(args.next().ok_or("no images defined")?);
    if args.next().is_some() {
        return Err("expected a single image filename".into());
    }

    let original = decode::decode_file(&input)?;
    println!(
        "Converting to grayscale: {} ({})",
        input.display(),
        operations::identify(&original)
    );

    let out_path = convert::convert_file_to_grayscale(&input)?;

    let result = decode::decode_file(&out_path)?;
    println!(
        "Output saved to: {} ({})",
        out_path.display(),
        operations::identify(&result)
    );
    Ok(())
}
