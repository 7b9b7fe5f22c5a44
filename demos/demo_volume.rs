//! Demonstrates the declaration surface over a volume-processing style command line.
//!
//! Try with, for instance:
//!   $ demo_volume -i inputfile.txt -vV -o outputfile.raw -s .558 .558 0.89

use monodash::FlagSet;

fn main() {
    let token_count = std::env::args().count();
    let mut set = FlagSet::from_env(
        "Test the flag parser. It simply displays the options as entered in the command line.",
    );

    let input = set.add_value_flag::<String, 1>('i', "Input file (.vti)", true);
    let extent = set.add_value_flag::<i64, 6>(
        'e',
        "Extent (dimension): xmin xmax ymin ymax zmin zmax (integer)",
        false,
    );
    let spacing = set.add_value_flag::<f64, 3>('s', "Spacing (size of pixel): x y z (double)", true);
    let output = set.add_value_flag::<String, 1>('o', "Output file (.vti)", true);
    let tag = set.add_value_flag::<u32, 1>('t', "UINT Tag. Can be hexa (prefix with 0x)", true);
    let verbose = set.add_flag('v', "Verbose output", false);
    let version = set.add_flag('V', "Display version", false);
    let help = set.add_flag('h', "Display a brief help", false);

    if !set.is_valid() || help.exists() || token_count == 1 {
        set.print_usage();
        std::process::exit(0);
    }

    println!("Verbose? {}", if verbose.exists() { "Yes" } else { "No" });
    println!("Version? {}", if version.exists() { "Yes" } else { "No" });
    println!("Input filename: {}", input.value(0));
    println!("Output filename: {}", output.value(0));
    println!("Tag: {}", tag.value(0));

    if extent.exists() {
        let rendered: Vec<String> = extent.values().iter().map(|value| value.to_string()).collect();
        println!("Extent: {}", rendered.join(" ; "));
    } else {
        println!("Extent: n/a");
    }

    let rendered: Vec<String> = spacing.values().iter().map(|value| value.to_string()).collect();
    println!("Spacing: {}", rendered.join(" ; "));
}
