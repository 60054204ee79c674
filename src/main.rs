use clap::Parser;

use hamming_pairs::engine::{self, RunConfig};

#[derive(Parser)]
#[command(name = "hamming_pairs")]
#[command(about = "Sums pairwise character Hamming distances over two generated string groups")]
#[command(version)]
struct Args {
    /// Number of strings in group A
    m: usize,
    /// Number of strings in group B
    n: usize,
    /// Length of every string, in characters
    l: usize,
    /// Number of worker threads
    threads: usize,
}

fn main() {
    let args = Args::parse();

    let config = RunConfig {
        group_a: args.m,
        group_b: args.n,
        string_len: args.l,
        threads: args.threads,
    };

    match engine::run(&config) {
        Ok(report) => {
            println!("\nTask size: 1 character.");
            println!("Total time: {:.3} ms", report.elapsed.as_secs_f64() * 1000.0);
            println!("Total humming distance: {}", report.total_mismatches);
        }
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    }
}
