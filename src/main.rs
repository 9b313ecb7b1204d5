use std::process;
use xor_puzzle::puzzle;

fn main() {
    match puzzle::generate() {
        Ok(puzzle) => println!("{}", puzzle),
        Err(error) => {
            eprintln!("{}", error);
            process::exit(1);
        }
    }
}
