pub mod exception;
pub mod puzzle;
pub mod util;
pub mod xor;

pub use crate::exception::PuzzleError;
pub use crate::puzzle::{generate, generate_with_key, generate_with_rng, Puzzle, FLAG};
pub use crate::xor::{apply_single_byte_xor, brute_force_xor_key, recover_flag_key};
