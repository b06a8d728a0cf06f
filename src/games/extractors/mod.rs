pub use connections::extract_connections;
pub use mini_crossword::extract_mini_crossword;
pub use timer::{
    extract_crossclimb, extract_mini_sudoku, extract_queens, extract_tango, extract_zip,
    parse_simple_timer,
};

mod connections;
mod mini_crossword;
mod scan;
mod timer;
