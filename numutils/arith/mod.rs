mod add;
mod checked;
mod multiply;

pub use add::add_numbers;
pub use checked::{checked_add_numbers, checked_multiply_numbers, CheckedArith};
pub use multiply::multiply_numbers;
