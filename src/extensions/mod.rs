pub mod enums;
pub mod string;
#[cfg(test)]
mod tests;
