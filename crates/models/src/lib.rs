pub mod errors;
pub mod roast;

#[cfg(test)]
mod tests;
