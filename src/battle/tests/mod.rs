pub mod common;




#[cfg(test)]
mod test_full_match;
