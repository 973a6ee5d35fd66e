#[cfg(test)]
pub mod dom;
#[cfg(test)]
pub mod store;
