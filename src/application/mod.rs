pub mod create_order;
pub mod find_order;

#[cfg(test)]
pub(crate) mod memory;
