pub mod filter;
pub mod shard;
