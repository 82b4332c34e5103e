use std::io::BufRead;

use futures::future::join_all;
use tracing::{debug, info};

use crate::engine::filter::scan_records;
use crate::error::AppError;
use crate::models::coordinate::Coordinate;
use crate::models::customer::Customer;

pub fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>, AppError> {
    reader
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(AppError::from)
}

/// Shard results are concatenated in input order. If any shard fails, the error
/// from the earliest failing shard is returned.
pub async fn filter_sharded(
    lines: Vec<String>,
    reference: Coordinate,
    radius_km: f64,
    workers: usize,
) -> Result<Vec<Customer>, AppError> {
    let shards = split_into_shards(lines, workers.max(1));
    let shard_count = shards.len();

    let handles = shards.into_iter().enumerate().map(move |(index, (offset, shard))| {
        tokio::task::spawn_blocking(move || {
            let numbered = shard
                .into_iter()
                .enumerate()
                .map(|(i, line)| (offset + i + 1, Ok(line)));
            let scan = scan_records(numbered, &reference, radius_km)?;
            debug!(
                shard = index,
                scanned = scan.scanned,
                matched = scan.customers.len(),
                "shard completed"
            );
            Ok::<_, AppError>(scan)
        })
    });

    let mut customers = Vec::new();
    let mut scanned = 0;
    for joined in join_all(handles).await {
        let scan = joined.map_err(|err| AppError::Worker(err.to_string()))??;
        scanned += scan.scanned;
        customers.extend(scan.customers);
    }

    info!(
        shards = shard_count,
        scanned,
        matched = customers.len(),
        radius_km,
        "sharded filter completed"
    );

    Ok(customers)
}

// `offset` is the zero-based input index of the shard's first line.
fn split_into_shards(lines: Vec<String>, workers: usize) -> Vec<(usize, Vec<String>)> {
    if lines.is_empty() {
        return Vec::new();
    }

    let shard_size = lines.len().div_ceil(workers);
    let mut shards = Vec::with_capacity(workers);
    let mut offset = 0;
    let mut rest = lines.into_iter();

    loop {
        let shard: Vec<String> = rest.by_ref().take(shard_size).collect();
        if shard.is_empty() {
            break;
        }
        let len = shard.len();
        shards.push((offset, shard));
        offset += len;
    }

    shards
}
