use std::io::{self, BufRead};

use tracing::{debug, info};

use crate::error::AppError;
use crate::geo::distance_km;
use crate::models::coordinate::Coordinate;
use crate::models::customer::{Customer, CustomerRecord};

pub fn decode_line(line: usize, text: &str) -> Result<Customer, AppError> {
    let record: CustomerRecord =
        serde_json::from_str(text).map_err(|source| AppError::Malformed { line, source })?;

    Customer::try_from(record).map_err(|source| AppError::InvalidCoordinate { line, source })
}

pub fn matches(customer: &Customer, reference: &Coordinate, radius_km: f64) -> Option<f64> {
    let distance = distance_km(reference, &customer.location);
    (distance < radius_km).then_some(distance)
}

/// The first malformed record or read failure aborts the scan and no partial
/// results are returned.
pub fn filter_within_radius<R: BufRead>(
    reader: R,
    reference: &Coordinate,
    radius_km: f64,
) -> Result<Vec<Customer>, AppError> {
    let numbered = reader.lines().enumerate().map(|(index, line)| (index + 1, line));
    let scan = scan_records(numbered, reference, radius_km)?;

    info!(
        scanned = scan.scanned,
        matched = scan.customers.len(),
        radius_km,
        "filter completed"
    );

    Ok(scan.customers)
}

pub(crate) struct Scan {
    pub customers: Vec<Customer>,
    pub scanned: usize,
}

pub(crate) fn scan_records<I>(
    records: I,
    reference: &Coordinate,
    radius_km: f64,
) -> Result<Scan, AppError>
where
    I: IntoIterator<Item = (usize, io::Result<String>)>,
{
    let mut scan = Scan {
        customers: Vec::new(),
        scanned: 0,
    };

    for (line, text) in records {
        let customer = decode_line(line, &text?)?;
        scan.scanned += 1;

        if let Some(distance) = matches(&customer, reference, radius_km) {
            debug!(
                user_id = customer.user_id,
                distance_km = distance,
                "customer within radius"
            );
            scan.customers.push(customer);
        }
    }

    Ok(scan)
}
