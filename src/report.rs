use std::io::{self, Write};

use crate::models::customer::Customer;

pub fn sort_by_id(customers: &mut [Customer]) {
    customers.sort_by_key(|customer| customer.user_id);
}

pub fn write_report<W: Write>(mut writer: W, customers: &[Customer]) -> io::Result<()> {
    for customer in customers {
        writeln!(writer, "{} {}", customer.user_id, customer.name)?;
    }
    writer.flush()
}
