use crate::domain::checkout::Receipt;
use crate::domain::money::Money;
use crate::error::{CheckoutError, Result};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct OutcomeRecord<'a> {
    order: u32,
    status: &'a str,
    subtotal: Option<Money>,
    total: Option<Money>,
    reason: Option<String>,
}

/// Writes one `order,status,subtotal,total,reason` row per order.
///
/// Charged orders carry their amounts in minor units; refused orders carry
/// the failure kind as status and the error message as reason.
pub struct OutcomeWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OutcomeWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn charged(&mut self, order: u32, receipt: &Receipt) -> Result<()> {
        self.writer.serialize(OutcomeRecord {
            order,
            status: "charged",
            subtotal: Some(receipt.subtotal),
            total: Some(receipt.total),
            reason: None,
        })?;
        Ok(())
    }

    pub fn refused(&mut self, order: u32, error: &CheckoutError) -> Result<()> {
        self.writer.serialize(OutcomeRecord {
            order,
            status: error.kind(),
            subtotal: None,
            total: None,
            reason: Some(error.to_string()),
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
